//! Two-class multinomial Naive Bayes over bag-of-words counts, with a seeded
//! k-fold cross-validation harness.

use corpus_data_clean::{FeatureMatrix, LabelVector};

mod error;
pub mod model_selection;
pub mod naive_bayes;

pub use error::{ClassifierError, Result};
pub use model_selection::{cross_validate, kfold_cv, CrossValidationResult};
pub use smartcore::model_selection::KFold;
pub use naive_bayes::{NaiveBayes, NaiveBayesParameters};

/// Cross-validation only relies on this trait, so any binary classifier can
/// be evaluated with it.
pub trait Classifier {
    fn fit(&mut self, x: &FeatureMatrix, y: &[u8]) -> Result<()>;

    fn predict(&self, x: &FeatureMatrix) -> Result<LabelVector>;
}
