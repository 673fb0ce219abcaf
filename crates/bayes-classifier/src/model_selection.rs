use corpus_data_clean::FeatureMatrix;
use log::{info, trace};
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::metrics::accuracy;
use smartcore::model_selection::{BaseKFold, KFold};

use crate::error::{ClassifierError, Result};
use crate::Classifier;

pub const DEFAULT_SEED: u64 = 999;

#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidationResult {
    pub scores: Vec<f64>,
}

impl CrossValidationResult {
    pub fn mean(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.;
        }
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }

    pub fn std(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.;
        }
        let mean = self.mean();
        let variance = self
            .scores
            .iter()
            .map(|score| (score - mean).powi(2))
            .sum::<f64>()
            / self.scores.len() as f64;
        variance.sqrt()
    }

    pub fn min(&self) -> f64 {
        self.scores.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.scores.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

pub fn cross_validate<C: Classifier>(
    model: &mut C,
    x: &FeatureMatrix,
    y: &[u8],
    cv: &KFold,
) -> Result<CrossValidationResult> {
    let nrows = x.shape().0;
    if nrows != y.len() {
        return Err(ClassifierError::InvalidInput(format!(
            "{nrows} rows but {} labels",
            y.len()
        )));
    }
    let k = cv.n_splits;
    if k < 2 || k > nrows {
        return Err(ClassifierError::InvalidConfiguration(format!(
            "cannot split {nrows} samples into {k} folds, need 2 <= k <= {nrows}"
        )));
    }

    let mut scores = Vec::with_capacity(k);
    for (fold, (train, validation)) in cv.split(x).enumerate() {
        let y_train = train.iter().map(|&row| y[row]).collect::<Vec<_>>();
        let y_validation = validation.iter().map(|&row| y[row]).collect::<Vec<_>>();

        model.fit(&x.take(&train, 0), &y_train)?;
        let predicted = model.predict(&x.take(&validation, 0))?;
        let score = accuracy(&y_validation, &predicted);

        trace!(
            "fold {fold}: trained on {}, validated on {}, accuracy {score:.4}",
            train.len(),
            validation.len()
        );
        scores.push(score);
    }

    let result = CrossValidationResult { scores };
    info!(
        "{k}-fold cross-validation: mean accuracy {:.4} (std {:.4})",
        result.mean(),
        result.std()
    );
    Ok(result)
}

/// Shuffled `k`-fold cross-validation with a fixed seed, so runs are
/// reproducible rather than a randomized evaluation.
pub fn kfold_cv<C: Classifier>(
    model: &mut C,
    x: &FeatureMatrix,
    y: &[u8],
    k: usize,
) -> Result<Vec<f64>> {
    let cv = KFold {
        n_splits: k,
        shuffle: true,
        seed: Some(DEFAULT_SEED),
    };
    cross_validate(model, x, y, &cv).map(|result| result.scores)
}
