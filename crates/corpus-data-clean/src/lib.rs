//! Turns two directories of text documents into a bag-of-words matrix and a
//! label vector ready for a binary classifier.

use std::path::Path;

use log::debug;
use smartcore::linalg::basic::matrix::DenseMatrix;

mod error;
pub mod loader;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;
pub mod vocabulary;

pub use error::{CorpusError, Result};
pub use loader::{filelist, get_text, load_docs};
pub use tokenize::{tokenize, WordSequence};
pub use vectorize::{vectorize, vectorize_docs};
pub use vocabulary::{Vocabulary, UNKNOWN_INDEX, UNKNOWN_WORD};

pub type FeatureMatrix = DenseMatrix<f64>;

pub type LabelVector = Vec<u8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    pub fn class(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

/// A vectorized two-class corpus. Negative documents come first, then
/// positive ones, and `labels` follows the same order as `features` rows.
#[derive(Debug)]
pub struct Corpus {
    pub vocabulary: Vocabulary,
    pub features: FeatureMatrix,
    pub labels: LabelVector,
}

impl Corpus {
    pub fn load<P, Q>(negative_dir: P, positive_dir: Q) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let negative = load_docs(negative_dir)?;
        let positive = load_docs(positive_dir)?;
        Ok(Self::from_documents(negative, positive))
    }

    pub fn from_documents(negative: Vec<WordSequence>, positive: Vec<WordSequence>) -> Self {
        let vocabulary = Vocabulary::build(&negative, &positive);

        let labels = std::iter::repeat(Label::Negative.class())
            .take(negative.len())
            .chain(std::iter::repeat(Label::Positive.class()).take(positive.len()))
            .collect::<Vec<_>>();

        let mut docs = negative;
        docs.extend(positive);
        let features = vectorize_docs(&vocabulary, &docs);

        debug!(
            "vectorized {} documents over {} vocabulary entries",
            docs.len(),
            vocabulary.len()
        );

        Self {
            vocabulary,
            features,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
