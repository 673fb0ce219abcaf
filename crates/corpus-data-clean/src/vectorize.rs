use smartcore::linalg::basic::arrays::{Array1, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::numbers::basenum::Number;

use crate::tokenize::WordSequence;
use crate::vocabulary::Vocabulary;

/// Element 0 counts the words missing from `vocabulary`.
pub fn vectorize<T: Number>(vocabulary: &Vocabulary, words: &[String]) -> Vec<T> {
    let mut row = Vec::zeros(vocabulary.len());

    for word in words {
        row.add_element_mut(vocabulary.index_of(word), T::one());
    }

    row
}

pub fn vectorize_docs<T: Number>(vocabulary: &Vocabulary, docs: &[WordSequence]) -> DenseMatrix<T> {
    if docs.is_empty() {
        return <DenseMatrix<T> as Array2<T>>::zeros(0, vocabulary.len());
    }

    let rows = docs
        .iter()
        .map(|words| vectorize::<T>(vocabulary, words))
        .collect::<Vec<_>>();

    DenseMatrix::from_2d_vec(&rows)
}
