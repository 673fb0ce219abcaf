//! Deterministic word to column-index mapping shared by every vectorized
//! document of a training run.

use std::collections::{BTreeSet, HashMap};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::tokenize::WordSequence;

/// Placeholder stored at index 0. No real word is ever assigned that index.
pub const UNKNOWN_WORD: &str = "__unknown__";

pub const UNKNOWN_INDEX: usize = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Vocabulary {}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = CorpusError;

    fn try_from(words: Vec<String>) -> Result<Self> {
        if words.first().map(String::as_str) != Some(UNKNOWN_WORD) {
            return Err(CorpusError::InvalidVocabulary(format!(
                "index {UNKNOWN_INDEX} must hold {UNKNOWN_WORD}"
            )));
        }
        let vocabulary = Self::from_words(words);
        if vocabulary.index.len() != vocabulary.words.len() {
            return Err(CorpusError::InvalidVocabulary(
                "words are not distinct".to_string(),
            ));
        }
        Ok(vocabulary)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.words
    }
}

impl Vocabulary {
    /// Distinct words of both classes, sorted and numbered from 1.
    pub fn build(negative: &[WordSequence], positive: &[WordSequence]) -> Self {
        let distinct = negative
            .iter()
            .chain(positive)
            .flatten()
            .map(String::as_str)
            .filter(|word| *word != UNKNOWN_WORD)
            .collect::<BTreeSet<_>>();

        let words = std::iter::once(UNKNOWN_WORD)
            .chain(distinct)
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        let vocabulary = Self::from_words(words);
        debug!("built vocabulary with {} entries", vocabulary.len());
        vocabulary
    }

    fn from_words(words: Vec<String>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i))
            .collect();
        Self { words, index }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn get_or_default(&self, word: &str, default: usize) -> usize {
        self.get(word).unwrap_or(default)
    }

    /// Column index for `word`, [`UNKNOWN_INDEX`] if it was never seen.
    pub fn index_of(&self, word: &str) -> usize {
        self.get_or_default(word, UNKNOWN_INDEX)
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.as_str(), i))
    }
}
