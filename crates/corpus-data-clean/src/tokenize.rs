use crate::stopwords::is_stop_word;
use regex::Regex;
use std::sync::LazyLock;

// control chars, ascii punctuation and digits
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x1F[:punct:]0-9]").expect("separator class is a valid regex")
});

/// Words shorter than this are dropped before lowercasing.
pub const MIN_WORD_LENGTH: usize = 3;

pub type WordSequence = Vec<String>;

pub fn tokenize(text: &str) -> WordSequence {
    SEPARATORS
        .replace_all(text, " ")
        .split(' ')
        .filter(|word| word.chars().count() >= MIN_WORD_LENGTH)
        .map(str::to_lowercase)
        .filter(|word| !is_stop_word(word))
        .collect()
}
