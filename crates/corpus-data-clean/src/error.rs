use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path} as latin-1: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

pub type Result<T> = std::result::Result<T, CorpusError>;
