use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to (de)serialize model: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
