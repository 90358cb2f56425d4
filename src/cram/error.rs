use thiserror::Error;

#[derive(Error, Debug)]
pub enum CramError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Question bank error: {0}")]
    Bank(String),
}

pub type Result<T> = std::result::Result<T, CramError>;
