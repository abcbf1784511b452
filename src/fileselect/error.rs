use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileSelectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Invalid handle: {0}")]
    InvalidHandle(usize),
}

pub type Result<T> = std::result::Result<T, FileSelectError>;
