use thiserror::Error;

use crate::options::Slot;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown {slot} option: {value:?}")]
    UnknownOption { slot: Slot, value: String },
}

pub type FolioResult<T> = Result<T, FolioError>;
