use thiserror::Error;

use crate::dictionary::LookupError;

#[derive(Debug, Error)]
pub enum LexiError {
    #[error("Dictionary lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
