use crate::config::ConfigurationError;
use crate::error::ParseError;

/// Result type for dataset extraction
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Payload did not have the expected shape
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("payload root is {found}, expected an object")]
    NotAnObject { found: &'static str },

    #[error("payload has no '{0}' member")]
    MissingCollection(String),

    #[error("payload member '{key}' is {found}, expected an array")]
    NotAnArray { key: String, found: &'static str },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}
