//! Facade error type
//!
//! Collects every failure a caller can see: malformed text, a payload of
//! the wrong shape, an unrecognized comparator, or a fetch that never
//! produced text.

use datasieve_core::{DatasetError, ParseError, UnknownComparator};

/// A Result alias where the Err case is `datasieve::Error`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("dataset error: {0}")]
    Dataset(DatasetError),

    #[error(transparent)]
    UnknownComparator(#[from] UnknownComparator),

    /// The fetch layer reported a failure instead of a payload
    #[error("error fetching data: {0}")]
    Transport(String),

    /// The payload sender was dropped without delivering anything
    #[error("payload sender dropped before delivering data")]
    Abandoned,
}

/// Parse failures inside dataset extraction surface as `Error::Parse`
impl From<DatasetError> for Error {
    fn from(error: DatasetError) -> Self {
        match error {
            DatasetError::Parse(parse) => Error::Parse(parse),
            other => Error::Dataset(other),
        }
    }
}
