//! Datasieve Public API
//!
//! Parse service payloads into dynamic records and query them with
//! declarative filter descriptors. Transport and presentation stay with the
//! caller: hand text in, get records or an error out.
//!
//! ```rust
//! use datasieve::{Dataset, DatasetConfig, Sieve};
//!
//! let payload = r#"{"value": [
//!     {"ProductID": 1, "ProductName": "Chai", "UnitPrice": 18},
//!     {"ProductID": 2, "ProductName": "Chang", "UnitPrice": 19},
//!     {"ProductID": 4, "ProductName": "Chai", "UnitPrice": 20}
//! ]}"#;
//!
//! let dataset = Dataset::parse(payload, &DatasetConfig::default())?;
//! let kept = Sieve::new()
//!     .equals("ProductName", "Chai")
//!     .greater_than("UnitPrice", 18)
//!     .apply_dataset(&dataset);
//!
//! assert_eq!(kept.len(), 1);
//! # Ok::<(), datasieve::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod error;
pub mod loader;

pub use builder::Sieve;
pub use error::{Error, Result};
pub use loader::{PayloadSender, PendingDataset, pending_dataset};

// Re-export the core types callers work with
pub use datasieve_core::{
    Comparator, Dataset, DatasetConfig, DatasetError, DynamicValue, FieldValue, FilterDescriptor,
    FilterStats, Map, ParseError, ParseErrorKind, ParserConfig, Product, Projection, Record,
    UnknownComparator, filter, filter_cloned, matches, parse, parse_with_config,
};

/// Parse `text` and extract its records with the default configuration
///
/// # Errors
///
/// Returns `Error::Parse` for malformed text and `Error::Dataset` when the
/// payload has no record array.
pub fn load(text: &str) -> Result<Dataset> {
    Ok(Dataset::parse(text, &DatasetConfig::default())?)
}
