//! Record extraction from service payloads
//!
//! A service payload is an object whose collection member (`"value"` by
//! default) holds an array of record objects. [`Dataset`] pulls those objects
//! out, remembers every property name it saw, and hands them to the filter.
//! [`Projection`] tracks which properties a caller currently wants to see.

mod core;
mod error;
mod projection;

pub use self::core::Dataset;
pub use error::{DatasetError, DatasetResult};
pub use projection::Projection;
