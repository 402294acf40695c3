//! Parse error handling module
//!
//! Error types and constructors for the value parser. Every grammar violation
//! surfaces as a [`ParseError`] carrying the byte offset of the offending
//! character and a [`ParseErrorKind`] describing what went wrong.

pub mod constructors;
pub mod types;

pub use types::{ParseError, ParseErrorKind, ParseResult};
