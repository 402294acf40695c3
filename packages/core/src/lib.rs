//! # Datasieve Core
//!
//! Minimal JSON-like value parser and declarative predicate filter.
//!
//! The parser turns a text payload into an owned [`DynamicValue`] tree. The
//! filter keeps the records (parsed objects or typed structs) that satisfy
//! every [`FilterDescriptor`] in a request. Neither touches the network or
//! any UI; callers fetch text, parse it, filter it and render the result.
//!
//! ## Features
//!
//! - **Recursive-descent parser** with byte offsets on every error
//! - **Insertion-ordered objects** with last-write-wins duplicate keys
//! - **Conjunctive filtering** over dynamic and typed records with one set
//!   of comparator semantics
//! - **Dataset extraction** of record arrays from service payloads, with
//!   property discovery and toggleable projections
//!
//! ## Usage
//!
//! ```rust
//! use datasieve_core::{filter, parse, FilterDescriptor};
//!
//! let tree = parse(r#"[{"Name": "Chai", "Price": 18}, {"Name": "Chang", "Price": 19}]"#)?;
//! let records = tree.as_array().unwrap_or_default();
//!
//! let kept = filter(records, &[FilterDescriptor::contains("Name", "chan")]);
//! assert_eq!(kept.len(), 1);
//! # Ok::<(), datasieve_core::ParseError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod parser;
pub mod record;
pub mod stats;
pub mod value;

pub mod prelude;

pub use crate::prelude::*;
