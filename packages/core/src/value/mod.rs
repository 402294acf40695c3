//! Dynamic value tree produced by the parser
//!
//! A parsed document is an owned tree of [`DynamicValue`] nodes. Objects keep
//! their members in insertion order; a repeated key overwrites the earlier
//! value in place.

mod conversions;
mod core;
mod serialize;

pub use self::core::{DynamicValue, Map};
