//! Filterable records
//!
//! A record is anything that can answer "what is the value of field X?" with
//! a comparably-typed [`FieldValue`], or `None` when the field is absent.
//! Parsed objects answer for arbitrary keys; typed structs answer for a
//! closed set of names.

mod core;
mod product;

pub use self::core::{FieldValue, Record};
pub use product::{Product, ProductField};
