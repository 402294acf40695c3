//! Recursive-descent value parser
//!
//! Single pass over a cursor into the input text, no backtracking and no
//! recovery. The grammar is a deliberately small JSON dialect:
//!
//! - objects, arrays, strings, numbers, `true`, `false`, `null`
//! - string escapes limited to `\"` and `\\`
//! - numbers are a run of digits, `.` and `-` converted to one `f64`
//! - no exponents, no unicode escapes, no comments
//! - a comma directly before a closing bracket is tolerated
//!
//! Decomposed by syntactic category: `core` owns the cursor and dispatch,
//! the remaining modules each parse one kind of value.

mod containers;
mod core;
mod literals;
mod numbers;
mod strings;

pub use self::core::ValueParser;

use crate::config::ParserConfig;
use crate::error::ParseResult;
use crate::value::DynamicValue;

/// Parse a complete document with default settings
///
/// # Errors
///
/// Returns a [`ParseError`](crate::error::ParseError) carrying the offset and
/// reason of the first grammar violation.
///
/// # Examples
/// ```
/// use datasieve_core::parse;
///
/// let tree = parse(r#"{"name": "Chai", "price": 18}"#).unwrap();
/// assert_eq!(tree.get("price").and_then(|v| v.as_f64()), Some(18.0));
/// ```
#[inline]
pub fn parse(text: &str) -> ParseResult<DynamicValue> {
    ValueParser::new(text).parse()
}

/// Parse a complete document with explicit settings
///
/// # Errors
///
/// Same as [`parse`].
#[inline]
pub fn parse_with_config(text: &str, config: &ParserConfig) -> ParseResult<DynamicValue> {
    ValueParser::with_config(text, config.clone()).parse()
}
