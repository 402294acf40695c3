//! Keyword literals: `true`, `false`, `null`
//!
//! Matched by prefix with no word-boundary check; whatever follows the
//! keyword is left for the caller to accept or reject.

use super::core::ValueParser;
use crate::error::{ParseError, ParseResult};
use crate::value::DynamicValue;

impl ValueParser<'_> {
    pub(super) fn parse_keyword(&mut self) -> ParseResult<DynamicValue> {
        let rest = self.rest();

        let (keyword, value) = if rest.starts_with("true") {
            ("true", DynamicValue::Bool(true))
        } else if rest.starts_with("false") {
            ("false", DynamicValue::Bool(false))
        } else if rest.starts_with("null") {
            ("null", DynamicValue::Null)
        } else {
            return match self.current_char() {
                Some(found) => Err(ParseError::unexpected_character(found, self.position)),
                None => Ok(DynamicValue::Null),
            };
        };

        self.position += keyword.len();
        Ok(value)
    }
}
