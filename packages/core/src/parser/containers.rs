//! Object and array parsing

use super::core::ValueParser;
use crate::error::{ParseError, ParseResult};
use crate::value::{DynamicValue, Map};

impl ValueParser<'_> {
    /// Parse `{ "key": value, ... }`; a repeated key overwrites the earlier value
    /// and an empty key is rejected
    pub(super) fn parse_object(&mut self) -> ParseResult<Map> {
        self.enter()?;
        tracing::trace!(target: "datasieve::parser", offset = self.position, depth = self.depth, "object");
        self.position += 1; // '{'

        let mut map = Map::new();

        loop {
            self.skip_whitespace();

            match self.current_char() {
                None => return Err(ParseError::unexpected_end("object", self.position)),
                Some('}') => {
                    self.position += 1;
                    break;
                }
                Some('"') => {}
                Some(found) => return Err(ParseError::expected("'\"'", found, self.position)),
            }

            let key_start = self.position;
            let key = self.parse_string()?;
            if key.is_empty() {
                return Err(ParseError::empty_key(key_start));
            }
            self.skip_whitespace();

            match self.current_char() {
                Some(':') => self.position += 1,
                Some(found) => return Err(ParseError::expected("':'", found, self.position)),
                None => return Err(ParseError::unexpected_end("object", self.position)),
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_whitespace();

            match self.current_char() {
                Some('}') => {
                    self.position += 1;
                    break;
                }
                Some(',') => self.position += 1,
                Some(found) => {
                    return Err(ParseError::expected("',' or '}'", found, self.position));
                }
                None => return Err(ParseError::unexpected_end("object", self.position)),
            }
        }

        self.leave();
        Ok(map)
    }

    /// Parse `[ value, ... ]`
    pub(super) fn parse_array(&mut self) -> ParseResult<Vec<DynamicValue>> {
        self.enter()?;
        tracing::trace!(target: "datasieve::parser", offset = self.position, depth = self.depth, "array");
        self.position += 1; // '['

        let mut items = Vec::new();

        loop {
            self.skip_whitespace();

            match self.peek() {
                None => return Err(ParseError::unexpected_end("array", self.position)),
                Some(b']') => {
                    self.position += 1;
                    break;
                }
                Some(_) => {}
            }

            items.push(self.parse_value()?);

            self.skip_whitespace();

            match self.current_char() {
                Some(']') => {
                    self.position += 1;
                    break;
                }
                Some(',') => self.position += 1,
                Some(found) => {
                    return Err(ParseError::expected("',' or ']'", found, self.position));
                }
                None => return Err(ParseError::unexpected_end("array", self.position)),
            }
        }

        self.leave();
        Ok(items)
    }
}
