//! Quoted string parsing
//!
//! Only `\"` and `\\` are recognized escapes. Unescaped runs are copied as
//! whole slices; both delimiters are ASCII so a multi-byte character can
//! never be split.

use super::core::ValueParser;
use crate::error::{ParseError, ParseResult};

impl ValueParser<'_> {
    pub(super) fn parse_string(&mut self) -> ParseResult<String> {
        let open = self.position;
        self.position += 1; // opening quote

        let mut result = String::new();
        let mut run_start = self.position;

        while let Some(byte) = self.peek() {
            match byte {
                b'"' => {
                    result.push_str(&self.input[run_start..self.position]);
                    self.position += 1;
                    return Ok(result);
                }
                b'\\' => {
                    result.push_str(&self.input[run_start..self.position]);
                    self.position += 1;
                    run_start = self.position;
                    match self.current_char() {
                        Some(escaped @ ('"' | '\\')) => {
                            result.push(escaped);
                            self.position += 1;
                            run_start = self.position;
                        }
                        Some(escaped) => {
                            return Err(ParseError::invalid_escape(escaped, self.position - 1));
                        }
                        None => break,
                    }
                }
                _ => self.position += 1,
            }
        }

        if self.config.lenient_strings {
            result.push_str(&self.input[run_start..self.position]);
            tracing::debug!(
                target: "datasieve::parser",
                offset = open,
                "unterminated string accepted in lenient mode"
            );
            return Ok(result);
        }

        Err(ParseError::unterminated_string(open))
    }
}
