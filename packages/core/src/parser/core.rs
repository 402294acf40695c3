//! Parser context and value dispatch
//!
//! The cursor lives in [`ValueParser`] and is threaded through every
//! sub-parse by `&mut self`.

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};
use crate::value::DynamicValue;

/// Parsing context: input text, cursor and nesting depth
pub struct ValueParser<'a> {
    pub(super) input: &'a str,
    pub(super) position: usize,
    pub(super) depth: usize,
    pub(super) config: ParserConfig,
}

impl<'a> ValueParser<'a> {
    /// Create a parser with default settings
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Create a parser with explicit settings
    #[inline]
    #[must_use]
    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self {
            input,
            position: 0,
            depth: 0,
            config,
        }
    }

    /// Byte offset of the cursor
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parse the whole input as one value
    ///
    /// Empty or all-whitespace input yields `Null`. Anything but whitespace
    /// after the top-level value is an error.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation encountered.
    pub fn parse(mut self) -> ParseResult<DynamicValue> {
        let result = self.parse_value().and_then(|value| {
            self.skip_whitespace();
            match self.current_char() {
                None => Ok(value),
                Some(found) => Err(ParseError::trailing_character(found, self.position)),
            }
        });

        if let Err(ref error) = result {
            tracing::debug!(
                target: "datasieve::parser",
                offset = error.offset,
                input_len = self.input.len(),
                error = %error,
                "parse failed"
            );
        }
        result
    }

    /// Parse one value at the cursor
    pub(super) fn parse_value(&mut self) -> ParseResult<DynamicValue> {
        self.skip_whitespace();

        let Some(current) = self.peek() else {
            return Ok(DynamicValue::Null);
        };

        match current {
            b'{' => self.parse_object().map(DynamicValue::Object),
            b'[' => self.parse_array().map(DynamicValue::Array),
            b'"' => self.parse_string().map(DynamicValue::String),
            b'-' | b'0'..=b'9' => self.parse_number().map(DynamicValue::Number),
            _ => self.parse_keyword(),
        }
    }

    #[inline]
    pub(super) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.position += 1;
        }
    }

    /// Byte under the cursor
    #[inline]
    pub(super) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Full character under the cursor, for error messages
    #[inline]
    pub(super) fn current_char(&self) -> Option<char> {
        self.input.get(self.position..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub(super) fn rest(&self) -> &'a str {
        self.input.get(self.position..).unwrap_or_default()
    }

    /// Step into a container, failing past the configured depth
    pub(super) fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(ParseError::depth_exceeded(
                self.config.max_depth,
                self.position,
            ));
        }
        Ok(())
    }

    #[inline]
    pub(super) fn leave(&mut self) {
        self.depth -= 1;
    }
}
