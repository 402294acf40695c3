//! Number parsing
//!
//! Scans permissively (any run of digits, `.` and `-`) and then converts
//! strictly, so malformed tokens such as `1-2.3.4` are rejected at
//! conversion time with the whole token in the error.

use super::core::ValueParser;
use crate::error::{ParseError, ParseResult};

impl ValueParser<'_> {
    pub(super) fn parse_number(&mut self) -> ParseResult<f64> {
        let start = self.position;

        while let Some(b'0'..=b'9' | b'.' | b'-') = self.peek() {
            self.position += 1;
        }

        let token = &self.input[start..self.position];
        token
            .parse::<f64>()
            .map_err(|_| ParseError::invalid_number(token, start))
    }
}

#[cfg(test)]
mod tests {
    use super::ValueParser;

    fn number(text: &str) -> Result<f64, String> {
        ValueParser::new(text).parse_number().map_err(|e| e.to_string())
    }

    #[test]
    fn scan_stops_at_first_foreign_character() {
        let mut parser = ValueParser::new("12.5,");
        assert_eq!(parser.parse_number().ok(), Some(12.5));
        assert_eq!(parser.position(), 4);
    }

    #[test]
    fn permissive_scan_rejects_at_conversion() {
        assert_eq!(
            number("1-2.3.4"),
            Err("invalid number literal '1-2.3.4' at offset 0".to_string())
        );
        assert!(number("-").is_err());
        assert!(number("--1").is_err());
    }

    #[test]
    fn trailing_dot_and_negative_values_convert() {
        assert_eq!(number("-0.25"), Ok(-0.25));
        assert_eq!(number("7."), Ok(7.0));
    }
}
