//! Error constructor functions
//!
//! Factory methods for building [`ParseError`] values at a cursor offset.

use super::types::{ParseError, ParseErrorKind};

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { offset, kind }
    }

    /// A character that cannot start a value
    #[must_use]
    pub fn unexpected_character(found: char, offset: usize) -> Self {
        Self::new(ParseErrorKind::UnexpectedCharacter { found }, offset)
    }

    /// A structural character other than the required one
    ///
    /// # Examples
    /// ```
    /// use datasieve_core::error::ParseError;
    ///
    /// let error = ParseError::expected("':'", 'x', 17);
    /// assert_eq!(error.to_string(), "expected ':' but found 'x' at offset 17");
    /// ```
    #[must_use]
    pub fn expected(expected: &'static str, found: char, offset: usize) -> Self {
        Self::new(ParseErrorKind::Expected { expected, found }, offset)
    }

    /// Input ended while a container was still open
    #[must_use]
    pub fn unexpected_end(context: &'static str, offset: usize) -> Self {
        Self::new(ParseErrorKind::UnexpectedEnd { context }, offset)
    }

    #[must_use]
    pub fn unterminated_string(offset: usize) -> Self {
        Self::new(ParseErrorKind::UnterminatedString, offset)
    }

    #[must_use]
    pub fn empty_key(offset: usize) -> Self {
        Self::new(ParseErrorKind::EmptyKey, offset)
    }

    #[must_use]
    pub fn invalid_escape(escaped: char, offset: usize) -> Self {
        Self::new(ParseErrorKind::InvalidEscape(escaped), offset)
    }

    pub fn invalid_number(token: impl Into<String>, offset: usize) -> Self {
        Self::new(ParseErrorKind::InvalidNumber(token.into()), offset)
    }

    #[must_use]
    pub fn trailing_character(found: char, offset: usize) -> Self {
        Self::new(ParseErrorKind::TrailingCharacter(found), offset)
    }

    #[must_use]
    pub fn depth_exceeded(max_depth: usize, offset: usize) -> Self {
        Self::new(ParseErrorKind::DepthExceeded(max_depth), offset)
    }

    /// Human-readable message without the offset suffix
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// True when the input simply ran out, as opposed to containing a bad character
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::UnexpectedEnd { .. } | ParseErrorKind::UnterminatedString
        )
    }
}
