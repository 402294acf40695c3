//! Parse Error Types
//!
//! Core error types for value parsing. The parser performs no recovery, so a
//! single error aborts the whole parse and no partial tree is returned.

/// What went wrong while parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A character that cannot start a value
    #[error("unexpected character '{found}' while expecting a value")]
    UnexpectedCharacter { found: char },

    /// A structural character other than the one the grammar requires
    #[error("expected {expected} but found '{found}'")]
    Expected {
        expected: &'static str,
        found: char,
    },

    /// Input ended inside a container
    #[error("unexpected end of input while parsing {context}")]
    UnexpectedEnd { context: &'static str },

    /// Input ended before the closing quote of a string
    #[error("unterminated string")]
    UnterminatedString,

    /// Object member name with no characters
    #[error("empty object key")]
    EmptyKey,

    /// Backslash followed by anything other than `"` or `\`
    #[error("unexpected escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// Scanned numeric token that does not convert to a double
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    /// Non-whitespace content after the top-level value
    #[error("unexpected trailing character '{0}'")]
    TrailingCharacter(char),

    /// Containers nested deeper than the configured limit
    #[error("maximum nesting depth of {0} exceeded")]
    DepthExceeded(usize),
}

/// Syntax error raised by the value parser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// Byte offset of the offending character, or the input length when the
    /// input ended early
    pub offset: usize,
    /// Classification of the failure
    pub kind: ParseErrorKind,
}

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
