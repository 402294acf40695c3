//! Parser configuration

use serde::{Deserialize, Serialize};

use super::validation::{ConfigDefaults, ConfigResult, ConfigValidator, Validator};

/// Knobs for [`ValueParser`](crate::parser::ValueParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest permitted container nesting; deeper input is a syntax error
    pub max_depth: usize,
    /// Accept a string cut off by the end of input and return what was read
    /// so far instead of failing
    pub lenient_strings: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: ConfigDefaults::DEFAULT_MAX_DEPTH,
            lenient_strings: false,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn lenient_strings(mut self, lenient: bool) -> Self {
        self.lenient_strings = lenient;
        self
    }
}

impl Validator for ParserConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_depth(self.max_depth, "max_depth")
    }
}
