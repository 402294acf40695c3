//! Dataset extraction configuration

use serde::{Deserialize, Serialize};

use super::parser::ParserConfig;
use super::validation::{ConfigDefaults, ConfigResult, ConfigValidator, Validator};

/// Where to find the record array inside a service payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Root object member holding the array of records
    pub collection_key: String,
    /// Parser settings used by [`Dataset::parse`](crate::dataset::Dataset::parse)
    pub parser: ParserConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            collection_key: ConfigDefaults::DEFAULT_COLLECTION_KEY.to_string(),
            parser: ParserConfig::default(),
        }
    }
}

impl DatasetConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn collection_key(mut self, key: impl Into<String>) -> Self {
        self.collection_key = key.into();
        self
    }

    #[must_use]
    pub fn parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}

impl Validator for DatasetConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_key(&self.collection_key, "collection_key")?;
        self.parser.validate()
    }
}
