//! Core Configuration Utilities
//!
//! Common configuration validation, defaults and error types.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid nesting depth: {0}")]
    InvalidDepth(String),

    #[error("Invalid collection key: {0}")]
    InvalidCollectionKey(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidDepth` - if the nesting limit is zero or above the hard ceiling
    /// - `InvalidCollectionKey` - if the collection key is empty
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a nesting depth limit
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidDepth` if:
    /// - The depth is zero
    /// - The depth exceeds `ConfigDefaults::MAX_DEPTH_CEILING`
    pub fn validate_depth(depth: usize, name: &str) -> ConfigResult<()> {
        if depth == 0 {
            return Err(ConfigurationError::InvalidDepth(format!(
                "{name} cannot be zero"
            )));
        }

        if depth > ConfigDefaults::MAX_DEPTH_CEILING {
            return Err(ConfigurationError::InvalidDepth(format!(
                "{name} cannot exceed {}",
                ConfigDefaults::MAX_DEPTH_CEILING
            )));
        }

        Ok(())
    }

    /// Validate that a key is usable as an object member name
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCollectionKey` if the key is empty
    /// or consists only of whitespace.
    pub fn validate_key(key: &str, name: &str) -> ConfigResult<()> {
        if key.trim().is_empty() {
            return Err(ConfigurationError::InvalidCollectionKey(format!(
                "{name} cannot be empty"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_MAX_DEPTH: usize = 128;
    pub const MAX_DEPTH_CEILING: usize = 1024;
    pub const DEFAULT_COLLECTION_KEY: &'static str = "value";
}
