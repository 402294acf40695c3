//! Configuration for parsing and dataset extraction
//!
//! Both configurations are plain data with sensible defaults, chained
//! setters and [`Validator`] checks. Nothing is read from files or the
//! environment.

pub mod dataset;
pub mod parser;
pub mod validation;

pub use dataset::DatasetConfig;
pub use parser::ParserConfig;
pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};
