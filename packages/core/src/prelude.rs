//! Datasieve Core Prelude
//!
//! The types and entry points callers need for parsing and filtering.

// Parsing
pub use crate::error::{ParseError, ParseErrorKind, ParseResult};
pub use crate::parser::{ValueParser, parse, parse_with_config};
pub use crate::value::{DynamicValue, Map};

// Filtering
pub use crate::filter::{
    Comparator, FilterDescriptor, FilterEvaluator, UnknownComparator, ValueComparator, filter,
    filter_cloned, filter_with_stats, matches,
};
pub use crate::record::{FieldValue, Product, ProductField, Record};
pub use crate::stats::{FilterStats, FilterStatsSnapshot};

// Payload handling
pub use crate::dataset::{Dataset, DatasetError, DatasetResult, Projection};

// Configuration
pub use crate::config::{ConfigurationError, DatasetConfig, ParserConfig, Validator};
