//! Filter descriptors and comparators

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::value::DynamicValue;

/// Supported comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// Exact match on strings, numbers, bools or null
    Equals,
    /// Numeric only
    GreaterThan,
    /// Numeric only
    LessThan,
    /// Case-insensitive substring match, strings only
    Contains,
}

impl Comparator {
    /// Canonical name, as accepted by `FromStr`
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Equals => "Equals",
            Comparator::GreaterThan => "GreaterThan",
            Comparator::LessThan => "LessThan",
            Comparator::Contains => "Contains",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparator text that names no known operator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comparator '{0}'")]
pub struct UnknownComparator(pub String);

impl FromStr for Comparator {
    type Err = UnknownComparator;

    /// Accepts names case-insensitively (`equals`, `GreaterThan`, ...),
    /// short forms (`eq`, `gt`, `lt`) and symbols (`==`, `>`, `<`, `~`)
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "equals" | "eq" | "==" => Ok(Comparator::Equals),
            "greaterthan" | "gt" | ">" => Ok(Comparator::GreaterThan),
            "lessthan" | "lt" | "<" => Ok(Comparator::LessThan),
            "contains" | "~" => Ok(Comparator::Contains),
            _ => Err(UnknownComparator(text.to_string())),
        }
    }
}

/// One filter condition: `field comparator operand`
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDescriptor {
    pub field: String,
    pub operand: DynamicValue,
    pub comparator: Comparator,
}

impl FilterDescriptor {
    pub fn new(
        field: impl Into<String>,
        comparator: Comparator,
        operand: impl Into<DynamicValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operand: operand.into(),
            comparator,
        }
    }

    pub fn equals(field: impl Into<String>, operand: impl Into<DynamicValue>) -> Self {
        Self::new(field, Comparator::Equals, operand)
    }

    pub fn greater_than(field: impl Into<String>, operand: impl Into<DynamicValue>) -> Self {
        Self::new(field, Comparator::GreaterThan, operand)
    }

    pub fn less_than(field: impl Into<String>, operand: impl Into<DynamicValue>) -> Self {
        Self::new(field, Comparator::LessThan, operand)
    }

    pub fn contains(field: impl Into<String>, operand: impl Into<DynamicValue>) -> Self {
        Self::new(field, Comparator::Contains, operand)
    }
}
