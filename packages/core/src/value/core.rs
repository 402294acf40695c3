//! Core value type and accessors

use indexmap::IndexMap;

/// Insertion-ordered object members
pub type Map = IndexMap<String, DynamicValue>;

/// One parsed node
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    #[default]
    Null,
    Bool(bool),
    /// Every numeric literal, integral or not
    Number(f64),
    String(String),
    Array(Vec<DynamicValue>),
    Object(Map),
}

impl DynamicValue {
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynamicValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            DynamicValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up an object member; `None` for missing keys and non-objects
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Consume the value and return its members if it is an object
    #[must_use]
    pub fn into_object(self) -> Option<Map> {
        match self {
            DynamicValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Consume the value and return its items if it is an array
    #[must_use]
    pub fn into_array(self) -> Option<Vec<DynamicValue>> {
        match self {
            DynamicValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Variant name used in log output and diagnostics
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            DynamicValue::Null => "null",
            DynamicValue::Bool(_) => "bool",
            DynamicValue::Number(_) => "number",
            DynamicValue::String(_) => "string",
            DynamicValue::Array(_) => "array",
            DynamicValue::Object(_) => "object",
        }
    }
}
