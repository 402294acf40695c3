//! Record trait and the borrowed field view

use crate::value::{DynamicValue, Map};

/// Borrowed, comparison-ready view of one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Bool(bool),
    Number(f64),
    Text(&'a str),
    /// Arrays and objects: present, but never comparable
    Nested,
}

impl FieldValue<'_> {
    /// Variant name used in log output
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "string",
            FieldValue::Nested => "nested",
        }
    }
}

impl<'a> From<&'a DynamicValue> for FieldValue<'a> {
    #[inline]
    fn from(value: &'a DynamicValue) -> Self {
        match value {
            DynamicValue::Null => FieldValue::Null,
            DynamicValue::Bool(b) => FieldValue::Bool(*b),
            DynamicValue::Number(n) => FieldValue::Number(*n),
            DynamicValue::String(s) => FieldValue::Text(s),
            DynamicValue::Array(_) | DynamicValue::Object(_) => FieldValue::Nested,
        }
    }
}

/// Field lookup by name
pub trait Record {
    /// Value of the named field, or `None` when the record has no such field
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl Record for Map {
    #[inline]
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(FieldValue::from)
    }
}

/// Only objects have fields; every other variant reports all fields absent
impl Record for DynamicValue {
    #[inline]
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(FieldValue::from)
    }
}

impl<R: Record + ?Sized> Record for &R {
    #[inline]
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}
