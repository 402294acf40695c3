//! Comparator semantics shared by typed and dynamic records
//!
//! Strings support `Equals` (exact) and `Contains` (case-insensitive).
//! Numbers support `Equals`, `GreaterThan` and `LessThan` with plain
//! IEEE-754 comparison: equality is exact and NaN never matches. Bools and
//! null support `Equals`. Every other pairing is a mismatch.

use super::descriptor::Comparator;
use crate::record::FieldValue;
use crate::value::DynamicValue;

/// Field-versus-operand comparison
pub struct ValueComparator;

impl ValueComparator {
    /// True when `field comparator operand` holds
    #[inline]
    #[must_use]
    pub fn compare(field: FieldValue<'_>, comparator: Comparator, operand: &DynamicValue) -> bool {
        match (field, operand) {
            (FieldValue::Text(value), DynamicValue::String(target)) => match comparator {
                Comparator::Equals => value == target,
                Comparator::Contains => Self::contains_ignore_case(value, target),
                Comparator::GreaterThan | Comparator::LessThan => false,
            },
            (FieldValue::Number(value), DynamicValue::Number(target)) => match comparator {
                #[allow(clippy::float_cmp)]
                Comparator::Equals => value == *target,
                Comparator::GreaterThan => value > *target,
                Comparator::LessThan => value < *target,
                Comparator::Contains => false,
            },
            (FieldValue::Bool(value), DynamicValue::Bool(target)) => {
                comparator == Comparator::Equals && value == *target
            }
            (FieldValue::Null, DynamicValue::Null) => comparator == Comparator::Equals,
            _ => false,
        }
    }

    /// Case-insensitive substring test; an empty needle always matches
    #[inline]
    #[must_use]
    pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        if haystack.is_ascii() && needle.is_ascii() {
            return haystack
                .as_bytes()
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
        }
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}
