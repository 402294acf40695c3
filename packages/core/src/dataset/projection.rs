//! Active-property projection

use indexmap::IndexMap;

use crate::value::{DynamicValue, Map};

/// Set of properties a caller has switched on, in activation order
///
/// A property toggled off keeps its slot, so switching it back on restores
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    flags: IndexMap<String, bool>,
}

impl Projection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a property; the first toggle switches it on. Returns the new state.
    pub fn toggle(&mut self, property: &str) -> bool {
        let flag = self.flags.entry(property.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn set_active(&mut self, property: &str, active: bool) {
        self.flags.insert(property.to_string(), active);
    }

    #[must_use]
    pub fn is_active(&self, property: &str) -> bool {
        self.flags.get(property).copied().unwrap_or(false)
    }

    /// Active property names in activation order
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, active)| **active)
            .map(|(name, _)| name.as_str())
    }

    /// The active properties the record actually has, with their values
    #[must_use]
    pub fn project<'r>(&self, record: &'r Map) -> Vec<(&'r str, &'r DynamicValue)> {
        self.active()
            .filter_map(|property| record.get_key_value(property))
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Projection;

    #[test]
    fn toggle_twice_switches_off_but_keeps_slot() {
        let mut projection = Projection::new();
        assert!(projection.toggle("ProductName"));
        assert!(projection.toggle("UnitPrice"));
        assert!(!projection.toggle("ProductName"));
        assert_eq!(projection.active().collect::<Vec<_>>(), vec!["UnitPrice"]);

        assert!(projection.toggle("ProductName"));
        assert_eq!(
            projection.active().collect::<Vec<_>>(),
            vec!["ProductName", "UnitPrice"]
        );
    }
}
