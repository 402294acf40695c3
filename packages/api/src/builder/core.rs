//! Core `Sieve` structure and base functionality
//!
//! Contains the `Sieve` struct and the constructors that seed it with
//! descriptors, either directly or from loosely typed triples supplied by a
//! caller's UI layer.

use std::fmt;

use datasieve_core::{Comparator, DynamicValue, FilterDescriptor};

use crate::error::Result;

/// Fluent builder for a conjunction of filter descriptors
///
/// Every condition added narrows the result; an empty sieve keeps every
/// record.
#[derive(Clone, Default, PartialEq)]
pub struct Sieve {
    /// Descriptors in the order they were added
    pub(crate) descriptors: Vec<FilterDescriptor>,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl Sieve {
    /// Start an empty sieve
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sieve from `(field, comparator, operand)` triples
    ///
    /// The comparator text accepts names (`"Equals"`, `"contains"`), short
    /// forms (`"gt"`) and symbols (`"=="`, `">"`, `"<"`, `"~"`).
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownComparator` for the first comparator text
    /// that names no known operator.
    ///
    /// # Examples
    /// ```
    /// use datasieve::Sieve;
    ///
    /// let sieve = Sieve::from_triples([("ProductName", "==", "Chai"), ("ProductName", "~", "ch")])?;
    /// assert_eq!(sieve.len(), 2);
    /// # Ok::<(), datasieve::Error>(())
    /// ```
    pub fn from_triples<I, F, C, V>(triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (F, C, V)>,
        F: Into<String>,
        C: AsRef<str>,
        V: Into<DynamicValue>,
    {
        let mut sieve = Self::new();
        for (field, comparator, operand) in triples {
            let comparator: Comparator = comparator.as_ref().parse()?;
            sieve
                .descriptors
                .push(FilterDescriptor::new(field, comparator, operand));
        }
        Ok(sieve)
    }

    /// Log each execution at debug level through the `log` facade
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Descriptors collected so far
    #[must_use]
    pub fn descriptors(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Consume the sieve, keeping only its descriptors
    #[must_use]
    pub fn into_descriptors(self) -> Vec<FilterDescriptor> {
        self.descriptors
    }
}

impl From<Vec<FilterDescriptor>> for Sieve {
    fn from(descriptors: Vec<FilterDescriptor>) -> Self {
        Self {
            descriptors,
            debug_enabled: false,
        }
    }
}

impl fmt::Debug for Sieve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("datasieve::Sieve")
            .field("descriptors", &self.descriptors)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
