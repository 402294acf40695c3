//! Condition methods
//!
//! Each method appends one descriptor and returns the builder for chaining.

use datasieve_core::{DynamicValue, FilterDescriptor};

use crate::builder::core::Sieve;

impl Sieve {
    /// Require `field` to equal `operand` exactly
    ///
    /// # Examples
    /// ```
    /// use datasieve::Sieve;
    ///
    /// let sieve = Sieve::new().equals("ProductName", "Chai").greater_than("UnitPrice", 18.0);
    /// assert_eq!(sieve.len(), 2);
    /// ```
    #[must_use]
    pub fn equals(self, field: impl Into<String>, operand: impl Into<DynamicValue>) -> Self {
        self.descriptor(FilterDescriptor::equals(field, operand))
    }

    /// Require numeric `field` to be strictly greater than `operand`
    #[must_use]
    pub fn greater_than(self, field: impl Into<String>, operand: impl Into<DynamicValue>) -> Self {
        self.descriptor(FilterDescriptor::greater_than(field, operand))
    }

    /// Require numeric `field` to be strictly less than `operand`
    #[must_use]
    pub fn less_than(self, field: impl Into<String>, operand: impl Into<DynamicValue>) -> Self {
        self.descriptor(FilterDescriptor::less_than(field, operand))
    }

    /// Require string `field` to contain `operand`, ignoring case
    #[must_use]
    pub fn contains(self, field: impl Into<String>, operand: impl Into<DynamicValue>) -> Self {
        self.descriptor(FilterDescriptor::contains(field, operand))
    }

    /// Append a prepared descriptor
    #[must_use]
    pub fn descriptor(mut self, descriptor: FilterDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }
}
