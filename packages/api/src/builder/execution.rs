//! Terminal methods
//!
//! Run the collected descriptors over records. Execution borrows the sieve,
//! so one sieve can be applied to any number of record sets.

use datasieve_core::{Dataset, Map, Record, filter};

use crate::builder::core::Sieve;

impl Sieve {
    /// Records satisfying every condition, in input order
    #[must_use]
    pub fn apply<'r, R: Record>(&self, records: &'r [R]) -> Vec<&'r R> {
        let kept = filter(records, &self.descriptors);
        if self.debug_enabled {
            log::debug!(
                "Sieve kept {} of {} records using {} descriptor(s): {:?}",
                kept.len(),
                records.len(),
                self.descriptors.len(),
                self.descriptors
            );
        }
        kept
    }

    /// Owned copies of the records satisfying every condition
    #[must_use]
    pub fn apply_cloned<R: Record + Clone>(&self, records: &[R]) -> Vec<R> {
        self.apply(records).into_iter().cloned().collect()
    }

    /// Records of a dataset satisfying every condition
    #[must_use]
    pub fn apply_dataset<'d>(&self, dataset: &'d Dataset) -> Vec<&'d Map> {
        self.apply(dataset.records())
    }

    /// Whether one record satisfies every condition
    #[must_use]
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        datasieve_core::matches(record, &self.descriptors)
    }
}
