//! Declarative predicate filtering
//!
//! A filter request is an ordered list of [`FilterDescriptor`]s evaluated as
//! a conjunction against each record. Field lookups that fail, and fields
//! whose type does not support the comparator, exclude the record instead of
//! raising an error, so the filter is safe against schema drift.
//!
//! Typed and dynamic records go through the same [`ValueComparator`].

mod comparisons;
mod core;
mod descriptor;

pub use self::core::{FilterEvaluator, filter, filter_cloned, filter_with_stats, matches};
pub use comparisons::ValueComparator;
pub use descriptor::{Comparator, FilterDescriptor, UnknownComparator};
