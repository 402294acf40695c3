//! Core filter evaluation logic
//!
//! Handles descriptor evaluation against a single record and the
//! order-preserving filtering of record sequences.

use super::comparisons::ValueComparator;
use super::descriptor::FilterDescriptor;
use crate::record::Record;
use crate::stats::FilterStats;

/// Filter Expression Evaluator
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// Evaluate one descriptor against a record
    ///
    /// Absent fields and type mismatches evaluate to `false`.
    #[inline]
    pub fn apply_descriptor<R: Record + ?Sized>(record: &R, descriptor: &FilterDescriptor) -> bool {
        let Some(field) = record.field(&descriptor.field) else {
            tracing::trace!(
                target: "datasieve::filter",
                field = %descriptor.field,
                "field absent, descriptor fails"
            );
            return false;
        };

        let result = ValueComparator::compare(field, descriptor.comparator, &descriptor.operand);
        if !result {
            tracing::trace!(
                target: "datasieve::filter",
                field = %descriptor.field,
                field_type = field.type_name(),
                comparator = %descriptor.comparator,
                operand_type = descriptor.operand.type_name(),
                "descriptor not satisfied"
            );
        }
        result
    }

    /// Conjunction of all descriptors, stopping at the first failure
    #[inline]
    pub fn matches<R: Record + ?Sized>(record: &R, descriptors: &[FilterDescriptor]) -> bool {
        descriptors
            .iter()
            .all(|descriptor| Self::apply_descriptor(record, descriptor))
    }

    /// Conjunction with counters recorded into `stats`
    pub fn matches_with_stats<R: Record + ?Sized>(
        record: &R,
        descriptors: &[FilterDescriptor],
        stats: &FilterStats,
    ) -> bool {
        stats.record_examined();
        let matched = descriptors.iter().all(|descriptor| {
            stats.record_descriptor();
            Self::apply_descriptor(record, descriptor)
        });
        if matched {
            stats.record_match();
        }
        matched
    }
}

/// Records satisfying every descriptor, in input order
///
/// # Examples
/// ```
/// use datasieve_core::filter::{filter, FilterDescriptor};
/// use datasieve_core::record::Product;
///
/// let products = vec![
///     Product::new(1, "Chai", 18.0),
///     Product::new(4, "Chai", 20.0),
///     Product::new(2, "Chang", 19.0),
/// ];
/// let kept = filter(
///     &products,
///     &[
///         FilterDescriptor::equals("Name", "Chai"),
///         FilterDescriptor::greater_than("Price", 18.0),
///     ],
/// );
/// assert_eq!(kept, vec![&products[1]]);
/// ```
pub fn filter<'r, R: Record>(records: &'r [R], descriptors: &[FilterDescriptor]) -> Vec<&'r R> {
    let kept: Vec<&R> = records
        .iter()
        .filter(|record| FilterEvaluator::matches(*record, descriptors))
        .collect();

    tracing::debug!(
        target: "datasieve::filter",
        descriptors = descriptors.len(),
        examined = records.len(),
        kept = kept.len(),
        "filter applied"
    );
    kept
}

/// Owned copies of the records satisfying every descriptor
pub fn filter_cloned<R: Record + Clone>(records: &[R], descriptors: &[FilterDescriptor]) -> Vec<R> {
    filter(records, descriptors).into_iter().cloned().collect()
}

/// Like [`filter`], counting work into `stats`
pub fn filter_with_stats<'r, R: Record>(
    records: &'r [R],
    descriptors: &[FilterDescriptor],
    stats: &FilterStats,
) -> Vec<&'r R> {
    records
        .iter()
        .filter(|record| FilterEvaluator::matches_with_stats(*record, descriptors, stats))
        .collect()
}

/// Whether a single record satisfies every descriptor
#[inline]
pub fn matches<R: Record + ?Sized>(record: &R, descriptors: &[FilterDescriptor]) -> bool {
    FilterEvaluator::matches(record, descriptors)
}
