//! Sieve Builder API modules
//!
//! Fluent construction of conjunctive filter requests and their execution
//! over record slices.

pub mod conditions;
pub mod core;
pub mod execution;

pub use self::core::Sieve;
