//! Error taxonomy for the mining engine.
//!
//! Configuration errors are raised before any mining work starts; input
//! errors are raised while normalizing the database. Neither is retried
//! internally — both are surfaced to the caller as-is.

use thiserror::Error;

/// Everything that can go wrong calling into this crate.
#[derive(Debug, Error, PartialEq)]
pub enum MineError {
    /// `min_support` was given as a fraction outside `[0, 1]`.
    #[error("min_support fraction {0} is outside the valid range [0, 1]")]
    InvalidSupportFraction(f64),

    /// `min_interval > max_interval`.
    #[error("min_interval ({min}) is greater than max_interval ({max})")]
    IntervalBoundsInverted { min: u64, max: u64 },

    /// `min_whole_interval > max_whole_interval`.
    #[error("min_whole_interval ({min}) is greater than max_whole_interval ({max})")]
    WholeIntervalBoundsInverted { min: u64, max: u64 },

    /// `n_workers` was given as zero.
    #[error("n_workers must be a positive integer, got {0}")]
    InvalidWorkerCount(usize),

    /// An item's element set was empty.
    #[error("sequence {sequence}: item at position {index} has an empty element set")]
    EmptyElementSet { sequence: usize, index: usize },

    /// Items within a sequence were not in non-decreasing interval order.
    #[error("sequence {sequence}: interval at position {index} is smaller than the preceding one")]
    UnsortedSequence { sequence: usize, index: usize },
}
