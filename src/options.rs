//! Mining configuration: support thresholds, interval bounds, and
//! parallelism knobs.

use crate::error::MineError;

/// `min_support`, either as an absolute count or a fraction of the database.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support {
    /// An absolute minimum number of supporting sequences.
    Count(usize),
    /// A fraction in `[0, 1]`, rounded up against the database size.
    Fraction(f64),
}

/// Caller-facing mining options passed to `mine`.
#[derive(Debug, Clone)]
pub struct MineOptions {
    pub min_support: Support,
    pub min_interval: u64,
    /// `None` means `+infinity`.
    pub max_interval: Option<u64>,
    pub min_whole_interval: u64,
    /// `None` means `+infinity`.
    pub max_whole_interval: Option<u64>,
    pub parallel: bool,
    /// `None` means "auto" (`std::thread::available_parallelism`).
    pub n_workers: Option<usize>,
}

impl MineOptions {
    pub fn new(min_support: Support) -> Self {
        MineOptions {
            min_support,
            min_interval: 0,
            max_interval: None,
            min_whole_interval: 0,
            max_whole_interval: None,
            parallel: false,
            n_workers: None,
        }
    }

    pub fn min_interval(mut self, v: u64) -> Self {
        self.min_interval = v;
        self
    }

    pub fn max_interval(mut self, v: u64) -> Self {
        self.max_interval = Some(v);
        self
    }

    pub fn min_whole_interval(mut self, v: u64) -> Self {
        self.min_whole_interval = v;
        self
    }

    pub fn max_whole_interval(mut self, v: u64) -> Self {
        self.max_whole_interval = Some(v);
        self
    }

    pub fn parallel(mut self, v: bool) -> Self {
        self.parallel = v;
        self
    }

    pub fn n_workers(mut self, v: usize) -> Self {
        self.n_workers = Some(v);
        self
    }
}

/// `MineOptions` after validation and `min_support` resolution, threaded
/// through the recursion instead of the raw caller-facing struct.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub min_support: usize,
    pub min_interval: u64,
    pub max_interval: Option<u64>,
    pub min_whole_interval: u64,
    pub max_whole_interval: Option<u64>,
}

impl MineOptions {
    /// Validate the configuration and resolve `min_support` against `n_sequences`.
    pub fn resolve(&self, n_sequences: usize) -> Result<ResolvedOptions, MineError> {
        if let Some(max) = self.max_interval {
            if self.min_interval > max {
                return Err(MineError::IntervalBoundsInverted {
                    min: self.min_interval,
                    max,
                });
            }
        }
        if let Some(max) = self.max_whole_interval {
            if self.min_whole_interval > max {
                return Err(MineError::WholeIntervalBoundsInverted {
                    min: self.min_whole_interval,
                    max,
                });
            }
        }
        if let Some(n) = self.n_workers {
            if n == 0 {
                return Err(MineError::InvalidWorkerCount(n));
            }
        }

        let min_support = match self.min_support {
            Support::Count(n) => n,
            Support::Fraction(f) => {
                if !(0.0..=1.0).contains(&f) {
                    return Err(MineError::InvalidSupportFraction(f));
                }
                (f * n_sequences as f64).ceil() as usize
            }
        };

        Ok(ResolvedOptions {
            min_support,
            min_interval: self.min_interval,
            max_interval: self.max_interval,
            min_whole_interval: self.min_whole_interval,
            max_whole_interval: self.max_whole_interval,
        })
    }
}
