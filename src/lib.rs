//! Generalized Sequential Pattern Mining with Interval (GSPMI).
//!
//! Given a database of time-stamped itemsets, [`mine`] enumerates every
//! interval sequential pattern whose support meets a threshold and whose
//! inter-pair gaps fall inside a caller-specified interval band. The
//! algorithm is prefix-projection mining (PrefixSpan-family): recursively
//! narrow a projected database by the next candidate pair, counting
//! per-source-sequence occurrences at each level.
//!
//! Parsing raw tabular input, presenting results as a table, and anything
//! beyond the single [`mine`] entry point are left to callers — this crate
//! is the mining core only.
//!
//! ```
//! use std::collections::BTreeSet;
//! use gspmi::{itemize, normalize, options::{MineOptions, Support}};
//!
//! let sequences = normalize::from_tuples(vec![
//!     vec![(0u64, BTreeSet::from(["a"])), (10, BTreeSet::from(["a", "b"]))],
//!     vec![(0u64, BTreeSet::from(["a"])), (10, BTreeSet::from(["b"]))],
//! ]).unwrap();
//!
//! let patterns = gspmi::mine(
//!     sequences,
//!     itemize::fixed_bucket(10),
//!     MineOptions::new(Support::Count(2)),
//! ).unwrap();
//!
//! assert!(patterns.iter().any(|p| p.sequence.len() == 1));
//! ```

pub mod count;
pub mod error;
pub mod executor;
pub mod item;
pub mod itemize;
pub mod miner;
pub mod normalize;
pub mod options;
pub mod postfix;
pub mod project;
pub mod seed;

pub use error::MineError;
pub use item::{Item, Pair, Pattern};
pub use itemize::Itemize;
pub use options::{MineOptions, Support};

use std::hash::Hash;
use std::sync::Arc;

/// Mine `sequences` for interval sequential patterns under `options`.
///
/// `sequences` is validated regardless of whether it was produced by
/// [`normalize::from_tuples`] or built directly by the caller — see
/// [`normalize::validate`]. Configuration errors (bad bounds, an
/// out-of-range support fraction) are reported before any mining work
/// starts; input errors (an empty element set, a non-monotonic sequence)
/// are reported next. Runtime conditions such as an empty database or no
/// frequent elements are not errors — they simply yield an empty result.
pub fn mine<E>(
    sequences: Vec<Vec<Item<E>>>,
    itemize: Itemize,
    options: MineOptions,
) -> Result<Vec<Pattern<E>>, MineError>
where
    E: Ord + Clone + Hash + Send + Sync + 'static,
{
    let resolved = options.resolve(sequences.len())?;
    normalize::validate(&sequences)?;

    if sequences.is_empty() {
        return Ok(Vec::new());
    }

    let patterns = seed::mine_seeds(
        Arc::new(sequences),
        &resolved,
        &itemize,
        options.parallel,
        options.n_workers,
    );

    Ok(patterns)
}
