//! Per-group support counting under the interval gap constraint.
//!
//! Support counts source sequences, not raw matches, so each group
//! contributes at most one to any given pair's count no matter how many of
//! its postfixes realize that pair.

use indexmap::IndexMap;
use indexmap::IndexSet;

use crate::item::{Pair, Pdb};
use crate::itemize::Itemize;

/// Count, per candidate `Pair`, the number of groups (source sequences)
/// contributing at least one occurrence whose gap falls in
/// `[min_interval, max_interval]`.
///
/// Iteration order of the returned map is insertion order — the order
/// candidates are first discovered while scanning `pdb` — which the
/// recursive miner relies on for deterministic serial output.
pub fn count_candidates<E>(
    pdb: &Pdb<E>,
    min_interval: u64,
    max_interval: Option<u64>,
    itemize: &Itemize,
) -> IndexMap<Pair<E>, usize>
where
    E: Ord + Clone + std::hash::Hash,
{
    let mut counts: IndexMap<Pair<E>, usize> = IndexMap::new();

    for group in pdb {
        let mut seen: IndexSet<Pair<E>> = IndexSet::new();

        for postfix in group {
            let mut previous = 0u64;
            for item in postfix {
                let delta = item.interval - previous;
                let in_band = delta >= min_interval && max_interval.map_or(true, |max| delta <= max);
                if in_band {
                    for element in &item.elements {
                        seen.insert(Pair::new(itemize.call(item.interval), element.clone()));
                    }
                }
                previous = item.interval;
            }
        }

        for pair in seen {
            *counts.entry(pair).or_insert(0) += 1;
        }
    }

    counts
}
