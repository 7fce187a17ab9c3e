//! Counts single-element frequencies, builds level-1 projections, and
//! dispatches the recursive miner per seed — optionally fanned out across
//! worker threads.

use std::hash::Hash;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::executor::Executor;
use crate::item::{Item, Pair, Pattern, Pdb};
use crate::itemize::Itemize;
use crate::miner::{self, WORKER_STACK_BYTES};
use crate::options::ResolvedOptions;
use crate::postfix::postfixes;

/// Count single-element support, then mine every frequent element's
/// subtree, serially or fanned out across a worker pool.
pub fn mine_seeds<E>(
    sequences: Arc<Vec<Vec<Item<E>>>>,
    opts: &ResolvedOptions,
    itemize: &Itemize,
    parallel: bool,
    n_workers: Option<usize>,
) -> Vec<Pattern<E>>
where
    E: Ord + Clone + Hash + Send + Sync + 'static,
{
    let seeds = frequent_elements(&sequences, opts.min_support);

    if parallel && itemize.is_transferable() {
        mine_seeds_parallel(sequences, seeds, opts, itemize, n_workers)
    } else {
        if parallel {
            log::warn!(
                "itemize closure is not transferable across threads; falling back to serial execution"
            );
        }
        seeds
            .into_iter()
            .flat_map(|(element, support)| {
                let pdb_and_seed = mine_seed_pdb(&sequences, element, support, opts, itemize);
                run_seed(pdb_and_seed, opts.clone(), itemize.clone())
            })
            .collect()
    }
}

/// Distinct-element frequency count across the whole database, in
/// insertion (first-discovery) order.
fn frequent_elements<E>(sequences: &[Vec<Item<E>>], min_support: usize) -> Vec<(E, usize)>
where
    E: Ord + Clone + Hash,
{
    let mut frequencies: IndexMap<E, usize> = IndexMap::new();
    for sequence in sequences {
        let mut seen: IndexSet<&E> = IndexSet::new();
        for item in sequence {
            for element in &item.elements {
                if seen.insert(element) {
                    *frequencies.entry(element.clone()).or_insert(0) += 1;
                }
            }
        }
    }
    frequencies.into_iter().filter(|(_, support)| *support >= min_support).collect()
}

/// One seed's base pattern (if any) plus the level-1 `Pdb` to recurse into
/// (if non-empty).
struct Seed<E> {
    base_pattern: Option<Pattern<E>>,
    pair: Pair<E>,
    pdb: Pdb<E>,
}

fn mine_seed_pdb<E>(
    sequences: &[Vec<Item<E>>],
    element: E,
    support: usize,
    opts: &ResolvedOptions,
    itemize: &Itemize,
) -> Seed<E>
where
    E: Ord + Clone,
{
    let pair = Pair::new(0, element);

    // Compares the pair's raw (always-zero) interval against
    // min_whole_interval, not the itemized bound.
    let base_pattern = if opts.min_whole_interval == 0 {
        Some(Pattern {
            sequence: vec![pair.clone()],
            support,
            whole_interval: 0,
        })
    } else {
        None
    };

    let pdb: Pdb<E> = sequences
        .iter()
        .filter_map(|sequence| {
            let postfixes = postfixes(sequence, &pair, true, itemize);
            if postfixes.is_empty() { None } else { Some(postfixes) }
        })
        .collect();

    Seed { base_pattern, pair, pdb }
}

fn run_seed<E>(seed: Seed<E>, opts: ResolvedOptions, itemize: Itemize) -> Vec<Pattern<E>>
where
    E: Ord + Clone + Hash + Send + 'static,
{
    let mut patterns: Vec<Pattern<E>> = seed.base_pattern.into_iter().collect();
    if !seed.pdb.is_empty() {
        patterns.extend(miner::mine_on_worker_stack(seed.pdb, vec![seed.pair], opts, itemize));
    }
    patterns
}

fn mine_seeds_parallel<E>(
    sequences: Arc<Vec<Vec<Item<E>>>>,
    seeds: Vec<(E, usize)>,
    opts: &ResolvedOptions,
    itemize: &Itemize,
    n_workers: Option<usize>,
) -> Vec<Pattern<E>>
where
    E: Ord + Clone + Hash + Send + Sync + 'static,
{
    let n_workers = n_workers
        .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
        .max(1);
    let executor = Executor::new(n_workers, WORKER_STACK_BYTES);
    let itemize_fn = itemize.shared_fn().expect("checked transferable by caller");

    let promises: Vec<_> = seeds
        .into_iter()
        .map(|(element, support)| {
            let sequences = sequences.clone();
            let opts = opts.clone();
            let itemize_fn = itemize_fn.clone();
            executor.exec(move || {
                let itemize = Itemize::Shared(itemize_fn);
                let seed = mine_seed_pdb(&sequences, element, support, &opts, &itemize);
                let mut patterns: Vec<Pattern<E>> = seed.base_pattern.into_iter().collect();
                if !seed.pdb.is_empty() {
                    patterns.extend(miner::mine(&seed.pdb, &[seed.pair], &opts, &itemize));
                }
                patterns
            })
        })
        .collect();

    promises.into_iter().flat_map(|promise| promise.wait()).collect()
}
