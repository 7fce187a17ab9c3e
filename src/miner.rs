//! Drives the project/count cycle, enforces the support and whole-interval
//! bounds, and emits patterns.

use std::thread;

use crate::count::count_candidates;
use crate::item::{Pair, Pattern, Pdb};
use crate::itemize::Itemize;
use crate::options::ResolvedOptions;
use crate::project::project;

/// A worker subtree gets this much stack; interval sequential patterns in
/// practice are rarely more than a few dozen pairs deep, but a pathological
/// database (or a very loose interval band) can recurse arbitrarily deep,
/// and the default thread stack is not enough headroom for that.
pub(crate) const WORKER_STACK_BYTES: usize = 8 * 1024 * 1024;

/// Recursively mine `pdb` given the accumulated `prefix`, returning every
/// pattern whose support and whole-interval bounds are satisfied.
///
/// Emission happens after recursing into the child projected database, so
/// deeper patterns extending this prefix are still explored even when this
/// prefix's own `whole_interval` falls short of `min_whole_interval`.
pub fn mine<E>(pdb: &Pdb<E>, prefix: &[Pair<E>], opts: &ResolvedOptions, itemize: &Itemize) -> Vec<Pattern<E>>
where
    E: Ord + Clone + std::hash::Hash,
{
    let counts = count_candidates(pdb, opts.min_interval, opts.max_interval, itemize);
    let prefix_whole: u64 = prefix.iter().map(|pair| pair.interval).sum();

    let mut patterns = Vec::new();
    for (pair, support) in counts {
        let whole = prefix_whole + pair.interval;
        let under_max = match opts.max_whole_interval {
            None => true,
            Some(bound) => whole <= itemize.call(bound),
        };

        if support < opts.min_support || !under_max {
            continue;
        }

        let child_pdb = project(pdb, &pair, itemize);

        let mut extended_prefix = prefix.to_vec();
        extended_prefix.push(pair);

        patterns.extend(mine(&child_pdb, &extended_prefix, opts, itemize));

        if whole >= itemize.call(opts.min_whole_interval) {
            patterns.push(Pattern {
                sequence: extended_prefix,
                support,
                whole_interval: whole,
            });
        }
    }

    patterns
}

/// Run `mine` on a freshly spawned thread with an enlarged stack.
///
/// Each seed's subtree is independent recursion with no shared mutable
/// state, so driving it from its own worker thread (rather than whatever
/// thread called into the crate) is always safe, in serial mode as much as
/// in parallel mode.
pub fn mine_on_worker_stack<E>(pdb: Pdb<E>, prefix: Vec<Pair<E>>, opts: ResolvedOptions, itemize: Itemize) -> Vec<Pattern<E>>
where
    E: Ord + Clone + std::hash::Hash + Send + 'static,
{
    thread::Builder::new()
        .stack_size(WORKER_STACK_BYTES)
        .spawn(move || mine(&pdb, &prefix, &opts, &itemize))
        .expect("failed to spawn mining worker thread")
        .join()
        .expect("mining worker thread panicked")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::itemize::fixed_bucket;
    use crate::options::ResolvedOptions;
    use std::collections::BTreeSet;

    fn set(elems: &[&str]) -> BTreeSet<String> {
        elems.iter().map(|s| s.to_string()).collect()
    }

    fn item(interval: u64, elems: &[&str]) -> Item<String> {
        Item::new(interval, set(elems))
    }

    fn opts(min_support: usize, max_interval: Option<u64>) -> ResolvedOptions {
        ResolvedOptions {
            min_support,
            min_interval: 0,
            max_interval,
            min_whole_interval: 0,
            max_whole_interval: None,
        }
    }

    #[test]
    fn mines_subpatterns_from_prefix() {
        // Level-1 PDB for three sample sequences projected on "a".
        let pdb: Pdb<String> = vec![
            vec![vec![item(86_400, &["a", "b", "c"]), item(259_200, &["a", "c"])]],
            vec![vec![item(259_200, &["c"])]],
            vec![vec![item(172_800, &["a", "b"])]],
        ];
        let itemize = fixed_bucket(86_400);
        let o = opts(2, Some(172_800));
        let prefix = vec![Pair::new(0, "a".to_string())];

        let mut patterns = mine(&pdb, &prefix, &o, &itemize);
        patterns.sort_by_key(|p| (p.sequence.clone(), p.support, p.whole_interval));

        let mut expected = vec![
            Pattern {
                sequence: vec![Pair::new(0, "a".to_string()), Pair::new(0, "b".to_string())],
                support: 2,
                whole_interval: 0,
            },
            Pattern {
                sequence: vec![Pair::new(0, "a".to_string()), Pair::new(2, "a".to_string())],
                support: 2,
                whole_interval: 2,
            },
        ];
        expected.sort_by_key(|p| (p.sequence.clone(), p.support, p.whole_interval));

        assert_eq!(patterns, expected);
    }

    #[test]
    fn empty_pdb_yields_no_patterns() {
        let pdb: Pdb<String> = vec![];
        let itemize = fixed_bucket(86_400);
        let o = opts(1, None);
        assert!(mine(&pdb, &[], &o, &itemize).is_empty());
    }

    #[test]
    fn worker_stack_wrapper_matches_direct_call() {
        let pdb: Pdb<String> = vec![vec![vec![item(86_400, &["b"])]]];
        let itemize = fixed_bucket(86_400);
        let o = opts(1, None);
        let prefix = vec![Pair::new(0, "a".to_string())];

        let direct = mine(&pdb, &prefix, &o, &itemize);
        let via_worker = mine_on_worker_stack(pdb, prefix, o, itemize);
        assert_eq!(direct, via_worker);
    }
}
