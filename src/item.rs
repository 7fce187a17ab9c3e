//! Core entity types: `Item`, `Pair`, and `Pattern`.
//!
//! `E` is left generic over the whole crate rather than fixed to a concrete
//! label type; callers supply any totally ordered, hashable, cloneable type
//! as their alphabet.

use std::collections::BTreeSet;

/// A single time-stamped itemset from an input sequence.
///
/// `interval` is the raw, un-quantized offset from the start of the
/// sequence (or, inside a postfix, from the projection anchor). `elements`
/// must be non-empty; the engine treats duplicate elements as a no-op since
/// it is already a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<E> {
    pub interval: u64,
    pub elements: BTreeSet<E>,
}

impl<E: Ord> Item<E> {
    pub fn new(interval: u64, elements: BTreeSet<E>) -> Self {
        Item { interval, elements }
    }
}

/// One (quantized interval, element) step of a mined pattern.
///
/// `interval` is the quantized gap from the previous pair in the same
/// pattern; the first pair of any pattern always has `interval == 0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<E> {
    pub interval: u64,
    pub element: E,
}

impl<E> Pair<E> {
    pub fn new(interval: u64, element: E) -> Self {
        Pair { interval, element }
    }
}

/// A mined interval sequential pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<E> {
    /// The pairs making up the pattern, in order.
    pub sequence: Vec<Pair<E>>,
    /// Number of distinct input sequences the pattern occurs in.
    pub support: usize,
    /// Sum of all pair intervals, i.e. the quantized span from first to last pair.
    pub whole_interval: u64,
}

/// A sequence remaining after a projection step.
pub type Postfix<E> = Vec<Item<E>>;

/// All postfixes derived from one still-contributing input sequence.
pub type Group<E> = Vec<Postfix<E>>;

/// A projected database: one group per still-contributing input sequence.
pub type Pdb<E> = Vec<Group<E>>;
