//! Converts raw `(interval, elements)` tuples into `Item` entities, and
//! checks the two invariants every sequence must satisfy: every element set
//! is non-empty, and intervals within a sequence never decrease.

use std::collections::BTreeSet;

use crate::error::MineError;
use crate::item::Item;

/// One input sequence, expressed with plain tuples.
pub type RawSequence<E> = Vec<(u64, BTreeSet<E>)>;

/// Convert raw tuple sequences into `Item` entities, checking that every
/// element set is non-empty and every sequence's intervals are
/// non-decreasing.
pub fn from_tuples<E>(sequences: Vec<RawSequence<E>>) -> Result<Vec<Vec<Item<E>>>, MineError>
where
    E: Ord,
{
    sequences
        .into_iter()
        .enumerate()
        .map(|(sequence_idx, raw)| validate_and_build(sequence_idx, raw))
        .collect()
}

/// Check the same invariants against already-built `Item` sequences.
///
/// `mine` calls this unconditionally, whether its input came from
/// `from_tuples` or was hand-built by the caller, so the invariants hold
/// regardless of provenance.
pub fn validate<E>(sequences: &[Vec<Item<E>>]) -> Result<(), MineError> {
    for (sequence_idx, sequence) in sequences.iter().enumerate() {
        let mut previous = 0u64;
        for (index, item) in sequence.iter().enumerate() {
            if item.elements.is_empty() {
                return Err(MineError::EmptyElementSet { sequence: sequence_idx, index });
            }
            if index > 0 && item.interval < previous {
                return Err(MineError::UnsortedSequence { sequence: sequence_idx, index });
            }
            previous = item.interval;
        }
    }
    Ok(())
}

fn validate_and_build<E>(sequence_idx: usize, raw: RawSequence<E>) -> Result<Vec<Item<E>>, MineError>
where
    E: Ord,
{
    let mut previous = 0u64;
    let mut built = Vec::with_capacity(raw.len());
    for (index, (interval, elements)) in raw.into_iter().enumerate() {
        if elements.is_empty() {
            return Err(MineError::EmptyElementSet { sequence: sequence_idx, index });
        }
        if index > 0 && interval < previous {
            return Err(MineError::UnsortedSequence { sequence: sequence_idx, index });
        }
        previous = interval;
        built.push(Item::new(interval, elements));
    }
    Ok(built)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(elems: &[&str]) -> BTreeSet<String> {
        elems.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_database_is_valid() {
        let sequences: Vec<RawSequence<String>> = vec![];
        assert_eq!(from_tuples(sequences).unwrap(), Vec::<Vec<Item<String>>>::new());
    }

    #[test]
    fn rejects_empty_element_set() {
        let sequences: Vec<RawSequence<String>> = vec![vec![(0, set(&[]))]];
        assert_eq!(
            from_tuples(sequences),
            Err(MineError::EmptyElementSet { sequence: 0, index: 0 })
        );
    }

    #[test]
    fn rejects_decreasing_interval() {
        let sequences: Vec<RawSequence<String>> = vec![vec![(10, set(&["a"])), (5, set(&["b"]))]];
        assert_eq!(
            from_tuples(sequences),
            Err(MineError::UnsortedSequence { sequence: 0, index: 1 })
        );
    }

    #[test]
    fn renormalizing_an_already_normalized_database_is_a_no_op() {
        let sequences: Vec<RawSequence<String>> = vec![vec![(0, set(&["a"])), (10, set(&["b"]))]];
        let built = from_tuples(sequences).unwrap();
        assert!(validate(&built).is_ok());
    }
}
