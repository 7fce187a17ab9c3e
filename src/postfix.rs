//! Given one sequence and a projector pair, produces the postfix(es) that
//! result from matching the projector's element inside the sequence.

use std::collections::Bound;

use crate::item::{Item, Pair, Postfix};
use crate::itemize::Itemize;

/// Find every item in `sequence` matching `projector`, and build the
/// postfix that results from projecting on it.
///
/// * `level1 == true`: return one postfix per matching item, in sequence
///   order (used only during seeding, where the projector's interval is
///   not yet meaningful).
/// * `level1 == false`: return at most one postfix, for the first item
///   that both contains `projector.element` and whose itemized interval
///   equals `projector.interval`.
///
/// A matching item that yields no residual elements and has no later items
/// contributes no postfix at all, but for `level1 == false` it still
/// consumes the "first match" — no further items are examined.
pub fn postfixes<E>(
    sequence: &[Item<E>],
    projector: &Pair<E>,
    level1: bool,
    itemize: &Itemize,
) -> Vec<Postfix<E>>
where
    E: Ord + Clone,
{
    let mut out = Vec::new();

    for (k, item) in sequence.iter().enumerate() {
        if !item.elements.contains(&projector.element) {
            continue;
        }
        if !level1 && itemize.call(item.interval) != projector.interval {
            continue;
        }

        let mut postfix = Vec::new();

        let residual: std::collections::BTreeSet<E> = item
            .elements
            .range((Bound::Excluded(projector.element.clone()), Bound::Unbounded))
            .cloned()
            .collect();
        if !residual.is_empty() {
            postfix.push(Item::new(0, residual));
        }

        for later in &sequence[k + 1..] {
            postfix.push(Item::new(later.interval - item.interval, later.elements.clone()));
        }

        if !postfix.is_empty() {
            out.push(postfix);
        }

        if !level1 {
            break;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemize::fixed_bucket;
    use std::collections::BTreeSet;

    fn set(elems: &[&str]) -> BTreeSet<String> {
        elems.iter().map(|s| s.to_string()).collect()
    }

    fn item(interval: u64, elems: &[&str]) -> Item<String> {
        Item::new(interval, set(elems))
    }

    #[test]
    fn level1_yields_one_postfix_per_matching_anchor() {
        let sequence = vec![
            item(0, &["a"]),
            item(86_400, &["a", "b", "c"]),
            item(259_200, &["a", "c"]),
        ];
        let itemize = fixed_bucket(86_400);
        let projector = Pair::new(0, "a".to_string());

        let result = postfixes(&sequence, &projector, true, &itemize);

        assert_eq!(
            result,
            vec![
                vec![item(86_400, &["a", "b", "c"]), item(259_200, &["a", "c"])],
                vec![item(0, &["b", "c"]), item(172_800, &["a", "c"])],
                vec![item(0, &["c"])],
            ]
        );
    }

    #[test]
    fn deep_level_yields_exactly_one_postfix() {
        let sequence = vec![item(0, &["b", "c"]), item(172_800, &["a", "c"])];
        let itemize = fixed_bucket(86_400);
        let projector = Pair::new(0, "b".to_string());

        let result = postfixes(&sequence, &projector, false, &itemize);

        assert_eq!(
            result,
            vec![vec![item(0, &["c"]), item(172_800, &["a", "c"])]]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        let sequence = vec![item(0, &["x"])];
        let itemize = fixed_bucket(86_400);
        let projector = Pair::new(0, "z".to_string());
        assert!(postfixes(&sequence, &projector, true, &itemize).is_empty());
        assert!(postfixes(&sequence, &projector, false, &itemize).is_empty());
    }

    #[test]
    fn match_with_no_residual_and_no_later_items_contributes_nothing() {
        let sequence = vec![item(0, &["a"])];
        let itemize = fixed_bucket(86_400);
        let projector = Pair::new(0, "a".to_string());
        assert!(postfixes(&sequence, &projector, true, &itemize).is_empty());
    }
}
