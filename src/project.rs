//! Lifts the postfix generator over a whole projected database to build
//! the next level down.

use crate::item::{Pair, Pdb};
use crate::itemize::Itemize;
use crate::postfix::postfixes;

/// Project `pdb` on `projector`, keeping at most one postfix per prior
/// postfix and dropping groups that become empty.
///
/// `|project(pdb, projector)| <= |pdb|`, and each surviving group is no
/// larger than the group it came from.
pub fn project<E>(pdb: &Pdb<E>, projector: &Pair<E>, itemize: &Itemize) -> Pdb<E>
where
    E: Ord + Clone,
{
    pdb.iter()
        .filter_map(|group| {
            let projected: Vec<_> = group
                .iter()
                .filter_map(|postfix| postfixes(postfix, projector, false, itemize).into_iter().next())
                .collect();
            if projected.is_empty() {
                None
            } else {
                Some(projected)
            }
        })
        .collect()
}
