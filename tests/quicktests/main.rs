//! Property tests comparing `SortedSet` against `std::collections::BTreeSet`.

mod range;
mod reconstruct;

use std::collections::BTreeSet;

use sorted_bst::SortedSet;

/// Builds both sets from the same values, in the same insertion order.
pub(crate) fn both(xs: &[i8]) -> (SortedSet<i8>, BTreeSet<i8>) {
    (xs.iter().copied().collect(), xs.iter().copied().collect())
}

/// Owned copy of a set's values in ascending order.
pub(crate) fn values(set: &SortedSet<i8>) -> Vec<i8> {
    set.iter().copied().collect()
}
