use std::collections::BTreeSet;

use crate::{both, values};

/// Picks a value out of the set using an arbitrary index, if the set has any values.
fn pick(set: &BTreeSet<i8>, index: usize) -> Option<i8> {
    if set.is_empty() {
        None
    } else {
        set.iter().nth(index % set.len()).copied()
    }
}

quickcheck::quickcheck! {
    fn sub_set_between_members(xs: Vec<i8>, i: usize, j: usize) -> bool {
        let (set, reference) = both(&xs);
        let (Some(a), Some(b)) = (pick(&reference, i), pick(&reference, j)) else {
            return true;
        };
        let (from, to) = (a.min(b), a.max(b));

        let expected: Vec<_> = if from < to {
            reference.range(from..to).copied().collect()
        } else {
            Vec::new()
        };
        values(&set.sub_set(&from, &to)) == expected
    }
}

quickcheck::quickcheck! {
    fn sub_set_reversed_bounds_is_empty(xs: Vec<i8>, a: i8, b: i8) -> bool {
        let (set, _) = both(&xs);

        set.sub_set(&a.max(b), &a.min(b)).is_empty()
    }
}

quickcheck::quickcheck! {
    fn head_set_matches_range(xs: Vec<i8>, to: i8) -> bool {
        let (set, reference) = both(&xs);

        let expected: Vec<_> = if reference.contains(&to) {
            reference.range(..to).copied().collect()
        } else {
            // A boundary that is never visited never stops the walk.
            reference.iter().copied().collect()
        };
        values(&set.head_set(&to)) == expected
    }
}

quickcheck::quickcheck! {
    fn tail_set_matches_range(xs: Vec<i8>, from: i8) -> bool {
        let (set, reference) = both(&xs);

        let expected: Vec<_> = if reference.contains(&from) {
            reference.range(from..).copied().collect()
        } else {
            Vec::new()
        };
        values(&set.tail_set(&from)) == expected
    }
}

quickcheck::quickcheck! {
    fn head_and_tail_partition_the_set(xs: Vec<i8>, i: usize) -> bool {
        let (set, reference) = both(&xs);
        let Some(pivot) = pick(&reference, i) else {
            return set.head_set(&0).is_empty() && set.tail_set(&0).is_empty();
        };

        let mut joined = values(&set.head_set(&pivot));
        joined.extend(values(&set.tail_set(&pivot)));
        joined == values(&set)
    }
}
