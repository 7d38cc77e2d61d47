//! A sorted set stored in an unbalanced Binary Search Tree.
//!
//! # Examples
//!
//! ```
//! use sorted_bst::{Error, SortedSet};
//!
//! let mut set = SortedSet::new();
//!
//! // Nothing in here yet.
//! assert_eq!(set.first(), Err(Error::Empty));
//!
//! for x in [1, 3, 5, 7, 9] {
//!     set.insert(x);
//! }
//!
//! // Duplicates are rejected.
//! assert!(!set.insert(5));
//!
//! // Range views are copies of the matching elements.
//! assert_eq!(set.sub_set(&3, &7).inorder(), vec![&3, &5]);
//! assert_eq!(set.head_set(&5).inorder(), vec![&1, &3]);
//! assert_eq!(set.tail_set(&5).inorder(), vec![&5, &7, &9]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::traversal::Iter;
use crate::tree::{Comparator, Tree};
use crate::{Error, Result};

/// A set of unique values kept in sorted order by a Binary Search Tree.
///
/// The order is either `E`'s natural [`Ord`] (see [`SortedSet::new`]) or a
/// comparator injected with [`SortedSet::with_comparator`]. Uniqueness is
/// decided by that order: inserting a value that compares equal to one already
/// in the set does nothing.
///
/// The range views and structural queries locate their boundary elements with
/// `==` on the values visited, not with the comparator. For the natural order
/// of a type whose `Eq` agrees with its `Ord` the two are the same thing.
pub struct SortedSet<E> {
    pub(crate) tree: Tree<E>,
}

impl<E> Default for SortedSet<E>
where
    E: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SortedSet<E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<E> fmt::Debug for SortedSet<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two sets are equal when they hold equal values in the same order. Their shapes may differ.
impl<E> PartialEq for SortedSet<E>
where
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<E> Eq for SortedSet<E> where E: Eq {}

impl<E> FromIterator<E> for SortedSet<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<E> Extend<E> for SortedSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, E> IntoIterator for &'a SortedSet<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> SortedSet<E> {
    /// Generates a new, empty `SortedSet` ordered by `E`'s [`Ord`] implementation.
    pub fn new() -> Self
    where
        E: Ord,
    {
        Self {
            tree: Tree::new(Comparator::natural()),
        }
    }

    /// Generates a new, empty `SortedSet` ordered by `comparator`, which must be a total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_bst::SortedSet;
    ///
    /// let mut set = SortedSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.extend([1, 2, 3]);
    ///
    /// assert_eq!(set.first(), Ok(&3));
    /// assert_eq!(set.last(), Ok(&1));
    /// ```
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
    {
        Self {
            tree: Tree::new(Comparator::custom(comparator)),
        }
    }

    /// Builds a set ordered by `comparator` out of `iter`. Values are inserted in iteration order
    /// and duplicates are dropped.
    pub fn from_iter_with_comparator<I, F>(iter: I, comparator: F) -> Self
    where
        I: IntoIterator<Item = E>,
        F: Fn(&E, &E) -> Ordering + 'static,
    {
        let mut set = Self::with_comparator(comparator);
        set.extend(iter);
        set
    }

    /// An empty set sharing this set's ordering.
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            tree: Tree::new(self.tree.comparator().clone()),
        }
    }

    /// The comparator this set was built with, or `None` if it uses the natural ordering.
    pub fn comparator(&self) -> Option<&dyn Fn(&E, &E) -> Ordering> {
        self.tree.comparator().injected()
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the set has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `value` to the set. Returns `false`, leaving the set unchanged, if a value comparing
    /// equal to it was already present.
    pub fn insert(&mut self, value: E) -> bool {
        self.tree.insert(value)
    }

    /// Removes the value comparing equal to `value`. Returns whether anything was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_bst::SortedSet;
    ///
    /// let mut set: SortedSet<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// assert_eq!(set.inorder(), vec![&1, &3]);
    /// ```
    pub fn remove(&mut self, value: &E) -> bool {
        self.tree.remove(value).is_some()
    }

    /// Whether a value comparing equal to `value` is in the set.
    pub fn contains(&self, value: &E) -> bool {
        self.tree.search(self.tree.root(), value).is_some()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// The smallest value in the set.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the set has no values.
    pub fn first(&self) -> Result<&E> {
        self.tree
            .root()
            .map(|root| &Tree::minimum(root).value)
            .ok_or(Error::Empty)
    }

    /// The largest value in the set.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the set has no values.
    pub fn last(&self) -> Result<&E> {
        self.tree
            .root()
            .map(|root| &Tree::maximum(root).value)
            .ok_or(Error::Empty)
    }

    /// Removes and returns the smallest value.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the set has no values.
    pub fn pop_first(&mut self) -> Result<E> {
        self.tree.pop_first().ok_or(Error::Empty)
    }

    /// Removes and returns the largest value.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the set has no values.
    pub fn pop_last(&mut self) -> Result<E> {
        self.tree.pop_last().ok_or(Error::Empty)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.tree.root(), self.len())
    }

    /// The values in ascending order (left subtree, node, right subtree).
    pub fn inorder(&self) -> Vec<&E> {
        let mut values = Vec::with_capacity(self.len());
        Tree::collect_in_order(self.tree.root(), &mut values);
        values
    }

    /// The values in preorder (node, left subtree, right subtree). The first value is the root.
    pub fn preorder(&self) -> Vec<&E> {
        let mut values = Vec::with_capacity(self.len());
        Tree::collect_preorder(self.tree.root(), &mut values);
        values
    }

    /// Returns a new set holding the values `e` with `from <= e < to`.
    ///
    /// The walk starts emitting once it visits a value equal to `from` and stops when it visits
    /// a value equal to `to`. So if `from` isn't in the set the result is empty, and if `to`
    /// isn't in the set every value from `from` onwards is included. If `from` doesn't compare
    /// less than `to` the result is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_bst::SortedSet;
    ///
    /// let set: SortedSet<_> = [1, 3, 5, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(set.sub_set(&3, &7).inorder(), vec![&3, &5]);
    /// assert!(set.sub_set(&7, &3).is_empty());
    /// assert!(set.sub_set(&4, &7).is_empty());
    /// ```
    pub fn sub_set(&self, from: &E, to: &E) -> Self
    where
        E: Clone + PartialEq,
    {
        let mut set = self.empty_like();
        if self.tree.compare(from, to).is_ge() {
            trace!("sub_set: lower bound does not precede upper bound");
            return set;
        }

        let mut in_range = false;
        for value in self.iter() {
            if in_range && value == to {
                break;
            }
            if value == from {
                in_range = true;
            }
            if in_range {
                set.insert(value.clone());
            }
        }

        trace!(len = set.len(), "sub_set");
        set
    }

    /// Returns a new set holding the values `e` with `e < to`.
    ///
    /// The walk emits every value until it visits one equal to `to`. If `to` isn't in the set
    /// that never happens, so the result is a copy of the whole set. This differs from
    /// [`SortedSet::sub_set`] and [`SortedSet::tail_set`], where a missing boundary gives an
    /// empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_bst::SortedSet;
    ///
    /// let set: SortedSet<_> = [1, 3, 5, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(set.head_set(&5).inorder(), vec![&1, &3]);
    /// assert_eq!(set.head_set(&100), set);
    /// ```
    pub fn head_set(&self, to: &E) -> Self
    where
        E: Clone + PartialEq,
    {
        let mut set = self.empty_like();
        for value in self.iter() {
            if value == to {
                break;
            }
            set.insert(value.clone());
        }

        trace!(len = set.len(), "head_set");
        set
    }

    /// Returns a new set holding the values `e` with `e >= from`.
    ///
    /// The walk starts emitting once it visits a value equal to `from`, so the result is empty if
    /// `from` isn't in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_bst::SortedSet;
    ///
    /// let set: SortedSet<_> = [1, 3, 5, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(set.tail_set(&5).inorder(), vec![&5, &7, &9]);
    /// assert!(set.tail_set(&4).is_empty());
    /// ```
    pub fn tail_set(&self, from: &E) -> Self
    where
        E: Clone + PartialEq,
    {
        let mut set = self.empty_like();
        let mut in_range = false;
        for value in self.iter() {
            if value == from {
                in_range = true;
            }
            if in_range {
                set.insert(value.clone());
            }
        }

        trace!(len = set.len(), "tail_set");
        set
    }
}

#[cfg(feature = "serde")]
use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
#[cfg(feature = "serde")]
use std::marker::PhantomData;

/// Writes the set as its preorder traversal.
#[cfg(feature = "serde")]
impl<E: Serialize> Serialize for SortedSet<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.preorder())
    }
}

#[cfg(feature = "serde")]
struct SortedSetVisitor<E> {
    marker: PhantomData<fn() -> SortedSet<E>>,
}

#[cfg(feature = "serde")]
impl<'de, E> Visitor<'de> for SortedSetVisitor<E>
where
    E: Deserialize<'de> + Ord,
{
    type Value = SortedSet<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Inserting in preorder rebuilds the tree that was serialized.
        let mut set = SortedSet::new();
        while let Some(value) = access.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

/// Reads a naturally ordered set back from any sequence, inserting in sequence order.
#[cfg(feature = "serde")]
impl<'de, E> Deserialize<'de> for SortedSet<E>
where
    E: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor {
            marker: PhantomData,
        })
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a `SortedSet` and a `BTreeSet`, checking they agree on every
    /// step's outcome.
    fn do_ops<E>(ops: &[Op<E>], set: &mut SortedSet<E>, reference: &mut BTreeSet<E>) -> bool
    where
        E: Ord + Clone,
    {
        ops.iter().all(|op| match op {
            Op::Insert(x) => set.insert(x.clone()) == reference.insert(x.clone()),
            Op::Remove(x) => set.remove(x) == reference.remove(x),
            Op::Iter => set.iter().eq(reference.iter()),
        })
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut set = SortedSet::new();
            let mut reference = BTreeSet::new();

            do_ops(&ops, &mut set, &mut reference)
                && set.len() == reference.len()
                && set.iter().eq(reference.iter())
                && set.first().ok() == reference.first()
                && set.last().ok() == reference.last()
        }
    }

    quickcheck::quickcheck! {
        fn inorder_is_strictly_increasing(xs: Vec<i16>) -> bool {
            let set: SortedSet<_> = xs.into_iter().collect();

            set.inorder().windows(2).all(|pair| pair[0] < pair[1])
        }
    }

    quickcheck::quickcheck! {
        fn pops_drain_in_order(xs: Vec<i8>) -> bool {
            let mut set: SortedSet<_> = xs.iter().copied().collect();
            let expected: BTreeSet<_> = xs.into_iter().collect();

            let mut drained = Vec::new();
            while let Ok(x) = set.pop_first() {
                drained.push(x);
            }
            set.is_empty() && drained.into_iter().eq(expected)
        }
    }
}
