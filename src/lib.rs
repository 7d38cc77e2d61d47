//! A sorted set backed by a plain (unbalanced) Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is built out of `Node`s. Every `Node` stores a value
//! and owns up to two child `Node`s. The invariants that make it a search tree
//! are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold a value that
//!    compares less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree hold a value that
//!    compares greater than its own value.
//!
//! Because of these invariants, visiting the left subtree, then the node, then
//! the right subtree (an "inorder" traversal) yields the values in sorted
//! order. That is what [`SortedSet`] is built on: iteration, `first`/`last`
//! and the range views ([`SortedSet::sub_set`], [`SortedSet::head_set`],
//! [`SortedSet::tail_set`]) all walk the tree inorder.
//!
//! > Note that no rebalancing is ever performed. Inserting values in sorted
//! > order produces a tree that is really a linked list.
//!
//! On top of the usual set operations the tree exposes a couple of structural
//! queries ([`SortedSet::depth`] and [`SortedSet::height`]) and can be rebuilt
//! from a preorder/inorder traversal pair with [`SortedSet::reconstruct`].
//!
//! # Examples
//!
//! ```
//! use sorted_bst::SortedSet;
//!
//! let set: SortedSet<i32> = [5, 3, 7, 1, 4, 6, 8].into_iter().collect();
//!
//! assert_eq!(set.first(), Ok(&1));
//! assert_eq!(set.sub_set(&3, &7).inorder(), vec![&3, &4, &5, &6]);
//! assert_eq!(set.depth(&4), Some(2));
//! assert_eq!(set.height(&5), Some(2));
//! ```
//!
//! ## Features
//!
//! - `serde`: implements `Serialize`/`Deserialize` for [`SortedSet`]. Sets are
//!   written as their preorder traversal so reading one back reproduces the
//!   same tree shape.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod reconstruct;
pub mod sorted_set;
mod structure;
mod traversal;
mod tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}

pub use sorted_set::SortedSet;
pub use traversal::Iter;

use thiserror::Error;

/// Errors returned by [`SortedSet`] operations that have no meaningful answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The set has no elements, so there is no first or last one.
    #[error("the set contains no elements")]
    Empty,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
