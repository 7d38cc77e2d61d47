//! Rebuilding a tree from its preorder and inorder traversals.
//!
//! The first value of a preorder traversal is always the root. Finding that
//! root in the inorder traversal splits the inorder values into the left and
//! right subtrees, and the sizes of those halves split the rest of the
//! preorder traversal the same way. Recursing on each half inserts the values
//! in preorder, which for a search tree reproduces the original shape.
//!
//! # Examples
//!
//! ```
//! use sorted_bst::SortedSet;
//!
//! let original: SortedSet<_> = [5, 3, 7, 1, 4, 6, 8].into_iter().collect();
//! let pre: Vec<i32> = original.preorder().into_iter().copied().collect();
//! let ino: Vec<i32> = original.inorder().into_iter().copied().collect();
//!
//! let mut rebuilt = SortedSet::new();
//! assert_eq!(rebuilt.reconstruct(&pre, &ino), Some(&5));
//! assert_eq!(rebuilt.preorder(), original.preorder());
//! ```

use tracing::{debug, trace};

use crate::SortedSet;

impl<E> SortedSet<E> {
    /// Inserts the values of the tree described by `preorder` and `inorder` and returns that
    /// tree's root value, or `None` if both sequences are empty.
    ///
    /// Values are inserted in preorder. If this set starts out empty and uses the same ordering
    /// as the tree the traversals came from, it ends up with exactly that tree's shape.
    ///
    /// # Panics
    ///
    /// `preorder` and `inorder` must be the traversals of one and the same tree. Panics if a
    /// preorder value is missing from `inorder` or the split runs past the end of `preorder`.
    /// Other mismatches are not detected and insert some other tree.
    pub fn reconstruct<'a>(&mut self, preorder: &'a [E], inorder: &'a [E]) -> Option<&'a E>
    where
        E: Clone + PartialEq,
    {
        debug!(len = preorder.len(), "reconstruct");
        self.reconstruct_subtree(preorder, inorder)
    }

    fn reconstruct_subtree<'a>(&mut self, preorder: &'a [E], inorder: &'a [E]) -> Option<&'a E>
    where
        E: Clone + PartialEq,
    {
        match preorder {
            [] => None,
            [root] => {
                self.insert(root.clone());
                Some(root)
            }
            [root, rest @ ..] => {
                self.insert(root.clone());

                let split = inorder
                    .iter()
                    .position(|value| value == root)
                    .expect("inorder traversal is missing a preorder value");
                trace!(split, len = preorder.len(), "reconstruct: placed subtree root");

                // Each recursive call inserts its own root before anything below it.
                let (left_preorder, right_preorder) = rest.split_at(split);
                self.reconstruct_subtree(left_preorder, &inorder[..split]);
                self.reconstruct_subtree(right_preorder, &inorder[split + 1..]);
                Some(root)
            }
        }
    }

    /// Builds a naturally ordered set with the shape of the tree described by `preorder` and
    /// `inorder`.
    ///
    /// # Panics
    ///
    /// See [`SortedSet::reconstruct`].
    pub fn from_traversals(preorder: &[E], inorder: &[E]) -> Self
    where
        E: Clone + Ord,
    {
        let mut set = Self::new();
        set.reconstruct(preorder, inorder);
        set
    }
}
