//! Structural queries: how far an element sits below the root and how tall its
//! subtree is.

use tracing::debug;

use crate::SortedSet;

impl<E> SortedSet<E> {
    /// Full inorder scan for a value equal to `element`.
    fn holds(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.iter().any(|value| value == element)
    }

    /// Walks down from the root, steering with the comparator, until it reaches a node whose
    /// value equals `element`. Returns the number of edges walked.
    fn walk_to(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        let mut current = self.tree.root()?;
        let mut depth = 0;
        while current.value != *element {
            current = if self.tree.compare(element, &current.value).is_lt() {
                current.left()?
            } else {
                current.right()?
            };
            depth += 1;
        }
        Some(depth)
    }

    /// The number of edges between the root and `element`, or `None` if `element` isn't in the
    /// set. The root has depth 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_bst::SortedSet;
    ///
    /// let set: SortedSet<_> = [5, 3, 7, 1, 4, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(set.depth(&5), Some(0));
    /// assert_eq!(set.depth(&1), Some(2));
    /// assert_eq!(set.depth(&99), None);
    /// ```
    pub fn depth(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        if !self.holds(element) {
            debug!("depth: element not in set");
            return None;
        }
        self.walk_to(element)
    }

    /// The height of the subtree rooted at `element`: the depth of its deepest leaf minus the
    /// depth of `element` itself. Leaves have height 0. Returns `None` if `element` isn't in the
    /// set.
    ///
    /// Every leaf below `element` is walked to from the root, so this costs O(leaves × depth).
    /// [`SortedSet::tree_height`] is a single pass when only the root's height is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_bst::SortedSet;
    ///
    /// let set: SortedSet<_> = [5, 3, 7, 1, 4, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(set.height(&5), Some(2));
    /// assert_eq!(set.height(&3), Some(1));
    /// assert_eq!(set.height(&1), Some(0));
    /// assert_eq!(set.height(&99), None);
    /// ```
    pub fn height(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        if !self.holds(element) {
            debug!("height: element not in set");
            return None;
        }
        let subtree = self.tree.search(self.tree.root(), element)?;
        let own_depth = self.walk_to(element)?;

        let mut leaves = Vec::new();
        subtree.collect_leaves(&mut leaves);
        let deepest = leaves
            .iter()
            .filter_map(|leaf| self.walk_to(&leaf.value))
            .max()
            .unwrap_or(own_depth);

        Some(deepest.saturating_sub(own_depth))
    }

    /// The height of the whole tree, i.e. the height of the root. `None` for an empty set.
    pub fn tree_height(&self) -> Option<usize> {
        let mut height = 0;
        let mut pending = vec![(self.tree.root()?, 0)];
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [node.left(), node.right()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        Some(height)
    }
}
