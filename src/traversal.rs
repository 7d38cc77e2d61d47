//! Iterative inorder traversal. The stack of pending ancestors is kept on the
//! heap so walking a degenerate tree costs no more call stack than walking a
//! balanced one.

use std::iter::FusedIterator;

use crate::tree::Node;

/// An iterator over the values of a [`SortedSet`][crate::SortedSet] in
/// ascending order.
///
/// Created by [`SortedSet::iter`][crate::SortedSet::iter].
pub struct Iter<'a, E> {
    /// Nodes whose left subtree has been (or is being) visited but which
    /// haven't been yielded yet. The top of the stack is yielded next.
    stack: Vec<&'a Node<E>>,
    remaining: usize,
}

/// Manual implementation of `Clone` so we don't require `E: Clone` for what is only a stack of
/// references.
impl<'a, E> Clone for Iter<'a, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and then every left descendant of it.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<E>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> ExactSizeIterator for Iter<'a, E> {}

impl<'a, E> FusedIterator for Iter<'a, E> {}
