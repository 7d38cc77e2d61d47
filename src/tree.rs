//! The search tree underneath [`SortedSet`][crate::SortedSet]: the nodes, the
//! comparator that orders them and the primitive search/insert/remove
//! operations everything else is built from.

use std::cmp::Ordering;
use std::rc::Rc;

/// A total order over `E` supplied by the caller instead of `E`'s own `Ord`.
pub(crate) type CompareFn<E> = dyn Fn(&E, &E) -> Ordering;

/// The ordering a tree was built with. It is picked once, when the tree is
/// constructed, and never changes afterwards.
pub(crate) enum Comparator<E> {
    /// `E`'s natural ordering, i.e. `Ord::cmp`.
    Natural(fn(&E, &E) -> Ordering),
    /// An ordering injected by the caller.
    Custom(Rc<CompareFn<E>>),
}

/// Manual implementation of `Clone` so cloning a comparator doesn't require `E: Clone`.
impl<E> Clone for Comparator<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Natural(f) => Self::Natural(*f),
            Self::Custom(f) => Self::Custom(Rc::clone(f)),
        }
    }
}

impl<E> Comparator<E> {
    pub(crate) fn natural() -> Self
    where
        E: Ord,
    {
        Self::Natural(E::cmp)
    }

    pub(crate) fn custom<F>(f: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
    {
        Self::Custom(Rc::new(f))
    }

    pub(crate) fn compare(&self, a: &E, b: &E) -> Ordering {
        match self {
            Self::Natural(f) => f(a, b),
            Self::Custom(f) => f(a, b),
        }
    }

    /// The injected ordering, or `None` when the natural one is in use.
    pub(crate) fn injected(&self) -> Option<&CompareFn<E>> {
        match self {
            Self::Natural(_) => None,
            Self::Custom(f) => Some(f.as_ref()),
        }
    }
}

/// A single vertex of the tree. Children are owned exclusively by their
/// parent and there are no links back up the tree.
pub(crate) struct Node<E> {
    pub(crate) value: E,
    pub(crate) left: Option<Box<Node<E>>>,
    pub(crate) right: Option<Box<Node<E>>>,
}

impl<E> Node<E> {
    fn new_boxed(value: E) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Pushes every leaf of the subtree rooted at `self` onto `leaves`, left to right.
    pub(crate) fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Self>) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if node.is_leaf() {
                leaves.push(node);
            }
            // Right first so the left subtree is popped, and its leaves pushed, first.
            pending.extend(node.right());
            pending.extend(node.left());
        }
    }

    /// Unlinks the smallest node below `link`, splicing its right subtree into its place.
    fn take_smallest(mut link: &mut Option<Box<Self>>) -> Option<E> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let Self { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }

    /// Unlinks the largest node below `link`, splicing its left subtree into its place.
    fn take_largest(mut link: &mut Option<Box<Self>>) -> Option<E> {
        while link.as_ref()?.right.is_some() {
            link = &mut link.as_mut()?.right;
        }
        let Self { value, left, .. } = *link.take()?;
        *link = left;
        Some(value)
    }
}

/// A step of the postorder walk in `Tree::clone`.
enum CloneStep<'a, E> {
    /// Descend into a (possibly missing) child.
    Visit(Option<&'a Node<E>>),
    /// Both children of this node have been cloned and sit on top of the output stack.
    Build(&'a Node<E>),
}

/// An unbalanced Binary Search Tree holding unique values.
pub(crate) struct Tree<E> {
    root: Option<Box<Node<E>>>,
    len: usize,
    comparator: Comparator<E>,
}

impl<E> Drop for Tree<E> {
    // Explicit stack: the derived drop recurses once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<E> Clone for Tree<E>
where
    E: Clone,
{
    // Postorder with explicit stacks: each node is built once its two children are.
    fn clone(&self) -> Self {
        let mut steps = vec![CloneStep::Visit(self.root())];
        let mut built: Vec<Option<Box<Node<E>>>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Visit(None) => built.push(None),
                CloneStep::Visit(Some(node)) => {
                    steps.push(CloneStep::Build(node));
                    steps.push(CloneStep::Visit(node.right()));
                    steps.push(CloneStep::Visit(node.left()));
                }
                CloneStep::Build(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

impl<E> Tree<E> {
    pub(crate) fn new(comparator: Comparator<E>) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
        }
    }

    pub(crate) fn root(&self) -> Option<&Node<E>> {
        self.root.as_deref()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn comparator(&self) -> &Comparator<E> {
        &self.comparator
    }

    pub(crate) fn compare(&self, a: &E, b: &E) -> Ordering {
        self.comparator.compare(a, b)
    }

    /// Inserts `value` where an unsuccessful search for it ends. Returns `false` (and drops
    /// `value`) if an equal value is already present.
    pub(crate) fn insert(&mut self, value: E) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match self.comparator.compare(&value, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Removes the value comparing equal to `value`. A node with two children is replaced by its
    /// predecessor, i.e. the largest node in its left subtree.
    pub(crate) fn remove(&mut self, value: &E) -> Option<E> {
        let mut link = &mut self.root;
        loop {
            let ordering = self.comparator.compare(value, &link.as_ref()?.value);
            link = match ordering {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Greater => &mut link.as_mut()?.right,
                Ordering::Equal => break,
            };
        }

        let mut node = link.take()?;
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut left = Some(left);
                let predecessor = Node::take_largest(&mut left)?;
                Some(Box::new(Node {
                    value: predecessor,
                    left,
                    right: Some(right),
                }))
            }
        };
        self.len -= 1;

        let Node { value: removed, .. } = *node;
        Some(removed)
    }

    pub(crate) fn pop_first(&mut self) -> Option<E> {
        let value = Node::take_smallest(&mut self.root)?;
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn pop_last(&mut self) -> Option<E> {
        let value = Node::take_largest(&mut self.root)?;
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::new(self.comparator.clone());
    }

    /// Searches the subtree rooted at `from` for the node whose value compares equal to `value`.
    pub(crate) fn search<'a>(&self, from: Option<&'a Node<E>>, value: &E) -> Option<&'a Node<E>> {
        let mut current = from;
        while let Some(node) = current {
            current = match self.compare(value, &node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// The leftmost node of the subtree rooted at `node`.
    pub(crate) fn minimum(node: &Node<E>) -> &Node<E> {
        let mut current = node;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The rightmost node of the subtree rooted at `node`.
    pub(crate) fn maximum(node: &Node<E>) -> &Node<E> {
        let mut current = node;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// Recursively appends the values of the subtree rooted at `node` to `out`, inorder.
    pub(crate) fn collect_in_order<'a>(node: Option<&'a Node<E>>, out: &mut Vec<&'a E>) {
        if let Some(n) = node {
            Self::collect_in_order(n.left(), out);
            out.push(&n.value);
            Self::collect_in_order(n.right(), out);
        }
    }

    /// Recursively appends the values of the subtree rooted at `node` to `out`, preorder.
    pub(crate) fn collect_preorder<'a>(node: Option<&'a Node<E>>, out: &mut Vec<&'a E>) {
        if let Some(n) = node {
            out.push(&n.value);
            Self::collect_preorder(n.left(), out);
            Self::collect_preorder(n.right(), out);
        }
    }
}

#[cfg(test)]
impl Tree<i32> {
    /// A list shaped tree holding `0..len`, every node a right child, built without going
    /// through the quadratic sorted inserts.
    pub(crate) fn right_chain(len: i32) -> Self {
        let mut root = None;
        for value in (0..len).rev() {
            root = Some(Box::new(Node {
                value,
                left: None,
                right: root,
            }));
        }
        Self {
            root,
            len: len as usize,
            comparator: Comparator::natural(),
        }
    }
}
