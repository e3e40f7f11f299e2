use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use super::{Link, Node};

/// An iterator over the keys of an index in ascending order.
///
/// This `struct` is created by the [`ascending`] method on [`AvlIndex`].
///
/// [`AvlIndex`]: super::AvlIndex
/// [`ascending`]: super::AvlIndex::ascending
pub struct Ascending<'a, K> {
    // Nodes whose left subtree has been visited but which have not been yielded yet
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

/// An iterator over the keys of an index in descending order.
///
/// This `struct` is created by the [`descending`] method on [`AvlIndex`].
///
/// [`AvlIndex`]: super::AvlIndex
/// [`descending`]: super::AvlIndex::descending
pub struct Descending<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

/// An iterator over the keys of an index in pre-order: parents before children,
/// left subtree before right subtree.
///
/// This `struct` is created by the [`hierarchical`] method on [`AvlIndex`].
///
/// [`AvlIndex`]: super::AvlIndex
/// [`hierarchical`]: super::AvlIndex::hierarchical
pub struct Hierarchical<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

/// An iterator over the keys of an index in breadth-first order.
///
/// This `struct` is created by the [`level_order`] method on [`AvlIndex`].
///
/// [`AvlIndex`]: super::AvlIndex
/// [`level_order`]: super::AvlIndex::level_order
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Ascending<'a, K> {
    pub(super) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(Node::height(root)),
            remaining: len,
        };
        iter.descend_left(root.as_deref());
        iter
    }

    fn descend_left(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K> Descending<'a, K> {
    pub(super) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(Node::height(root)),
            remaining: len,
        };
        iter.descend_right(root.as_deref());
        iter
    }

    fn descend_right(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.right.as_deref();
        }
    }
}

impl<'a, K> Hierarchical<'a, K> {
    pub(super) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut stack = Vec::with_capacity(Node::height(root) + 1);
        stack.extend(root.as_deref());
        Self {
            stack,
            remaining: len,
        }
    }
}

impl<'a, K> LevelOrder<'a, K> {
    pub(super) fn new(root: &'a Link<K>, len: usize) -> Self {
        // Every node is enqueued exactly once
        let mut queue = VecDeque::with_capacity(len);
        queue.extend(root.as_deref());
        Self {
            queue,
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for Ascending<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> Iterator for Descending<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_right(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> Iterator for Hierarchical<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so that the left subtree is popped next
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Ascending<'_, K> {}
impl<K> ExactSizeIterator for Descending<'_, K> {}
impl<K> ExactSizeIterator for Hierarchical<'_, K> {}
impl<K> ExactSizeIterator for LevelOrder<'_, K> {}

impl<K> FusedIterator for Ascending<'_, K> {}
impl<K> FusedIterator for Descending<'_, K> {}
impl<K> FusedIterator for Hierarchical<'_, K> {}
impl<K> FusedIterator for LevelOrder<'_, K> {}

// Auto derived clone seems to have an invalid type bound of K: Clone
impl<K> Clone for Ascending<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K> Clone for Descending<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K> Clone for Hierarchical<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K> Clone for LevelOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Ascending<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K: fmt::Debug> fmt::Debug for Descending<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K: fmt::Debug> fmt::Debug for Hierarchical<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K: fmt::Debug> fmt::Debug for LevelOrder<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
