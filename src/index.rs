//! An index of unique keys implemented with an AVL tree.

use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FromIterator;

use tracing::trace;

use crate::stats::Stats;

mod iter;
pub use iter::{Ascending, Descending, Hierarchical, LevelOrder};

/// An index of unique keys kept in an AVL tree.
///
/// Inserting a key that is already present leaves the index unchanged.
/// Keys can never be removed.
///
/// ```
/// use inventory_avl::AvlIndex;
/// let mut index = AvlIndex::new();
/// assert!(index.insert(30));
/// assert!(index.insert(10));
/// assert!(index.insert(20));
/// assert!(!index.insert(20));
/// assert!(index.search(&10));
/// assert_eq!(index.ascending().copied().collect::<Vec<_>>(), [10, 20, 30]);
/// assert_eq!(index.height(), 2);
/// ```
#[derive(Clone)]
pub struct AvlIndex<K> {
    root: Link<K>,
    num_nodes: usize,
}

type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
    height: usize,
}

impl<K> AvlIndex<K> {
    /// Creates an empty index.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the index contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the index.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, counting a single node as height 1.
    /// An empty index has height 0.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Returns whether every node satisfies the AVL condition.
    /// Only inspects cached heights; meant for diagnostics.
    pub fn is_balanced(&self) -> bool {
        Node::is_balanced(&self.root)
    }

    /// Returns size, height and balance of the index in one value.
    pub fn stats(&self) -> Stats {
        Stats {
            len: self.len(),
            height: self.height(),
            balanced: self.is_balanced(),
        }
    }

    /// Gets an iterator over the keys in ascending order (in-order traversal).
    pub fn ascending(&self) -> Ascending<'_, K> {
        Ascending::new(&self.root, self.num_nodes)
    }

    /// Gets an iterator over the keys in descending order (reverse in-order traversal).
    pub fn descending(&self) -> Descending<'_, K> {
        Descending::new(&self.root, self.num_nodes)
    }

    /// Gets an iterator visiting each node before its left and right subtrees
    /// (pre-order traversal).
    pub fn hierarchical(&self) -> Hierarchical<'_, K> {
        Hierarchical::new(&self.root, self.num_nodes)
    }

    /// Gets an iterator visiting the nodes level by level, left to right
    /// (breadth-first traversal).
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(&self.root, self.num_nodes)
    }

    /// Same as [`ascending`](AvlIndex::ascending).
    pub fn iter(&self) -> Ascending<'_, K> {
        self.ascending()
    }

    /// Calls `f` on every key in breadth-first order.
    pub fn traverse_level_order<F: FnMut(&K)>(&self, mut f: F) {
        for key in self.level_order() {
            f(key);
        }
    }
}

impl<K: Ord> AvlIndex<K> {
    /// Inserts a key into the index.
    /// Returns false, leaving the index untouched, if the key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        if Self::insert_at(&mut self.root, key).is_some() {
            self.num_nodes += 1;
            return true;
        }
        false
    }

    /// Returns true if the key is in the index.
    ///
    /// The key may be any borrowed form of the index's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Same as [`search`](AvlIndex::search).
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key)
    }

    /// Returns a reference to the stored key that is equal to the given key.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let num_nodes = Self::check_subtree(&self.root, None, None);
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.is_empty(), self.num_nodes == 0);
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn check_subtree(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> usize {
        let node = match link {
            None => return 0,
            Some(node) => node,
        };

        // Check search order against all ancestors
        if let Some(lower) = lower {
            assert!(node.key > *lower);
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper);
        }

        // Check height
        let left_height = Node::height(&node.left);
        let right_height = Node::height(&node.right);
        assert_eq!(node.height, cmp::max(left_height, right_height) + 1);

        // Check AVL condition (nearly balance)
        assert!(left_height <= right_height + 1);
        assert!(right_height <= left_height + 1);

        1 + Self::check_subtree(&node.left, lower, Some(&node.key))
            + Self::check_subtree(&node.right, Some(&node.key), upper)
    }

    fn find<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Inserts the key into the subtree owned by `link`, rebalancing on the way back up.
    /// Returns `None` if the key was already present. Otherwise returns the direction
    /// taken at the subtree root, or `Equal` if the new node is the subtree root.
    fn insert_at(link: &mut Link<K>, key: K) -> Option<Ordering> {
        let Some(node) = link.as_mut() else {
            *link = Some(Node::create(key));
            return Some(Ordering::Equal);
        };

        let dir = key.cmp(&node.key);
        let below = match dir {
            Ordering::Less => Self::insert_at(&mut node.left, key)?,
            Ordering::Greater => Self::insert_at(&mut node.right, key)?,
            Ordering::Equal => return None,
        };
        Self::rebalance_node(link, below);
        Some(dir)
    }

    /// Adjusts the height of the subtree root owned by `link` and restores the AVL
    /// condition with at most one single or double rotation.
    /// `below` is the direction the insertion took at the child on the grown side,
    /// i.e. how the inserted key compares to that child's key.
    /// Initial balance must not exceed +2 or -2, which always holds after a single insert.
    fn rebalance_node(link: &mut Link<K>, below: Ordering) {
        let Some(mut node) = link.take() else {
            return;
        };
        node.adjust_height();
        let balance = node.balance_factor();
        debug_assert!((-2..=2).contains(&balance));

        let node = if balance > 1 && below == Ordering::Less {
            trace!(case = "left-left", height = node.height, "rebalancing subtree");
            node.rotate_right()
        } else if balance < -1 && below == Ordering::Greater {
            trace!(case = "right-right", height = node.height, "rebalancing subtree");
            node.rotate_left()
        } else if balance > 1 && below == Ordering::Greater {
            trace!(case = "left-right", height = node.height, "rebalancing subtree");
            node.left = node.left.take().map(Node::rotate_left);
            node.rotate_right()
        } else if balance < -1 && below == Ordering::Less {
            trace!(case = "right-left", height = node.height, "rebalancing subtree");
            node.right = node.right.take().map(Node::rotate_right);
            node.rotate_left()
        } else {
            node
        };
        *link = Some(node);
    }
}

impl<K> Node<K> {
    fn create(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    fn height(link: &Link<K>) -> usize {
        match link {
            None => 0,
            Some(node) => node.height,
        }
    }

    /// Positive if the left subtree is higher, negative if the right one is.
    fn balance_factor(&self) -> isize {
        Self::height(&self.left) as isize - Self::height(&self.right) as isize
    }

    fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(Self::height(&self.left), Self::height(&self.right));
    }

    fn is_balanced(link: &Link<K>) -> bool {
        match link {
            None => true,
            Some(node) => {
                node.balance_factor().abs() <= 1
                    && Self::is_balanced(&node.left)
                    && Self::is_balanced(&node.right)
            }
        }
    }

    //     y        x
    //    / \      / \
    //   x   C -> A   y
    //  / \          / \
    // A   B        B   C
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        match self.left.take() {
            None => self,
            Some(mut left) => {
                self.left = left.right.take();
                self.adjust_height();
                left.right = Some(self);
                left.adjust_height();
                left
            }
        }
    }

    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        match self.right.take() {
            None => self,
            Some(mut right) => {
                self.right = right.left.take();
                self.adjust_height();
                right.left = Some(self);
                right.adjust_height();
                right
            }
        }
    }
}

impl<K> Default for AvlIndex<K> {
    /// Creates an empty index.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for AvlIndex<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<K: Ord> Extend<K> for AvlIndex<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlIndex<K> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K> IntoIterator for &'a AvlIndex<K> {
    type Item = &'a K;
    type IntoIter = Ascending<'a, K>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
