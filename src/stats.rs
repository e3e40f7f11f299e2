use std::fmt;

/// Summary of an index's shape, as returned by [`AvlIndex::stats`].
///
/// [`AvlIndex::stats`]: crate::AvlIndex::stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Number of stored keys.
    pub len: usize,
    /// Height of the tree, 0 when empty.
    pub height: usize,
    /// Whether every node satisfies the AVL condition.
    pub balanced: bool,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total codes: {}", self.len)?;
        writeln!(f, "Tree height: {}", self.height)?;
        write!(f, "Balanced tree: {}", self.balanced)
    }
}
