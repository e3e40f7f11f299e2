//! An inventory index of unique product codes implemented with an AVL tree.
//!
//! The index supports logarithmic insertion and lookup and four traversal orders:
//! ascending, descending, hierarchical (pre-order) and level-order.
//! Codes can only be added, never removed.
//!
//! ```
//! use inventory_avl::Inventory;
//! let inventory: Inventory = [50, 30, 70, 20, 40].into_iter().collect();
//! assert!(inventory.search(&40));
//! assert!(!inventory.search(&45));
//! assert_eq!(inventory.level_order().copied().collect::<Vec<_>>(), [50, 30, 70, 20, 40]);
//! ```

mod index;
mod stats;

pub use index::{Ascending, AvlIndex, Descending, Hierarchical, LevelOrder};
pub use stats::Stats;

/// A product code stored in an [`Inventory`].
pub type ProductCode = i32;

/// An index of unique product codes.
pub type Inventory = AvlIndex<ProductCode>;

#[cfg(test)]
mod proptests;
