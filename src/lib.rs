//! AVL tree: a self-balancing binary search tree with pre-, in- and
//! post-order traversals, stack-driven depth-first and queue-driven
//! breadth-first iteration, and a small demonstration driver.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut tree: AvlTree<i32> = [9, 5, 10, 0, 6, 11, -1, 1, 2].into_iter().collect();
//! assert_eq!(tree.root(), Some(&9));
//!
//! tree.delete(&10);
//! assert_eq!(tree.root(), Some(&1));
//! assert!(!tree.exists(&10));
//! assert!(tree.validate());
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{AvlTree, DomainError, Node, TreeRender};
