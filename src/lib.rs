//! # Prunetree
//!
//! Owned binary trees of integers.
//!
//! ## Overview
//!
//! Values are placed explicitly by the caller, either through a
//! [`TreeBuilder`] or by attaching children at a [`NodePath`]. There is no
//! ordering or balancing. Trees can be walked in pre, in, post and level
//! order, and pruned with [`Tree::remove_greater_than`], which drops every
//! node above a threshold while keeping the result a valid binary tree.
//!
//! ```
//! use prunetree::{NodePath, Tree};
//!
//! let mut tree = Tree::new();
//! tree.set_root(20);
//! let left = tree.add_left_child(&NodePath::root(), 10).unwrap();
//! let right = tree.add_right_child(&NodePath::root(), 30).unwrap();
//! tree.add_left_child(&right, 25).unwrap();
//! tree.add_right_child(&left, 15).unwrap();
//!
//! tree.remove_greater_than(25);
//! assert_eq!(tree.in_order(), vec![10, 15, 20, 25]);
//! ```

mod builder;
mod display;
mod error;
mod hash;
mod node;
mod path;
mod prune;
mod traversal;
mod tree;

#[cfg(test)]
mod test;

pub use builder::*;
pub use display::TreeDisplay;
pub use error::{TreeError, TreeResult};
pub use node::Node;
pub use path::{NodePath, Side};
pub use traversal::{Order, Traversal};
pub use tree::Tree;

/// The value held by each node
pub type Value = i32;
