use colored::Colorize as _;
use tracing::{debug, trace};

use crate::{Node, Tree, Value};

/// Prune the subtree at `node`, returning what should occupy its slot.
///
/// A node above `max` is dropped together with its (already pruned) right
/// subtree, and its original left subtree is pruned and promoted into the slot.
fn prune(node: Option<Box<Node>>, max: Value, released: &mut usize) -> Option<Box<Node>> {
    let mut node = node?;
    let (left, right) = node.take_children();

    let right = prune(right, max, released);

    if node.value() > max {
        let dropped = 1 + right.as_deref().map_or(0, Node::len);
        trace!(
            "{} {} with {} nodes on its right",
            "Released".red(),
            node.value(),
            dropped - 1
        );
        *released += dropped;
        drop(right);
        drop(node);

        return prune(left, max, released);
    }

    let left = prune(left, max, released);
    node.set_children(left, right);
    Some(node)
}

impl Tree {
    /// Remove every node whose value is greater than `max`.
    ///
    /// When a node is removed its right subtree goes with it, and its left
    /// subtree, pruned in turn, takes its place. Returns the number of nodes
    /// dropped. Any [`crate::NodePath`] taken before the call may no longer
    /// resolve, or may resolve to a different node.
    pub fn remove_greater_than(&mut self, max: Value) -> usize {
        let before = self.len();
        let mut released = 0;

        let root = prune(self.take_root(), max, &mut released);
        self.replace_root(root);

        debug!(
            "{} greater than {}: released {} of {} nodes",
            "Pruned".bright_purple(),
            max,
            released,
            before
        );

        released
    }
}
