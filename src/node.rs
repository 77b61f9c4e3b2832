use tracing::warn;

use crate::{Side, TreeError, TreeResult, Value};

/// A single tree vertex owning up to two children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: Value,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Create a new leaf node
    pub fn new(value: Value) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node> {
        self.right.as_deref_mut()
    }

    pub fn child(&self, side: Side) -> Option<&Node> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub fn child_mut(&mut self, side: Side) -> Option<&mut Node> {
        self.slot_mut(side).as_deref_mut()
    }

    /// The owning slot for the `side` child
    pub(crate) fn slot_mut(&mut self, side: Side) -> &mut Option<Box<Node>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Return true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Attach a new leaf holding `value` in the `side` slot and return it.
    ///
    /// Fails with [`TreeError::ChildSlotOccupied`] if the slot is already taken,
    /// leaving this node untouched. A node does not know where it sits in its
    /// tree, so the error carries no parent path. Use [`crate::Tree::add_child`]
    /// to have the path reported.
    pub fn add_child(&mut self, side: Side, value: Value) -> TreeResult<&mut Node> {
        self.attach(side, value).ok_or_else(|| {
            warn!("{} child already exists, not adding {}", side, value);
            TreeError::ChildSlotOccupied { side, parent: None }
        })
    }

    pub fn add_left(&mut self, value: Value) -> TreeResult<&mut Node> {
        self.add_child(Side::Left, value)
    }

    pub fn add_right(&mut self, value: Value) -> TreeResult<&mut Node> {
        self.add_child(Side::Right, value)
    }

    /// Fill an empty slot, or None if it is occupied
    pub(crate) fn attach(&mut self, side: Side, value: Value) -> Option<&mut Node> {
        let slot = self.slot_mut(side);
        if slot.is_some() {
            return None;
        }
        Some(&mut **slot.insert(Box::new(Node::new(value))))
    }

    /// Follow `steps` down from this node
    pub fn descend(&self, steps: &[Side]) -> Option<&Node> {
        steps
            .iter()
            .try_fold(self, |node, side| node.child(*side))
    }

    pub fn descend_mut(&mut self, steps: &[Side]) -> Option<&mut Node> {
        steps
            .iter()
            .try_fold(self, |node, side| node.child_mut(*side))
    }

    /// Take both children out of this node, leaving it a leaf
    pub(crate) fn take_children(&mut self) -> (Option<Box<Node>>, Option<Box<Node>>) {
        (self.left.take(), self.right.take())
    }

    pub(crate) fn set_children(&mut self, left: Option<Box<Node>>, right: Option<Box<Node>>) {
        self.left = left;
        self.right = right;
    }

    /// Number of nodes in this subtree, including this node
    pub fn len(&self) -> usize {
        1 + self.left().map_or(0, Node::len) + self.right().map_or(0, Node::len)
    }

    /// Number of levels in this subtree. A leaf has height 1.
    pub fn height(&self) -> usize {
        1 + self
            .left()
            .map_or(0, Node::height)
            .max(self.right().map_or(0, Node::height))
    }

    /// Number of leaf nodes in this subtree
    pub fn count_leaves(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.left().map_or(0, Node::count_leaves) + self.right().map_or(0, Node::count_leaves)
    }
}

/// Release the subtree with an explicit stack, so dropping a deep tree cannot
/// overflow the call stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
