use tracing::{debug, warn};

use crate::{Node, NodePath, Side, TreeError, TreeResult, Value};

/// An exclusively owned binary tree. Values are placed where the caller puts
/// them, there is no ordering invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree from an existing root node
    pub fn from_node(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Replace the root with a new leaf holding `value`. Any previous tree is dropped.
    pub fn set_root(&mut self, value: Value) -> &mut Node {
        if let Some(old) = &self.root {
            debug!(
                "Replacing root {} and discarding {} nodes",
                old.value(),
                old.len()
            );
        }
        self.root.insert(Box::new(Node::new(value)))
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }

    pub(crate) fn take_root(&mut self) -> Option<Box<Node>> {
        self.root.take()
    }

    pub(crate) fn replace_root(&mut self, root: Option<Box<Node>>) {
        self.root = root;
    }

    /// Resolve a path to a node
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        self.root()?.descend(path.steps())
    }

    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        self.root_mut()?.descend_mut(path.steps())
    }

    /// Attach a new leaf holding `value` as the `side` child of the node at `parent`.
    ///
    /// Returns the path of the new node. The tree is unchanged on error.
    pub fn add_child(&mut self, parent: &NodePath, side: Side, value: Value) -> TreeResult<NodePath> {
        let Some(node) = self.get_mut(parent) else {
            warn!("Cannot add {} child {}, no node at {}", side, value, parent);
            return Err(TreeError::InvalidReference(parent.clone()));
        };

        if node.attach(side, value).is_none() {
            warn!("{} child already exists at {}", side, parent);
            return Err(TreeError::ChildSlotOccupied {
                side,
                parent: Some(parent.clone()),
            });
        }

        Ok(parent.child(side))
    }

    pub fn add_left_child(&mut self, parent: &NodePath, value: Value) -> TreeResult<NodePath> {
        self.add_child(parent, Side::Left, value)
    }

    pub fn add_right_child(&mut self, parent: &NodePath, value: Value) -> TreeResult<NodePath> {
        self.add_child(parent, Side::Right, value)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// Number of levels, 0 for an empty tree
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Number of nodes without children
    pub fn count_leaves(&self) -> usize {
        self.root().map_or(0, Node::count_leaves)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self::from_node(root)
    }
}
