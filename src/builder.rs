//! Builders for constructing trees from nested closures.
//!
//! `TreeBuilder` creates the root and hands a `NodeBuilder` to a closure, which
//! attaches left and right children, each with their own closure.
//!

use std::marker::PhantomData;

use tracing::{debug, debug_span, warn};

use crate::{Node, NodePath, Side, Tree, TreeError, Value};

/// A builder for attaching children to a single node.
///
/// Created by [`TreeBuilder::root`] and by each child call, never directly.
pub struct NodeBuilder<'a, E> {
    node: &'a mut Node,
    path: NodePath,
    _phantom: PhantomData<E>,
}

impl<'a, E> NodeBuilder<'a, E>
where
    E: From<TreeError>,
{
    fn new(node: &'a mut Node, path: NodePath) -> Self {
        Self {
            node,
            path,
            _phantom: PhantomData,
        }
    }

    /// Adds a child in the `side` slot of the current node.
    ///
    /// # Arguments
    ///
    /// * `side`: Which slot to fill. Fails with [`TreeError::ChildSlotOccupied`] if it is taken.
    /// * `value`: The value of the new child.
    /// * `f`: A closure that takes the child builder and adds its own children.
    pub fn child<F>(&mut self, side: Side, value: Value, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        let path = self.path.child(side);

        let Some(child) = self.node.attach(side, value) else {
            warn!("{} child already exists at {}", side, self.path);
            return Err(TreeError::ChildSlotOccupied {
                side,
                parent: Some(self.path.clone()),
            }
            .into());
        };

        debug!("Added {} at {}", value, path);

        // Call the supplied closure with the NodeBuilder to add this node's children
        let mut node_builder = NodeBuilder::new(child, path);
        f(&mut node_builder)
    }

    pub fn left<F>(&mut self, value: Value, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        self.child(Side::Left, value, f)
    }

    pub fn right<F>(&mut self, value: Value, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        self.child(Side::Right, value, f)
    }

    pub fn node(&self) -> &Node {
        &*self.node
    }

    /// Path of the node being built, relative to the root
    pub fn path(&self) -> &NodePath {
        &self.path
    }
}

/// A builder for constructing trees.
///
/// The closures return `Result<(), E>` where `E` is your error type, which must
/// be constructible from [`TreeError`]. Errors from your closures propagate out
/// of [`TreeBuilder::root`], and the partially built tree is dropped.
///
/// # Examples
///
/// ```
/// use prunetree::{TreeBuilder, TreeError};
///
/// let tree = TreeBuilder::<TreeError>::new()
///     .root(2, |root| {
///         root.left(1, |_| Ok(()))?;
///         root.right(3, |_| Ok(()))
///     })
///     .unwrap()
///     .done();
///
/// assert_eq!(tree.in_order(), vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct TreeBuilder<E = TreeError> {
    root: Option<Node>,
    debug_span: tracing::Span,
    _phantom: PhantomData<E>,
}

impl<E> Default for TreeBuilder<E>
where
    E: From<TreeError>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TreeBuilder<E>
where
    E: From<TreeError>,
{
    /// Creates a new `TreeBuilder` instance.
    pub fn new() -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            root: None,
            debug_span,
            _phantom: PhantomData,
        }
    }

    /// Sets the root node and returns the updated builder. A root set by an
    /// earlier call is replaced.
    ///
    /// # Arguments
    ///
    /// * `value`: The value of the root node.
    /// * `f`: A closure that takes the root builder and adds its children.
    pub fn root<F>(mut self, value: Value, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        let span = self.debug_span.clone();
        let _enter = span.enter();

        let mut node = Node::new(value);
        let mut node_builder = NodeBuilder::new(&mut node, NodePath::root());

        f(&mut node_builder)?;

        if self.root.replace(node).is_some() {
            debug!("Replaced root");
        } else {
            debug!("Added root");
        }

        Ok(self)
    }

    /// Returns the constructed tree, empty if no root was set.
    pub fn done(self) -> Tree {
        self.debug_span.in_scope(|| {
            debug!("Finished building tree");
            self.root.map(Tree::from_node).unwrap_or_default()
        })
    }
}
