use thiserror::Error;

use crate::{NodePath, Side};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The requested child slot already holds a node. The tree is unchanged.
    ///
    /// `parent` is the root relative path of the node when it is known. It is
    /// None when the child was added through a borrowed [`crate::Node`].
    #[error(
        "{side} child already exists{}",
        .parent.as_ref().map(|p| format!(" at {p}")).unwrap_or_default()
    )]
    ChildSlotOccupied {
        side: Side,
        parent: Option<NodePath>,
    },

    /// The path does not lead to a node in this tree. The tree is unchanged.
    #[error("No node at {0}")]
    InvalidReference(NodePath),
}

pub type TreeResult<T> = Result<T, TreeError>;
