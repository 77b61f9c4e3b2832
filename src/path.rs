/// One of the two child slots of a [`crate::Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Single letter tag used when rendering paths and trees
    pub fn tag(&self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("Left"),
            Side::Right => f.write_str("Right"),
        }
    }
}

/// Location of a node, as the sequence of child slots taken from the root.
///
/// The empty path is the root. Paths are plain values and hold no borrow on the
/// tree, so they may stop resolving after the tree is restructured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath {
    steps: Vec<Side>,
}

impl NodePath {
    /// Path naming the root node
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: impl IntoIterator<Item = Side>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    pub fn steps(&self) -> &[Side] {
        &self.steps
    }

    /// Number of edges between the root and the named node
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Path of the `side` child of this node
    pub fn child(&self, side: Side) -> Self {
        let mut steps = self.steps.clone();
        steps.push(side);
        Self { steps }
    }

    pub fn left(&self) -> Self {
        self.child(Side::Left)
    }

    pub fn right(&self) -> Self {
        self.child(Side::Right)
    }

    /// Path of the parent node, or None for the root
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.steps.split_last()?;
        Some(Self {
            steps: rest.to_vec(),
        })
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("root")?;
        for step in &self.steps {
            write!(f, "/{}", step.tag())?;
        }
        Ok(())
    }
}
