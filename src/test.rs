use proptest::prelude::*;

use crate::{Node, NodePath, Side, Tree, TreeBuilder, TreeError, Value};

/// The 7 node tree
///
/// ```text
///         20
///       /    \
///     10      30
///    /  \    /  \
///   5   15  25   35
/// ```
pub fn sample_tree() -> Tree {
    TreeBuilder::<TreeError>::new()
        .root(20, |root| {
            root.left(10, |n| {
                n.left(5, |_| Ok(()))?;
                n.right(15, |_| Ok(()))
            })?;
            root.right(30, |n| {
                n.left(25, |_| Ok(()))?;
                n.right(35, |_| Ok(()))
            })
        })
        .unwrap()
        .done()
}

/// A right leaning chain holding `0..len`
pub fn increasing_chain(len: Value) -> Tree {
    let mut tree = Tree::new();
    if len <= 0 {
        return tree;
    }

    let mut path = NodePath::root();
    tree.set_root(0);
    for value in 1..len {
        path = tree.add_right_child(&path, value).unwrap();
    }
    tree
}

/// Build a tree by walking down from the root for each entry, taking the left
/// slot on `false` and the right on `true`, and attaching the value at the
/// first empty slot reached.
pub fn tree_from_walks(root: Value, walks: &[(Vec<bool>, Value)]) -> Tree {
    let mut tree = Tree::new();
    tree.set_root(root);

    for (walk, value) in walks {
        let mut path = NodePath::root();
        for step in walk.iter().chain(std::iter::repeat(&false)) {
            let side = if *step { Side::Right } else { Side::Left };
            let occupied = tree.get(&path).and_then(|node| node.child(side)).is_some();
            if !occupied {
                tree.add_child(&path, side, *value).unwrap();
                break;
            }
            path = path.child(side);
        }
    }

    tree
}

/// Every node paired with its depth, in breadth first order
pub fn depths(tree: &Tree) -> Vec<(usize, Value)> {
    let mut out = Vec::new();
    let mut queue: std::collections::VecDeque<(usize, &Node)> =
        tree.root().map(|root| (0, root)).into_iter().collect();
    while let Some((depth, node)) = queue.pop_front() {
        out.push((depth, node.value()));
        queue.extend(node.left().map(|child| (depth + 1, child)));
        queue.extend(node.right().map(|child| (depth + 1, child)));
    }
    out
}

/// Arbitrary non-empty trees of up to ~64 nodes
pub fn arb_tree() -> impl Strategy<Value = Tree> {
    (
        -100..100i32,
        prop::collection::vec(
            (prop::collection::vec(any::<bool>(), 0..8), -100..100i32),
            0..64,
        ),
    )
        .prop_map(|(root, walks)| tree_from_walks(root, &walks))
}
