use std::collections::VecDeque;

use crate::{Node, Tree, Value};

/// Order in which a traversal visits nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, left, right
    PreOrder,
    /// Left, node, right
    InOrder,
    /// Left, right, node
    PostOrder,
    /// Breadth first, by depth then left to right
    LevelOrder,
}

impl Order {
    pub fn label(&self) -> &'static str {
        match self {
            Order::PreOrder => "Preorder",
            Order::InOrder => "Inorder",
            Order::PostOrder => "Postorder",
            Order::LevelOrder => "BFS",
        }
    }
}

/// Values collected by a traversal.
///
/// Displays as a single line, `Inorder traversal: 5 10 15`. A breadth first
/// traversal of an empty tree displays as nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    order: Order,
    values: Vec<Value>,
}

impl Traversal {
    pub fn order(&self) -> Order {
        self.order
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.order == Order::LevelOrder && self.values.is_empty() {
            return Ok(());
        }
        write!(f, "{} traversal:", self.order.label())?;
        for value in &self.values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

fn pre_order(node: Option<&Node>, out: &mut Vec<Value>) {
    let Some(node) = node else { return };
    out.push(node.value());
    pre_order(node.left(), out);
    pre_order(node.right(), out);
}

fn in_order(node: Option<&Node>, out: &mut Vec<Value>) {
    let Some(node) = node else { return };
    in_order(node.left(), out);
    out.push(node.value());
    in_order(node.right(), out);
}

fn post_order(node: Option<&Node>, out: &mut Vec<Value>) {
    let Some(node) = node else { return };
    post_order(node.left(), out);
    post_order(node.right(), out);
    out.push(node.value());
}

fn level_order(root: Option<&Node>, out: &mut Vec<Value>) {
    let mut queue: VecDeque<&Node> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        out.push(node.value());
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

impl Tree {
    /// Collect the values of every node in the given order
    pub fn traverse(&self, order: Order) -> Traversal {
        let mut values = Vec::with_capacity(self.len());
        match order {
            Order::PreOrder => pre_order(self.root(), &mut values),
            Order::InOrder => in_order(self.root(), &mut values),
            Order::PostOrder => post_order(self.root(), &mut values),
            Order::LevelOrder => level_order(self.root(), &mut values),
        }
        Traversal { order, values }
    }

    pub fn pre_order(&self) -> Vec<Value> {
        self.traverse(Order::PreOrder).into_values()
    }

    pub fn in_order(&self) -> Vec<Value> {
        self.traverse(Order::InOrder).into_values()
    }

    pub fn post_order(&self) -> Vec<Value> {
        self.traverse(Order::PostOrder).into_values()
    }

    /// Breadth first traversal
    pub fn bfs(&self) -> Vec<Value> {
        self.traverse(Order::LevelOrder).into_values()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::test::{arb_tree, depths, increasing_chain, sample_tree};
    use crate::NodePath;

    #[test]
    fn test_sample_orders() {
        let tree = sample_tree();
        assert_eq!(tree.pre_order(), vec![20, 10, 5, 15, 30, 25, 35]);
        assert_eq!(tree.in_order(), vec![5, 10, 15, 20, 25, 30, 35]);
        assert_eq!(tree.post_order(), vec![5, 15, 10, 25, 35, 30, 20]);
        assert_eq!(tree.bfs(), vec![20, 10, 30, 5, 15, 25, 35]);
    }

    #[test]
    fn test_empty() {
        let tree = Tree::new();
        for order in [
            Order::PreOrder,
            Order::InOrder,
            Order::PostOrder,
            Order::LevelOrder,
        ] {
            assert!(tree.traverse(order).values().is_empty());
        }
    }

    #[test]
    fn test_repeatable() {
        let tree = sample_tree();
        assert_eq!(tree.in_order(), tree.in_order());
        assert_eq!(tree.bfs(), tree.bfs());
    }

    #[test]
    fn test_display() {
        let tree = sample_tree();
        assert_eq!(
            tree.traverse(Order::InOrder).to_string(),
            "Inorder traversal: 5 10 15 20 25 30 35"
        );
        assert_eq!(
            tree.traverse(Order::LevelOrder).to_string(),
            "BFS traversal: 20 10 30 5 15 25 35"
        );
        assert_eq!(
            Tree::new().traverse(Order::PreOrder).to_string(),
            "Preorder traversal:"
        );
    }

    #[test]
    fn test_display_empty_bfs() {
        let traversal = Tree::new().traverse(Order::LevelOrder);
        assert_eq!(traversal.order(), Order::LevelOrder);
        assert_eq!(traversal.to_string(), "");

        let traversal = sample_tree().traverse(Order::PostOrder);
        assert_eq!(traversal.order(), Order::PostOrder);
        assert_eq!(traversal.order().label(), "Postorder");
    }

    #[test]
    fn test_bfs_parent_order() {
        // 4 hangs off 2 and 5 off 3, so 4 is emitted first at depth 2.
        let mut tree = Tree::new();
        tree.set_root(1);
        let left = tree.add_left_child(&NodePath::root(), 2).unwrap();
        let right = tree.add_right_child(&NodePath::root(), 3).unwrap();
        tree.add_right_child(&left, 4).unwrap();
        tree.add_left_child(&right, 5).unwrap();
        tree.add_left_child(&left.right(), 6).unwrap();

        assert_eq!(tree.bfs(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_increasing_chain_in_order() {
        let tree = increasing_chain(10);
        assert_eq!(tree.in_order(), (0..10).collect::<Vec<_>>());
    }

    fn relabel_in_order(node: &mut Node, next: &mut Value) {
        if let Some(left) = node.left_mut() {
            relabel_in_order(left, next);
        }
        node.set_value(*next);
        *next += 1;
        if let Some(right) = node.right_mut() {
            relabel_in_order(right, next);
        }
    }

    proptest! {
        #[test]
        fn prop_bfs_by_depth(tree in arb_tree()) {
            let levels = depths(&tree);
            prop_assert!(levels.windows(2).all(|w| w[0].0 <= w[1].0));
            prop_assert_eq!(
                tree.bfs(),
                levels.into_iter().map(|(_, v)| v).collect::<Vec<_>>()
            );
        }

        #[test]
        fn prop_orders_visit_every_node(tree in arb_tree()) {
            let mut expected = tree.pre_order();
            expected.sort_unstable();
            for order in [Order::InOrder, Order::PostOrder, Order::LevelOrder] {
                let mut values = tree.traverse(order).into_values();
                values.sort_unstable();
                prop_assert_eq!(&values, &expected);
            }
            prop_assert_eq!(expected.len(), tree.len());
        }

        #[test]
        fn prop_in_order_follows_labels(tree in arb_tree()) {
            let mut tree = tree;
            let mut next = 0;
            if let Some(root) = tree.root_mut() {
                relabel_in_order(root, &mut next);
            }
            prop_assert_eq!(tree.in_order(), (0..next).collect::<Vec<_>>());
        }

        #[test]
        fn prop_leaf_count(tree in arb_tree()) {
            prop_assert_eq!(tree.count_leaves(), count_childless(tree.root()));
            prop_assert!(tree.count_leaves() >= 1);
        }
    }

    fn count_childless(node: Option<&Node>) -> usize {
        let mut stack: Vec<&Node> = node.into_iter().collect();
        let mut count = 0;
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                count += 1;
            }
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }
}
