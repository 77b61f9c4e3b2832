use std::fmt::Write;

use crate::{Node, Side, Tree};

pub struct TreeDisplay;

impl TreeDisplay {
    /// Render the subtree at `root` as an outline, one node per line, each
    /// child tagged with the slot it occupies.
    pub fn format(root: &Node, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if root.is_leaf() {
            f.write_char('━')?;
        } else {
            f.write_char('┏')?;
        }
        write!(f, "{}", root.value())?;

        // (prefix, side, node, is last child of its parent)
        let mut stack: Vec<(String, Side, &Node, bool)> = Vec::new();
        Self::push_children(&mut stack, "", root);

        while let Some((prefix, side, node, last)) = stack.pop() {
            f.write_char('\n')?;
            f.write_str(&prefix)?;
            f.write_char(if last { '┗' } else { '┣' })?;
            write!(f, "{} {}", side.tag(), node.value())?;

            let child_prefix = format!("{}{}", prefix, if last { "  " } else { "┃ " });
            Self::push_children(&mut stack, &child_prefix, node);
        }

        Ok(())
    }

    fn push_children<'a>(
        stack: &mut Vec<(String, Side, &'a Node, bool)>,
        prefix: &str,
        node: &'a Node,
    ) {
        // Pushed in reverse so the left child is popped first
        match (node.left(), node.right()) {
            (Some(left), Some(right)) => {
                stack.push((prefix.to_string(), Side::Right, right, true));
                stack.push((prefix.to_string(), Side::Left, left, false));
            }
            (Some(left), None) => stack.push((prefix.to_string(), Side::Left, left, true)),
            (None, Some(right)) => stack.push((prefix.to_string(), Side::Right, right, true)),
            (None, None) => {}
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self, f)
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.root() {
            Some(root) => TreeDisplay::format(root, f),
            None => f.write_str("(empty)"),
        }
    }
}
