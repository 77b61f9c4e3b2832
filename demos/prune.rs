//! Build the 7 node sample tree, prune everything above 25 and print the
//! tree before and after.
//!
//! Run with `RUST_LOG=prunetree=trace` to see each released node.

use prunetree::{NodePath, Order, Tree, TreeError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = Tree::new();
    tree.set_root(20);

    let root = NodePath::root();
    let left = tree.add_left_child(&root, 10)?;
    let right = tree.add_right_child(&root, 30)?;

    tree.add_left_child(&left, 5)?;
    tree.add_right_child(&left, 15)?;

    tree.add_left_child(&right, 25)?;
    tree.add_right_child(&right, 35)?;

    println!("Original tree:\n{}\n", tree);
    println!("{}", tree.traverse(Order::InOrder));

    let max = 25;
    println!("\nRemoving nodes greater than {}...", max);
    let released = tree.remove_greater_than(max);
    println!("Released {} nodes", released);

    println!("{}", tree.traverse(Order::InOrder));
    println!("\nModified tree:\n{}", tree);

    Ok(())
}
