use std::hash::Hasher as _;

use xxhash_rust::xxh64::Xxh64;

use crate::{Node, Tree};

// Stream markers, so that shape as well as values feeds the hash
const NODE: u8 = 1;
const EMPTY: u8 = 0;

fn hash_slot(node: Option<&Node>, hasher: &mut Xxh64) {
    let Some(node) = node else {
        hasher.write_u8(EMPTY);
        return;
    };
    hasher.write_u8(NODE);
    hasher.write_i32(node.value());
    hash_slot(node.left(), hasher);
    hash_slot(node.right(), hasher);
}

impl Node {
    /// Structural fingerprint of this subtree.
    ///
    /// Two subtrees with the same shape and values hash the same. Moving a
    /// child from the left slot to the right changes the hash.
    pub fn xxhash(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        hash_slot(Some(self), &mut hasher);
        hasher.finish()
    }
}

impl Tree {
    /// Structural fingerprint of the whole tree. See [`Node::xxhash`].
    pub fn xxhash(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        hash_slot(self.root(), &mut hasher);
        hasher.finish()
    }
}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.xxhash())
    }
}

impl std::hash::Hash for Tree {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.xxhash())
    }
}
