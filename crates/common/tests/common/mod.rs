//! Shared test utilities for tree integration tests
#![allow(dead_code)]

use common::crypto::password_root_capability;
use common::testkit::{TestTree, KNOCK_KNOCK_PASSWORD};
use common::tree::Node;

/// Names used wherever a test needs a handful of distinct children
pub const NAMES: [&str; 5] = ["Alice", "Bob", "Carol", "dave", "Dave"];

/// Set up a tree with an empty cloud secret and return it with its
///  password-derived root node
pub fn setup_test_tree() -> (TestTree, Node) {
    let tree = TestTree::new();
    let root = tree
        .server
        .lookup_capability(&password_root_capability(KNOCK_KNOCK_PASSWORD));
    (tree, root)
}

/// Set up a tree with a random root
pub fn setup_random_tree() -> (TestTree, Node) {
    let tree = TestTree::new();
    let root = common::crypto::random_root_capability().unwrap();
    let root = tree.server.lookup_capability(&root);
    (tree, root)
}
