//! Integration tests for sharing trees across threads

mod common;

use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_decomposition() {
    let (_tree, root) = common::setup_random_tree();
    let root = Arc::new(root);

    let expected: Vec<_> = common::NAMES
        .iter()
        .map(|name| root.descend(&format!("{}/inner", name)))
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let root = root.clone();
            thread::spawn(move || {
                common::NAMES
                    .iter()
                    .map(|name| root.descend(&format!("{}/inner", name)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let got = handle.join().unwrap();
        assert_eq!(got, expected);
    }
}

#[test]
fn test_server_is_shareable() {
    let (tree, root) = common::setup_random_tree();
    let cap = root.least_attenuated_capability().to_string();
    let server = tree.server.clone();

    let handle = thread::spawn(move || server.lookup(&cap).unwrap().attenuate());
    assert_eq!(handle.join().unwrap(), root);
}
