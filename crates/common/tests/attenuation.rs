//! Integration tests for attenuation

mod common;

use ::common::crypto::Access;
use ::common::testkit;

#[test]
fn test_attenuate_is_idempotent() {
    let (_tree, root) = common::setup_random_tree();

    let once = root.attenuate();
    let twice = once.attenuate();

    assert_eq!(once, twice);
    assert_eq!(
        once.least_attenuated_capability(),
        twice.least_attenuated_capability()
    );
    assert!(once.rw_cap().is_none());
    assert!(twice.rw_cap().is_none());
}

#[test]
fn test_expand_yields_same_ro_cap() {
    let (tree, root) = common::setup_random_tree();
    let rw = root.least_attenuated_capability().to_string();

    let again = tree.server.lookup(&rw).unwrap();
    let from_client = tree.client.lookup(&rw).unwrap();

    assert_eq!(again.ro_cap(), root.ro_cap());
    assert_eq!(from_client.ro_cap(), root.ro_cap());
}

#[test]
fn test_read_only_never_yields_rw_cap() {
    let (tree, root) = common::setup_random_tree();
    let ro = root.ro_cap().to_string();

    let node = tree.server.lookup(&ro).unwrap();
    assert!(node.is_read_only());
    assert!(node.rw_cap().is_none());
    assert!(node.attenuate().rw_cap().is_none());
    assert_eq!(node.least_attenuated_capability().access(), Access::ReadOnly);

    for name in common::NAMES {
        let child = node.decompose(name);
        assert!(child.rw_cap().is_none());
        assert!(child.attenuate().rw_cap().is_none());
    }

    assert!(tree.client.attenuate(&ro).unwrap().rw_cap().is_none());
}

#[test]
fn test_read_only_lookup_keeps_storage() {
    let (tree, root) = common::setup_test_tree();

    let ro = tree.server.lookup(testkit::KNOCK_KNOCK_RO).unwrap();
    assert_eq!(ro.storage(), root.storage());
    assert_eq!(ro.location(), testkit::KNOCK_KNOCK_LOCATION);
}

#[test]
fn test_equality_ignores_write_access() {
    let (_tree, root) = common::setup_random_tree();
    let ro = root.attenuate();

    assert!(!root.is_read_only());
    assert!(ro.is_read_only());
    assert_eq!(root, ro);
    assert_ne!(
        root.least_attenuated_capability(),
        ro.least_attenuated_capability()
    );
}
