use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::crypto::{Capability, Secret};

use super::engine::{Engine, NodeCaps};
use super::storage::Storage;

/**
 * Nodes
 * =====
 * A node is one position in a tree, as seen through one capability.
 *  Nodes are plain immutable values; the only difference between a
 *  read/write node and a read-only node is whether `rw_cap` is present.
 * From a node you can only move in two directions, and neither can be
 *  reversed:
 *  - attenuate: read/write -> read-only, same position
 *  - decompose: parent -> named child, same access level
 * There is no way back up to a parent, and no way from a read-only
 *  capability to a read/write one.
 */
#[derive(Clone)]
pub struct Node {
    engine: Arc<Engine>,
    rw_cap: Option<Capability>,
    ro_cap: Capability,
    location: String,
    storage_key: Secret,
}

impl Node {
    pub(crate) fn new(engine: Arc<Engine>, caps: NodeCaps) -> Self {
        let NodeCaps {
            rw_cap,
            ro_cap,
            location,
            storage_key,
        } = caps;
        Self {
            engine,
            rw_cap,
            ro_cap,
            location,
            storage_key,
        }
    }

    pub(crate) fn expand(engine: Arc<Engine>, capability: &Capability) -> Self {
        let caps = engine.expand_capability(capability);
        Self::new(engine, caps)
    }

    /// Get the node for the entity called `name` one level down
    ///
    /// The child inherits this node's access level: children of a read-only
    /// node are always read-only.
    pub fn decompose(&self, name: &str) -> Node {
        let child = self
            .engine
            .derive_child(&self.storage_key, name, self.is_read_only());
        Node::expand(self.engine.clone(), &child)
    }

    /// Decompose along every segment of a `/`-separated path
    ///
    /// Empty segments are skipped, so `"a/b"`, `"/a/b"` and `"a//b/"` all name
    /// the same node. The empty path names this node.
    pub fn descend(&self, path: &str) -> Node {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.clone(), |node, segment| node.decompose(segment))
    }

    /// Get the read-only view of this node
    pub fn attenuate(&self) -> Node {
        Node::expand(self.engine.clone(), &self.ro_cap)
    }

    /// The read/write capability if this node has one, the read-only one
    /// otherwise
    pub fn least_attenuated_capability(&self) -> &Capability {
        self.rw_cap.as_ref().unwrap_or(&self.ro_cap)
    }

    pub fn rw_cap(&self) -> Option<&Capability> {
        self.rw_cap.as_ref()
    }

    pub fn ro_cap(&self) -> &Capability {
        &self.ro_cap
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_read_only(&self) -> bool {
        self.rw_cap.is_none()
    }

    /// Storage location and encryption key of this node's serialization
    pub fn storage(&self) -> Storage {
        Storage::new(self.location.clone(), self.storage_key.clone())
    }
}

// Identity is the read-only capability: a read/write node and its
//  attenuated view designate the same position.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ro_cap == other.ro_cap
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ro_cap.hash(state);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("location", &self.location)
            .field("read_only", &self.is_read_only())
            .finish_non_exhaustive()
    }
}
