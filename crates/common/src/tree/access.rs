use std::sync::Arc;

use crate::crypto::{Capability, CapabilityError, EngineSecret};

use super::engine::Engine;
use super::node::Node;
use super::storage::Storage;

/// Entry point into a tree for the side holding the server secret
///
/// Any well-formed capability looks up to a node. Whether anything is stored
/// at that node's location is up to the storage backend.
#[derive(Debug, Clone)]
pub struct Server {
    engine: Arc<Engine>,
}

impl Server {
    pub fn new(
        server_secret: impl Into<EngineSecret>,
        cloud_secret: impl Into<EngineSecret>,
    ) -> Self {
        Self {
            engine: Arc::new(Engine::new(server_secret, cloud_secret)),
        }
    }

    /// A server whose storage locations are not shared with any client
    pub fn without_cloud_secret(server_secret: impl Into<EngineSecret>) -> Self {
        Self::new(server_secret, EngineSecret::empty())
    }

    /// Get any node by one of its capabilities
    pub fn lookup(&self, capability: &str) -> Result<Node, CapabilityError> {
        let capability = Capability::parse(capability)?;
        Ok(self.lookup_capability(&capability))
    }

    pub fn lookup_capability(&self, capability: &Capability) -> Node {
        Node::expand(self.engine.clone(), capability)
    }
}

/// Entry point into a tree for clients
///
/// A client only knows the cloud secret. It can do everything that does not
/// need the server secret (attenuation and storage lookups) and so take that
/// work off the server.
#[derive(Debug, Clone)]
pub struct Client {
    engine: Arc<Engine>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(EngineSecret::empty())
    }
}

impl Client {
    pub fn new(cloud_secret: impl Into<EngineSecret>) -> Self {
        Self {
            engine: Arc::new(Engine::client(cloud_secret)),
        }
    }

    /// Get any node by one of its capabilities
    pub fn lookup(&self, capability: &str) -> Result<Node, CapabilityError> {
        let capability = Capability::parse(capability)?;
        Ok(Node::expand(self.engine.clone(), &capability))
    }

    /// Get the read-only node belonging with a capability
    pub fn attenuate(&self, capability: &str) -> Result<Node, CapabilityError> {
        Ok(self.lookup(capability)?.attenuate())
    }

    /// Get the storage location and key of the node designated by a capability
    pub fn storage(&self, capability: &str) -> Result<Storage, CapabilityError> {
        Ok(self.lookup(capability)?.storage())
    }
}
