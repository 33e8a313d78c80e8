use data_encoding::BASE32_NOPAD;
use zeroize::Zeroizing;

use crate::crypto::{
    attenuate_key, hmac_sha256, Access, Capability, CapabilityError, EngineSecret, Secret,
};

/// Lengths of the first two location segments; the third takes the rest
const LOCATION_SEGMENTS: (usize, usize) = (3, 3);

/**
 * Engine
 * ======
 * The engine holds the two secrets of a deployment and implements the two
 *  derivations everything else is built on:
 *  - expand: capability -> (rw cap, ro cap, location, storage key)
 *  - derive_child: (parent storage key, name) -> child capability
 * Both are pure functions of their inputs and the engine secrets, so an
 *  engine can be shared between threads freely.
 * Both MACs are keyed by the secret or the name and take the capability or
 *  parent key as message. Trees laid out by implementations that swap key
 *  and message get different locations and children.
 */
#[derive(Debug)]
pub struct Engine {
    // Never handed to clients. Provisioned for the server side but not
    //  mixed into any derivation output (see derive_child).
    server_secret: EngineSecret,
    // Shared with trusted clients, mixed into storage locations only.
    cloud_secret: EngineSecret,
}

/// Everything a single capability expands to
#[derive(Debug, Clone)]
pub struct NodeCaps {
    /// Present only when expanded from a read/write capability
    pub rw_cap: Option<Capability>,
    pub ro_cap: Capability,
    /// Obfuscated `XXX/XXX/XXXX...` path of the node's serialized content
    pub location: String,
    /// Key for the node's serialized content, and the parent key of its
    ///  children
    pub storage_key: Secret,
}

impl Engine {
    pub fn new(
        server_secret: impl Into<EngineSecret>,
        cloud_secret: impl Into<EngineSecret>,
    ) -> Self {
        Self {
            server_secret: server_secret.into(),
            cloud_secret: cloud_secret.into(),
        }
    }

    /// An engine without a server secret, as used by clients
    pub fn client(cloud_secret: impl Into<EngineSecret>) -> Self {
        Self::new(EngineSecret::empty(), cloud_secret)
    }

    pub fn has_server_secret(&self) -> bool {
        !self.server_secret.is_empty()
    }

    /// Parse a capability and expand it
    ///
    /// # Errors
    ///
    /// Returns a [`CapabilityError`] if the text is not a well-formed capability.
    pub fn expand(&self, capability: &str) -> Result<NodeCaps, CapabilityError> {
        let capability = Capability::parse(capability)?;
        Ok(self.expand_capability(&capability))
    }

    /// Expand an already parsed capability
    pub fn expand_capability(&self, capability: &Capability) -> NodeCaps {
        let (rw_cap, ro_cap) = match capability.access() {
            Access::ReadOnly => (None, capability.clone()),
            Access::ReadWrite => (Some(capability.clone()), capability.attenuate()),
        };
        // the read-only payload is used directly as the storage key
        let storage_key = ro_cap.key().clone();
        let location = self.location(&ro_cap);

        tracing::trace!(
            location = %location,
            read_only = rw_cap.is_none(),
            "expanded capability"
        );

        NodeCaps {
            rw_cap,
            ro_cap,
            location,
            storage_key,
        }
    }

    /// Derive the capability of the child called `name` under a parent
    ///
    /// The child name keys the MAC and the parent storage key is the message.
    /// When `attenuated` is set the child capability is read-only.
    ///
    /// Only the parent storage key and the name go into the result. The server
    /// secret does not, so clients and servers derive identical children.
    pub fn derive_child(
        &self,
        parent_storage_key: &Secret,
        name: &str,
        attenuated: bool,
    ) -> Capability {
        let child_key = hmac_sha256(name.as_bytes(), parent_storage_key.bytes());

        tracing::trace!(attenuated, "derived child capability");

        if attenuated {
            Capability::new(Access::ReadOnly, attenuate_key(&child_key))
        } else {
            Capability::new(Access::ReadWrite, child_key)
        }
    }

    fn location(&self, ro_cap: &Capability) -> String {
        let ro_text = Zeroizing::new(ro_cap.to_string());
        let location_key = hmac_sha256(self.cloud_secret.bytes(), ro_text.as_bytes());
        let encoded = BASE32_NOPAD.encode(location_key.bytes());

        let (first, second) = LOCATION_SEGMENTS;
        format!(
            "{}/{}/{}",
            &encoded[..first],
            &encoded[first..first + second],
            &encoded[first + second..]
        )
    }
}
