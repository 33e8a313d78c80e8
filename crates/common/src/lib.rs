/**
 * Cryptographic types and operations.
 *  - Sparse capability text codec
 *  - Key material, wiped on drop
 *  - Root capability and server secret generation
 */
pub mod crypto;
/**
 * Fixtures and a small harness for exercising
 *  trees in tests.
 */
pub mod testkit;
/**
 * The derivation engine and the node abstraction
 *  built on top of it: attenuation, decomposition
 *  and storage designation.
 */
pub mod tree;

pub mod prelude {
    pub use crate::crypto::{
        password_root_capability, random_root_capability, random_server_secret, Access,
        Capability, CapabilityError, EngineSecret, Secret,
    };
    pub use crate::tree::{Client, Node, Server, Storage};
}
