//! Rumpelstiltskin trees
//!
//! A tree is a set of nodes reachable from a root capability. Each node is
//! designated by up to two capabilities (read/write and read-only) and has a
//! storage designation (obfuscated location plus encryption key).
//!
//! - [`Engine`]: the two derivations, over the server and cloud secrets
//! - [`Node`]: one position in the tree; attenuation and decomposition
//! - [`Storage`]: location and key of a node's serialization
//! - [`Server`] / [`Client`]: entry points binding an engine to its secrets
//!
//! # Derivations
//!
//! ```text
//! rw key K ──HMAC(K, "read-only::nosalt")──▶ ro key S (= storage key)
//! ro cap   ──HMAC(cloud secret, ro cap)────▶ location
//! (S, name) ──HMAC(name, S)────────────────▶ child rw key
//! ```

mod access;
mod engine;
mod node;
mod storage;

pub use access::{Client, Server};
pub use engine::{Engine, NodeCaps};
pub use node::Node;
pub use storage::Storage;
