//! Cryptographic primitives for RumpelTree
//!
//! This module provides everything the derivation engine is built from:
//!
//! - **Capabilities**: the `rw-` / `ro-` tagged base32 token format
//! - **Key material**: 256-bit `Secret`s and variable-length `EngineSecret`s,
//!   both wiped on drop
//! - **MAC**: HMAC-SHA256, used for every one-way step in the tree
//! - **Roots**: random and password-stretched root capabilities, and
//!   server secret generation
//!
//! # Security Model
//!
//! ## Attenuation
//! A read/write capability carries a key `K`. Its read-only sibling carries
//! `HMAC(K, "read-only::nosalt")`. Going from read/write to read-only is a
//! single MAC; going back would mean inverting HMAC-SHA256.
//!
//! ## Storage keys
//! The payload of the read-only capability doubles as the node's storage key
//! (FEK), so anyone able to read a node can decrypt its content, and nobody
//! holding only the storage key can write.

mod capability;
mod mac;
mod root;
mod secret;

pub use capability::{Access, Capability, CapabilityError, CAPABILITY_LEN, PAYLOAD_LEN, TAG_LEN};
pub use mac::{attenuate_key, hmac_sha256, READ_ONLY_LABEL};
pub use root::{
    password_root_capability, random_root_capability, random_server_secret, PASSWORD_ROUNDS,
    PASSWORD_SALT, SERVER_SECRET_BLOCKS,
};
pub use secret::{EngineSecret, Secret, SecretError, SECRET_SIZE};
