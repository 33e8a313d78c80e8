//! Key material for capabilities and the derivation engine
//!
//! Two kinds of secret bytes flow through the tree:
//! - **`Secret`**: a fixed 256-bit key. Every capability payload, every node
//!   storage key (FEK) and every derived child key is a `Secret`.
//! - **`EngineSecret`**: an opaque, variable-length blob owned by the engine
//!   (the server secret and the cloud secret).
//!
//! Both are wiped from memory when dropped. Equality on `Secret` runs in
//! constant time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a capability key, storage key and HMAC-SHA256 output in bytes
pub const SECRET_SIZE: usize = 32;

/// Errors that can occur while building key material
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("secret error: {0}")]
    Default(#[from] anyhow::Error),
}

/// A 256-bit symmetric key
///
/// A `Secret` is the raw payload of a capability. For a read-only node it is
/// also the node's storage key, the key handed to whatever encrypts the
/// node's serialized content in the storage backend.
///
/// # Examples
///
/// ```ignore
/// let secret = Secret::generate()?;
/// let copy = Secret::from_slice(secret.bytes())?;
/// assert_eq!(secret, copy);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret([u8; SECRET_SIZE]);

impl Deref for Secret {
    type Target = [u8; SECRET_SIZE];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; SECRET_SIZE]> for Secret {
    fn from(bytes: [u8; SECRET_SIZE]) -> Self {
        Secret(bytes)
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Secret {}

impl Hash for Secret {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}

impl Secret {
    /// Generate a new random secret using the operating system RNG
    ///
    /// # Errors
    ///
    /// Returns an error if the system entropy source is unavailable.
    pub fn generate() -> Result<Self, SecretError> {
        let mut buff = [0; SECRET_SIZE];
        getrandom::getrandom(&mut buff)
            .map_err(|e| anyhow::anyhow!("failed to generate random bytes: {}", e))?;
        Ok(Self(buff))
    }

    /// Create a secret from a byte slice
    ///
    /// # Errors
    ///
    /// Returns an error if the slice length is not exactly `SECRET_SIZE` bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, SecretError> {
        if data.len() != SECRET_SIZE {
            return Err(anyhow::anyhow!(
                "invalid secret size, expected {}, got {}",
                SECRET_SIZE,
                data.len()
            )
            .into());
        }
        let mut buff = [0; SECRET_SIZE];
        buff.copy_from_slice(data);
        Ok(buff.into())
    }

    /// Get a reference to the secret key bytes
    pub fn bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Lowercase hexadecimal form of the key
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// A secret owned by the derivation engine
///
/// Server secrets are large random blobs (see
/// [`random_server_secret`](crate::crypto::random_server_secret)); cloud
/// secrets are whatever the deployment shares with its trusted clients, and
/// may be empty.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EngineSecret(Vec<u8>);

impl EngineSecret {
    /// The empty secret, used by clients in place of a server secret
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for EngineSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for EngineSecret {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for EngineSecret {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<String> for EngineSecret {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl fmt::Debug for EngineSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EngineSecret({} bytes)", self.0.len())
    }
}
