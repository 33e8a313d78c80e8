//! Sparse capability text codec
//!
//! A capability is a tagged, self-certifying token:
//!
//! ```text
//! rw-<52 chars of unpadded RFC 4648 base32>   read/write (unattenuated)
//! ro-<52 chars of unpadded RFC 4648 base32>   read-only (attenuated)
//! ```
//!
//! The payload is always exactly 32 raw bytes. The tag is decoded once into an
//! [`Access`] at parse time; nothing downstream inspects the text again.

use std::fmt;
use std::str::FromStr;

use data_encoding::BASE32_NOPAD;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::mac::attenuate_key;
use super::secret::Secret;

/// Length of the access tag, including the trailing `-`
pub const TAG_LEN: usize = 3;
/// Length of the base32 payload of a 32 byte key with padding stripped
pub const PAYLOAD_LEN: usize = 52;
/// Total length of a well-formed capability
pub const CAPABILITY_LEN: usize = TAG_LEN + PAYLOAD_LEN;

const READ_WRITE_TAG: &str = "rw-";
const READ_ONLY_TAG: &str = "ro-";

/// Errors raised while parsing a capability
///
/// Every variant is an input-validation failure: the text is corrupted or was
/// supplied by someone who does not hold a real capability. None of them are
/// transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("malformed capability: too short ({0} characters)")]
    TooShort(usize),
    #[error("malformed capability: unknown access tag")]
    UnknownTag,
    #[error("malformed capability: invalid base32 payload: {0}")]
    Encoding(#[from] data_encoding::DecodeError),
    #[error("malformed capability: payload decodes to {0} bytes, expected 32")]
    KeySize(usize),
}

/// Access level carried by a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Unattenuated access to a node and everything below it
    ReadWrite,
    /// Attenuated access; the payload is the node's storage key
    ReadOnly,
}

impl Access {
    /// Text tag of this access level, including the trailing `-`
    pub fn tag(&self) -> &'static str {
        match self {
            Access::ReadWrite => READ_WRITE_TAG,
            Access::ReadOnly => READ_ONLY_TAG,
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            READ_WRITE_TAG => Some(Access::ReadWrite),
            READ_ONLY_TAG => Some(Access::ReadOnly),
            _ => None,
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Access::ReadOnly)
    }
}

/// A parsed sparse capability
///
/// Serializes as its text form. `Debug` never prints the key.
///
/// # Examples
///
/// ```ignore
/// let cap: Capability = "ro-...".parse()?;
/// assert_eq!(cap.access(), Access::ReadOnly);
/// assert_eq!(cap.to_string().parse::<Capability>()?, cap);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Capability {
    access: Access,
    key: Secret,
}

impl Capability {
    pub fn new(access: Access, key: Secret) -> Self {
        Self { access, key }
    }

    /// Parse the text form of a capability
    ///
    /// The payload is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a [`CapabilityError`] if the text is shorter than a tag plus one
    /// character, carries a tag other than `rw-` / `ro-`, or the payload is not
    /// the base32 encoding of exactly 32 bytes.
    pub fn parse(text: &str) -> Result<Self, CapabilityError> {
        if text.len() < TAG_LEN + 1 {
            return Err(CapabilityError::TooShort(text.len()));
        }

        let access = text
            .get(..TAG_LEN)
            .and_then(Access::from_tag)
            .ok_or(CapabilityError::UnknownTag)?;
        let payload = text.get(TAG_LEN..).ok_or(CapabilityError::UnknownTag)?;

        let mut raw = BASE32_NOPAD.decode(payload.to_ascii_uppercase().as_bytes())?;
        let key = Secret::from_slice(&raw).map_err(|_| CapabilityError::KeySize(raw.len()));
        zeroize::Zeroize::zeroize(&mut raw);

        Ok(Self::new(access, key?))
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn is_read_only(&self) -> bool {
        self.access.is_read_only()
    }

    /// The raw 32 byte payload
    pub fn key(&self) -> &Secret {
        &self.key
    }

    /// The read-only sibling of this capability
    ///
    /// A read/write capability is attenuated by MACing a fixed label under its
    /// key; a read-only capability is returned unchanged.
    pub fn attenuate(&self) -> Capability {
        match self.access {
            Access::ReadWrite => Capability::new(Access::ReadOnly, attenuate_key(&self.key)),
            Access::ReadOnly => self.clone(),
        }
    }
}

impl FromStr for Capability {
    type Err = CapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.access.tag(),
            BASE32_NOPAD.encode(self.key.bytes())
        )
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}
