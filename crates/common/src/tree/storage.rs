use std::fmt;

use crate::crypto::Secret;

/// Where a node's serialized content lives, and the key it is encrypted with
///
/// Nothing here touches storage. The location is meant as a relative path (or
/// object key) in whatever backend holds node serializations; the key is the
/// node's file encryption key for that backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Storage {
    location: String,
    key: Secret,
}

impl Storage {
    pub(crate) fn new(location: String, key: Secret) -> Self {
        Self { location, key }
    }

    /// Obfuscated, three level path of the node's serialization
    pub fn location(&self) -> &str {
        &self.location
    }

    /// File encryption key of the node's serialization
    pub fn key(&self) -> &Secret {
        &self.key
    }

    pub fn into_parts(self) -> (String, Secret) {
        (self.location, self.key)
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
