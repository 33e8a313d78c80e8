//! HMAC-SHA256, the only primitive the derivation engine is built from

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::secret::{Secret, SECRET_SIZE};

/// Fixed message MACed under a read/write key to obtain its read-only key
pub const READ_ONLY_LABEL: &[u8] = b"read-only::nosalt";

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of `data` under `key`
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Secret {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    let mut out = [0u8; SECRET_SIZE];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Secret::from(out)
}

/// One-way step from a read/write key to its read-only sibling
pub fn attenuate_key(key: &Secret) -> Secret {
    hmac_sha256(key.bytes(), READ_ONLY_LABEL)
}
