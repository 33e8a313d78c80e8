//! Root capability and server secret generation
//!
//! A tree is identified by its root read/write capability. Roots either come
//! from 32 random bytes or are stretched from a password with
//! PBKDF2-HMAC-SHA256, so that the same password always reopens the same tree.

use data_encoding::BASE32_NOPAD;
use sha2::Sha256;
use zeroize::Zeroize;

use super::capability::{Access, Capability};
use super::secret::{EngineSecret, Secret, SecretError, SECRET_SIZE};

/// Salt used when stretching a password into a root capability
pub const PASSWORD_SALT: &[u8] = b"Rumpelstiltskin";
/// PBKDF2 iteration count used when stretching a password
pub const PASSWORD_ROUNDS: u32 = 131_072;
/// Number of random 32 byte blocks making up a generated server secret
pub const SERVER_SECRET_BLOCKS: usize = 256;

/// Generate a random root capability, and with it a brand new tree
pub fn random_root_capability() -> Result<Capability, SecretError> {
    Ok(Capability::new(Access::ReadWrite, Secret::generate()?))
}

/// Derive a root capability from a password
pub fn password_root_capability(password: &str) -> Capability {
    let mut buff = [0u8; SECRET_SIZE];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), PASSWORD_SALT, PASSWORD_ROUNDS, &mut buff);
    let cap = Capability::new(Access::ReadWrite, Secret::from(buff));
    buff.zeroize();
    cap
}

/// Generate a fresh server secret
///
/// The secret is the concatenation of `SERVER_SECRET_BLOCKS` unpadded base32
/// encodings of 32 random bytes each, so it is printable and can be stored as
/// a plain text file. It should be persisted with access rights that allow
/// only the server process to read it.
pub fn random_server_secret() -> Result<EngineSecret, SecretError> {
    let mut text = String::with_capacity(SERVER_SECRET_BLOCKS * 52);
    for _ in 0..SERVER_SECRET_BLOCKS {
        let block = Secret::generate()?;
        text.push_str(&BASE32_NOPAD.encode(block.bytes()));
    }
    Ok(EngineSecret::from(text))
}
