//! Salt generation for password hashing.

use rand::rngs::OsRng;
use rand::RngCore;

/// Salt length used when callers have no reason to pick another.
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Produces `len` cryptographically secure random bytes from the
/// operating system's entropy source.
///
/// Argon2 requires salts of at least 8 bytes; 16 is typical.
pub fn generate_salt(len: usize) -> Vec<u8> {
    let mut salt = vec![0u8; len];
    OsRng.fill_bytes(&mut salt);
    salt
}
