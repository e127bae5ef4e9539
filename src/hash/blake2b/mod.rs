//! BLAKE2b cryptographic hash function (RFC 7693).
//!
//! BLAKE2b is a 64-bit hash function producing digests of 1 to 64 bytes,
//! with optional keyed (MAC) operation. It is the internal primitive of
//! the Argon2 password hashing function, which uses it both directly and
//! through the variable-length construction H'.
//!
//! # Structure
//!
//! - [`core`] implements the streaming state: a 128-byte input buffer, an
//!   8-word chain value, two 64-bit byte counters and a finalization flag.
//!   Input is absorbed lazily; a buffered block is only compressed once
//!   strictly more input arrives, so the final block is always available
//!   for the last-block flag.
//! - [`long`] implements the variable-length hash H' used by Argon2 to
//!   produce outputs longer than 64 bytes by chaining fixed-width digests.
//!
//! All serialization is little-endian.

pub mod core;
pub mod long;

/// Size of a BLAKE2b message block in bytes.
pub const BLOCK_LENGTH: usize = 128;

/// Largest digest BLAKE2b can produce in bytes.
pub const MAX_DIGEST_LENGTH: usize = 64;

/// Number of mixing rounds per compression.
pub(crate) const ROUNDS: usize = 12;

/// BLAKE2b initialization vector (the SHA-512 IV).
pub(crate) const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message word schedule, one permutation of 0..15 per round.
///
/// Rounds 10 and 11 reuse the permutations of rounds 0 and 1.
pub(crate) const SIGMA: [[usize; 16]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];
