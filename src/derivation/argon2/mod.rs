//! Argon2 password hashing function (RFC 9106).
//!
//! Argon2 is a memory-hard password hashing function, the winner of the
//! Password Hashing Competition. All three variants are implemented:
//! Argon2d (data-dependent addressing), Argon2i (data-independent
//! addressing) and Argon2id, which combines the two. Both algorithm
//! versions 0x10 and 0x13 are supported.
//!
//! # Security Properties
//!
//! - **Memory hardness**: requires a configurable amount of memory,
//!   making parallel attacks expensive.
//! - **Time hardness**: supports multiple passes over memory to increase
//!   computation time.
//! - **Side-channel resistance**: Argon2i uses data-independent
//!   addressing throughout; Argon2id uses it for the first half of the
//!   first pass, covering the phase where the password's influence on
//!   the access pattern would be most exploitable.
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: Compute H0 = BLAKE2b(params || password || salt || ...)
//! 2. **Lane seeding**: Generate the first two blocks of each lane
//!    using H' (variable-length BLAKE2b).
//! 3. **Memory filling**: Fill the remaining blocks using the compression
//!    function G, which is based on the BLAKE2b round function with
//!    additional multiplication for diffusion.
//! 4. **Finalization**: XOR the last block of each lane together and apply
//!    H' to produce the final tag.
//!
//! # Memory Organization
//!
//! Memory is organized as a matrix of 1024-byte blocks:
//! - **Lanes**: independent rows processed in parallel.
//! - **Slices**: each lane is divided into 4 slices (sync points).
//! - **Segments**: blocks within a slice; the unit of parallel work.

pub(crate) mod block;
pub(crate) mod boundary;
pub mod core;
pub(crate) mod memory;
pub mod params;
pub(crate) mod reference;
