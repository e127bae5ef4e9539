//! Key derivation functions.
//!
//! This module hosts the memory-hard password hashing machinery: the
//! Argon2 family (d, i, id) and the salt helper feeding it.

pub mod argon2;
pub mod salt;

pub use argon2::core::{argon2, argon2_cancellable, argon2id, Argon2Error};
pub use argon2::params::{Argon2ParamError, Argon2Params, Variant, Version};
pub use salt::{generate_salt, DEFAULT_SALT_LENGTH};
