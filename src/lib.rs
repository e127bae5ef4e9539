//! Memory-hard password hashing primitives
//!
//! This crate provides a from-scratch implementation of the Argon2
//! password hashing function (RFC 9106) and the BLAKE2b hash function
//! (RFC 7693) it is built on.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! step of both algorithms is written out explicitly, secrets are wiped
//! from working memory on all exit paths, and the public API is small.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions: the BLAKE2b streaming state with
//!   digests of 1 to 64 bytes and optional keyed (MAC) operation, and
//!   the variable-length construction H' that Argon2 uses to derive
//!   blocks and tags of arbitrary length.
//!
//! - `derivation`
//!   The Argon2 engine. All three variants (Argon2d, Argon2i, Argon2id)
//!   and both versions (0x10, 0x13) are supported, with the lanes of
//!   each slice filled in parallel. Also provides the salt helper.
//!
//! # Example
//!
//! ```rust, ignore
//! use argonite::derivation::{argon2id, generate_salt, Argon2Params};
//!
//! let salt = generate_salt(16);
//! let tag = argon2id(b"my_password", &salt, &Argon2Params::default())?;
//! ```
//!
//! # Design goals
//!
//! - Explicit, well-defined semantics for every algorithm step
//! - Working memory wiped on success, failure and cancellation
//! - Deterministic output for fixed inputs regardless of scheduling
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries, but to serve as a small, controlled
//! foundation for password hashing.

pub mod derivation;
pub mod hash;
