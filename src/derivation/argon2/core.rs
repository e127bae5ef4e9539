//! Argon2 entry points and per-hash orchestration.
//!
//! One computation runs through a fixed lifecycle: validate parameters,
//! allocate the working memory, seed the first two columns of each lane
//! from H0, fill the remaining blocks pass by pass, and fold the last
//! column into the output tag. The working memory is wiped on every exit
//! path, including cancellation and worker panics.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::AtomicBool;

use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use super::block::Block;
use super::boundary::{finalize, init};
use super::memory::MemoryLayout;
use super::params::{Argon2ParamError, Argon2Params, Variant};
use crate::hash::blake2b_long_into;

/// Errors that can occur during an Argon2 computation.
#[derive(Debug, Error)]
pub enum Argon2Error {
    /// Invalid parameter values.
    #[error("invalid Argon2 parameters: {0}")]
    InvalidParams(#[from] Argon2ParamError),
    /// Salt must be at least 8 bytes.
    #[error("salt must be at least 8 bytes")]
    InvalidSalt,
    /// The working memory could not be allocated.
    #[error("failed to allocate {0} blocks of working memory")]
    Allocation(usize),
    /// A worker task panicked during the memory fill.
    #[error("a worker failed while filling memory")]
    Computation,
    /// Cooperative cancellation was observed at a slice boundary.
    #[error("the computation was cancelled")]
    Cancelled,
}

/// Computes an Argon2 hash of the given password.
///
/// The variant, version, cost parameters and optional secret/associated
/// data all ride in `params`.
///
/// # Arguments
///
/// * `password` - The password to hash
/// * `salt` - A random salt (minimum 8 bytes, recommended 16+ bytes)
/// * `params` - Argon2 parameters (variant, version, memory, time,
///   parallelism, tag length)
///
/// # Returns
///
/// The derived tag as a byte vector, or an error if parameters are
/// invalid or the computation could not complete.
///
/// # Example
///
/// ```rust, ignore
/// use argonite::derivation::{argon2, Argon2Params};
///
/// let password = b"my_password";
/// let salt = b"random_salt_16b!";
/// let params = Argon2Params::default();
///
/// let tag = argon2(password, salt, &params).unwrap();
/// ```
pub fn argon2(
    password: &[u8],
    salt: &[u8],
    params: &Argon2Params,
) -> Result<Vec<u8>, Argon2Error> {
    hash_internal(password, salt, params, None)
}

/// Computes an Argon2 hash, checking `cancel` at every slice boundary.
///
/// When the flag becomes `true` the fill stops at the next boundary, the
/// working memory is wiped and [`Argon2Error::Cancelled`] is returned.
pub fn argon2_cancellable(
    password: &[u8],
    salt: &[u8],
    params: &Argon2Params,
    cancel: &AtomicBool,
) -> Result<Vec<u8>, Argon2Error> {
    hash_internal(password, salt, params, Some(cancel))
}

/// Computes an Argon2id hash, regardless of the variant in `params`.
pub fn argon2id(
    password: &[u8],
    salt: &[u8],
    params: &Argon2Params,
) -> Result<Vec<u8>, Argon2Error> {
    let mut params = params.clone();
    params.variant = Variant::Id;
    hash_internal(password, salt, &params, None)
}

fn hash_internal(
    password: &[u8],
    salt: &[u8],
    params: &Argon2Params,
    cancel: Option<&AtomicBool>,
) -> Result<Vec<u8>, Argon2Error> {
    params.validate()?;

    if salt.len() < 8 {
        return Err(Argon2Error::InvalidSalt);
    }

    let layout = MemoryLayout::new(params);
    let mut memory = allocate_blocks(layout.total_blocks as usize)?;

    let h0 = init(password, salt, params);

    // Seed the first two columns of each lane:
    // B[lane][col] = H'(H0 || LE32(col) || LE32(lane), 1024)
    for lane in 0..layout.lanes {
        for col in 0..2u32 {
            let mut input = Zeroizing::new(Vec::with_capacity(72));
            input.extend_from_slice(&h0[..]);
            input.extend_from_slice(&col.to_le_bytes());
            input.extend_from_slice(&lane.to_le_bytes());

            let mut seed = Zeroizing::new([0u8; 1024]);
            blake2b_long_into(&mut seed[..], &input);
            memory[layout.index(lane, col)] = Block::from_bytes(&seed);
        }
    }

    let filled = catch_unwind(AssertUnwindSafe(|| {
        layout.fill(&mut memory, params, cancel)
    }));
    match filled {
        Ok(Ok(())) => {}
        Ok(Err(interrupted)) => {
            memory.zeroize();
            return Err(interrupted);
        }
        Err(_) => {
            memory.zeroize();
            return Err(Argon2Error::Computation);
        }
    }

    let tag = finalize(&memory, layout.lanes, layout.lane_len, params.tag_len);
    memory.zeroize();

    Ok(tag)
}

/// Allocates the block array up front, surfacing allocation failure
/// instead of aborting: the working set is caller-controlled and can be
/// gigabytes.
fn allocate_blocks(count: usize) -> Result<Vec<Block>, Argon2Error> {
    let mut blocks = Vec::new();
    blocks
        .try_reserve_exact(count)
        .map_err(|_| Argon2Error::Allocation(count))?;
    blocks.resize(count, Block::ZERO);
    Ok(blocks)
}
