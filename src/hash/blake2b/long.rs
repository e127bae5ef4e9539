//! Variable-length hash H' built from BLAKE2b.
//!
//! Argon2 needs digests longer than the 64 bytes BLAKE2b can produce,
//! both for the 1024-byte seed blocks and for tags of arbitrary length.
//! H' prefixes the input with the little-endian 32-bit output length and
//! then either hashes once (up to 64 bytes) or chains 64-byte digests,
//! emitting 32 bytes per link and the whole final digest.

use zeroize::Zeroizing;

use super::core::Blake2b;
use super::MAX_DIGEST_LENGTH;

/// Half of a full digest, the stride at which chained output is emitted.
const CHAIN_STRIDE: usize = MAX_DIGEST_LENGTH / 2;

/// Computes H' of `input`, filling all of `out`.
///
/// The output length is taken from `out.len()`. An empty `out` is left
/// untouched.
pub fn blake2b_long_into(out: &mut [u8], input: &[u8]) {
    let out_len = out.len();
    if out_len == 0 {
        return;
    }

    let prefix = (out_len as u32).to_le_bytes();

    if out_len <= MAX_DIGEST_LENGTH {
        let mut state = Blake2b::with_params(out_len, &[]);
        state.update(&prefix);
        state.update(input);
        state.finalize_into(out);
        return;
    }

    // V1 = BLAKE2b-64(LE32(out_len) || input), then each further link
    // hashes the previous one. Every link contributes its first 32
    // bytes; the final link is sized to fill the remainder exactly.
    let mut state = Blake2b::with_params(MAX_DIGEST_LENGTH, &[]);
    state.update(&prefix);
    state.update(input);

    let mut chain = Zeroizing::new([0u8; MAX_DIGEST_LENGTH]);
    state.finalize_into(&mut chain[..]);
    out[..CHAIN_STRIDE].copy_from_slice(&chain[..CHAIN_STRIDE]);
    let mut written = CHAIN_STRIDE;

    while out_len - written > MAX_DIGEST_LENGTH {
        state.update(&chain[..]);
        state.finalize_into(&mut chain[..]);
        out[written..written + CHAIN_STRIDE].copy_from_slice(&chain[..CHAIN_STRIDE]);
        written += CHAIN_STRIDE;
    }

    let mut tail = Blake2b::with_params(out_len - written, &[]);
    tail.update(&chain[..]);
    tail.finalize_into(&mut out[written..]);
}

/// Computes H' of `input` with the requested output length.
pub fn blake2b_long(out_len: usize, input: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; out_len];
    blake2b_long_into(&mut out, input);
    out
}
