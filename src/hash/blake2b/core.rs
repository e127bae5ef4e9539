//! BLAKE2b streaming state and compression function.
//!
//! This module implements the core logic of BLAKE2b as defined in
//! RFC 7693: the parameter-block seeding of the chain value, the lazy
//! block-buffering update discipline, the 12-round compression function
//! and little-endian digest extraction.
//!
//! The state can be reused: finalization returns the digest and restores
//! the just-constructed state (including the key, for keyed instances),
//! so a single instance can hash a sequence of messages.

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BLOCK_LENGTH, IV, MAX_DIGEST_LENGTH, ROUNDS, SIGMA};

/// Errors that can occur when constructing a BLAKE2b instance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Blake2bError {
    /// Digest length must be between 1 and 64 bytes.
    #[error("digest length must be in 1..=64, got {0}")]
    DigestLength(usize),
    /// Key length must be at most 64 bytes.
    #[error("key length must be at most 64 bytes, got {0}")]
    KeyLength(usize),
}

/// Incremental BLAKE2b hash state.
///
/// Construct with [`Blake2b::new`] (unkeyed) or [`Blake2b::new_keyed`]
/// (MAC mode), feed input with [`Blake2b::update`], and extract the
/// digest with [`Blake2b::finalize`] or [`Blake2b::finalize_into`].
///
/// The full state, including the input buffer and any key material, is
/// wiped when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Blake2b {
    /// Chain value.
    h: [u64; 8],
    /// Low and high words of the byte counter.
    t: [u64; 2],
    /// Finalization flag, all-ones for the last block.
    f0: u64,
    /// Input buffer holding at most one message block.
    buf: [u8; BLOCK_LENGTH],
    buf_len: usize,
    digest_len: usize,
    /// Zero-padded key block, replayed on every reset.
    key_block: [u8; BLOCK_LENGTH],
    key_len: usize,
}

impl Blake2b {
    /// Creates an unkeyed instance producing `digest_len` bytes.
    pub fn new(digest_len: usize) -> Result<Self, Blake2bError> {
        Self::new_keyed(digest_len, &[])
    }

    /// Creates a keyed instance producing `digest_len` bytes.
    ///
    /// The key is absorbed as a zero-padded first message block, as
    /// specified by RFC 7693. An empty key is equivalent to [`Blake2b::new`].
    pub fn new_keyed(digest_len: usize, key: &[u8]) -> Result<Self, Blake2bError> {
        if digest_len == 0 || digest_len > MAX_DIGEST_LENGTH {
            return Err(Blake2bError::DigestLength(digest_len));
        }
        if key.len() > MAX_DIGEST_LENGTH {
            return Err(Blake2bError::KeyLength(key.len()));
        }
        Ok(Self::with_params(digest_len, key))
    }

    /// Infallible constructor for lengths already known to be valid.
    pub(crate) fn with_params(digest_len: usize, key: &[u8]) -> Self {
        let mut state = Self {
            h: [0; 8],
            t: [0; 2],
            f0: 0,
            buf: [0; BLOCK_LENGTH],
            buf_len: 0,
            digest_len,
            key_block: [0; BLOCK_LENGTH],
            key_len: key.len(),
        };
        state.key_block[..key.len()].copy_from_slice(key);
        state.reinit();
        state
    }

    /// Configured digest length in bytes.
    pub fn digest_len(&self) -> usize {
        self.digest_len
    }

    /// Returns the state to its just-constructed form.
    ///
    /// The digest length and key are preserved; all absorbed input is
    /// discarded.
    pub fn reset(&mut self) {
        self.reinit();
    }

    fn reinit(&mut self) {
        self.h = IV;
        // Parameter block: digest length, key length, fanout 1, depth 1.
        self.h[0] ^= 0x0101_0000 ^ ((self.key_len as u64) << 8) ^ self.digest_len as u64;
        self.t = [0, 0];
        self.f0 = 0;
        self.buf = [0; BLOCK_LENGTH];
        self.buf_len = 0;
        if self.key_len > 0 {
            self.buf = self.key_block;
            self.buf_len = BLOCK_LENGTH;
        }
    }

    /// Absorbs `input` into the state.
    ///
    /// A buffered block is only compressed once strictly more input
    /// arrives, so the most recent block always remains available for
    /// last-block finalization. Full blocks in the middle of `input`
    /// are compressed directly from the caller's slice.
    pub fn update(&mut self, mut input: &[u8]) {
        if input.is_empty() {
            return;
        }

        let space = BLOCK_LENGTH - self.buf_len;
        if input.len() > space {
            self.buf[self.buf_len..].copy_from_slice(&input[..space]);
            self.advance(BLOCK_LENGTH as u64);
            compress(&mut self.h, self.t, self.f0, &self.buf);
            self.buf_len = 0;
            input = &input[space..];

            while input.len() > BLOCK_LENGTH {
                self.advance(BLOCK_LENGTH as u64);
                compress(&mut self.h, self.t, self.f0, &input[..BLOCK_LENGTH]);
                input = &input[BLOCK_LENGTH..];
            }
        }

        self.buf[self.buf_len..self.buf_len + input.len()].copy_from_slice(input);
        self.buf_len += input.len();
    }

    /// Finalizes the hash, writing the digest into the front of `out`.
    ///
    /// `out` must be at least [`Blake2b::digest_len`] bytes. The state is
    /// reset afterwards and can absorb a new message immediately.
    pub fn finalize_into(&mut self, out: &mut [u8]) {
        self.advance(self.buf_len as u64);
        self.f0 = u64::MAX;
        self.buf[self.buf_len..].fill(0);
        compress(&mut self.h, self.t, self.f0, &self.buf);

        let mut full = [0u8; MAX_DIGEST_LENGTH];
        for (i, word) in self.h.iter().enumerate() {
            full[i * 8..(i + 1) * 8].copy_from_slice(&word.to_le_bytes());
        }
        out[..self.digest_len].copy_from_slice(&full[..self.digest_len]);
        full.zeroize();

        self.reinit();
    }

    /// Finalizes the hash and returns the digest.
    pub fn finalize(&mut self) -> Vec<u8> {
        let mut out = vec![0u8; self.digest_len];
        self.finalize_into(&mut out);
        out
    }

    /// Advances the byte counter by `n`, with carry into the high word.
    fn advance(&mut self, n: u64) {
        self.t[0] = self.t[0].wrapping_add(n);
        if self.t[0] < n {
            self.t[1] = self.t[1].wrapping_add(1);
        }
    }
}

/// One-shot BLAKE2b with the 64-byte digest used throughout Argon2.
pub fn blake2b64(input: &[u8]) -> [u8; 64] {
    let mut state = Blake2b::with_params(64, &[]);
    state.update(input);
    let mut out = [0u8; 64];
    state.finalize_into(&mut out);
    out
}

/// Compresses a single 128-byte message block into the chain value.
///
/// `t` is the byte counter including this block; `f0` is all-ones when
/// this is the final block and zero otherwise.
fn compress(h: &mut [u64; 8], t: [u64; 2], f0: u64, block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LENGTH);

    // Parse the block as 16 little-endian words.
    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);
    v[12] ^= t[0];
    v[13] ^= t[1];
    v[14] ^= f0;

    for sigma in SIGMA.iter().take(ROUNDS) {
        // Columns
        g(&mut v, 0, 4, 8, 12, m[sigma[0]], m[sigma[1]]);
        g(&mut v, 1, 5, 9, 13, m[sigma[2]], m[sigma[3]]);
        g(&mut v, 2, 6, 10, 14, m[sigma[4]], m[sigma[5]]);
        g(&mut v, 3, 7, 11, 15, m[sigma[6]], m[sigma[7]]);
        // Diagonals
        g(&mut v, 0, 5, 10, 15, m[sigma[8]], m[sigma[9]]);
        g(&mut v, 1, 6, 11, 12, m[sigma[10]], m[sigma[11]]);
        g(&mut v, 2, 7, 8, 13, m[sigma[12]], m[sigma[13]]);
        g(&mut v, 3, 4, 9, 14, m[sigma[14]], m[sigma[15]]);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// BLAKE2b quarter-round with rotation constants 32, 24, 16, 63.
#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}
