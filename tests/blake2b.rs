use argonite::hash::{blake2b64, blake2b_long, Blake2b, Blake2bError};

// -------------------------------------------------------
// OFFICIAL BLAKE2b-512 TEST VECTORS (RFC 7693)
// -------------------------------------------------------

const EMPTY_512: [u8; 64] = [
    0x78, 0x6a, 0x02, 0xf7, 0x42, 0x01, 0x59, 0x03, 0xc6, 0xc6, 0xfd, 0x85, 0x25, 0x52, 0xd2,
    0x72, 0x91, 0x2f, 0x47, 0x40, 0xe1, 0x58, 0x47, 0x61, 0x8a, 0x86, 0xe2, 0x17, 0xf7, 0x1f,
    0x54, 0x19, 0xd2, 0x5e, 0x10, 0x31, 0xaf, 0xee, 0x58, 0x53, 0x13, 0x89, 0x64, 0x44, 0x93,
    0x4e, 0xb0, 0x4b, 0x90, 0x3a, 0x68, 0x5b, 0x14, 0x48, 0xb7, 0x55, 0xd5, 0x6f, 0x70, 0x1a,
    0xfe, 0x9b, 0xe2, 0xce,
];

const ABC_512: [u8; 64] = [
    0xba, 0x80, 0xa5, 0x3f, 0x98, 0x1c, 0x4d, 0x0d, 0x6a, 0x27, 0x97, 0xb6, 0x9f, 0x12, 0xf6,
    0xe9, 0x4c, 0x21, 0x2f, 0x14, 0x68, 0x5a, 0xc4, 0xb7, 0x4b, 0x12, 0xbb, 0x6f, 0xdb, 0xff,
    0xa2, 0xd1, 0x7d, 0x87, 0xc5, 0x39, 0x2a, 0xab, 0x79, 0x2d, 0xc2, 0x52, 0xd5, 0xde, 0x45,
    0x33, 0xcc, 0x95, 0x18, 0xd3, 0x8a, 0xa8, 0xdb, 0xf1, 0x92, 0x5a, 0xb9, 0x23, 0x86, 0xed,
    0xd4, 0x00, 0x99, 0x23,
];

#[test]
fn blake2b_512_empty_input() {
    let mut state = Blake2b::new(64).unwrap();
    let digest = state.finalize();
    assert_eq!(digest, EMPTY_512);

    assert_eq!(blake2b64(&[]), EMPTY_512);
}

#[test]
fn blake2b_512_abc() {
    let mut state = Blake2b::new(64).unwrap();
    state.update(b"abc");
    let digest = state.finalize();
    assert_eq!(digest, ABC_512);

    assert_eq!(blake2b64(b"abc"), ABC_512);
}

// -------------------------------------------------------
// STREAMING DISCIPLINE
// -------------------------------------------------------

/// Feeding input in pieces must match the one-shot digest for any split.
#[test]
fn blake2b_update_split_equivalence() {
    let input: Vec<u8> = (0..300u32).map(|i| (i % 251) as u8).collect();
    let expected = blake2b64(&input);

    for split in [0, 1, 63, 127, 128, 129, 255, 256, 299, 300] {
        let mut state = Blake2b::new(64).unwrap();
        state.update(&input[..split]);
        state.update(&input[split..]);
        assert_eq!(state.finalize(), expected, "split at {split}");
    }

    // Byte-at-a-time.
    let mut state = Blake2b::new(64).unwrap();
    for byte in &input {
        state.update(std::slice::from_ref(byte));
    }
    assert_eq!(state.finalize(), expected);
}

/// Inputs of exactly one and exactly two block lengths exercise the
/// lazy-compression boundary.
#[test]
fn blake2b_block_boundary_inputs() {
    for len in [127usize, 128, 129, 256, 257] {
        let input = vec![0xabu8; len];
        let expected = blake2b64(&input);

        let mut state = Blake2b::new(64).unwrap();
        for chunk in input.chunks(100) {
            state.update(chunk);
        }
        assert_eq!(state.finalize(), expected, "length {len}");
    }
}

#[test]
fn blake2b_reset_matches_fresh_instance() {
    let mut state = Blake2b::new(32).unwrap();
    state.update(b"some bytes that will be discarded");
    state.reset();
    state.update(b"abc");
    let after_reset = state.finalize();

    let mut fresh = Blake2b::new(32).unwrap();
    fresh.update(b"abc");
    assert_eq!(after_reset, fresh.finalize());
}

/// Finalization leaves the state ready for the next message.
#[test]
fn blake2b_finalize_then_reuse() {
    let mut state = Blake2b::new(64).unwrap();
    state.update(b"abc");
    assert_eq!(state.finalize(), ABC_512);

    let digest = state.finalize();
    assert_eq!(digest, EMPTY_512);

    state.update(b"abc");
    assert_eq!(state.finalize(), ABC_512);
}

// -------------------------------------------------------
// PARAMETERS
// -------------------------------------------------------

#[test]
fn blake2b_digest_lengths() {
    for len in 1..=64usize {
        let mut state = Blake2b::new(len).unwrap();
        state.update(b"abc");
        let digest = state.finalize();
        assert_eq!(digest.len(), len);
    }

    // Shorter digests are not truncations: the parameter block seeds a
    // different chain value per length.
    let mut half = Blake2b::new(32).unwrap();
    half.update(b"abc");
    assert_ne!(half.finalize()[..], ABC_512[..32]);
}

#[test]
fn blake2b_rejects_bad_digest_lengths() {
    assert!(matches!(
        Blake2b::new(0),
        Err(Blake2bError::DigestLength(0))
    ));
    assert!(matches!(
        Blake2b::new(65),
        Err(Blake2bError::DigestLength(65))
    ));
}

#[test]
fn blake2b_rejects_oversized_key() {
    let key = [0u8; 65];
    assert!(matches!(
        Blake2b::new_keyed(64, &key),
        Err(Blake2bError::KeyLength(65))
    ));
}

#[test]
fn blake2b_keyed_differs_from_unkeyed() {
    let mut keyed = Blake2b::new_keyed(64, b"secret key").unwrap();
    keyed.update(b"hello world");
    let mac = keyed.finalize();

    let mut unkeyed = Blake2b::new(64).unwrap();
    unkeyed.update(b"hello world");
    assert_ne!(mac, unkeyed.finalize());

    // Keyed state replays the key after finalize/reset too.
    keyed.update(b"hello world");
    assert_eq!(mac, keyed.finalize());
}

// -------------------------------------------------------
// VARIABLE-LENGTH HASH H'
// -------------------------------------------------------

/// H' produces exactly the requested number of bytes across both the
/// single-shot and the chained branch.
#[test]
fn blake2b_long_exact_lengths() {
    for len in [1usize, 4, 31, 32, 63, 64, 65, 72, 96, 100, 256, 1024] {
        let out = blake2b_long(len, &[0]);
        assert_eq!(out.len(), len, "requested {len}");
    }
}

/// At 64 bytes H' is a plain length-prefixed BLAKE2b digest.
#[test]
fn blake2b_long_single_shot_branch() {
    let expected = blake2b64(&[64, 0, 0, 0, 0]);
    assert_eq!(blake2b_long(64, &[0]), expected);
}

/// Above 64 bytes the output starts with the first half of
/// V1 = BLAKE2b-64(LE32(len) || input).
#[test]
fn blake2b_long_chained_prefix() {
    let out = blake2b_long(72, &[0]);
    assert_eq!(out.len(), 72);

    let v1 = blake2b64(&[72, 0, 0, 0, 0]);
    assert_eq!(out[..32], v1[..32]);
}

#[test]
fn blake2b_long_is_deterministic() {
    let a = blake2b_long(1024, b"seed material");
    let b = blake2b_long(1024, b"seed material");
    assert_eq!(a, b);

    let c = blake2b_long(1024, b"other material");
    assert_ne!(a, c);
}
