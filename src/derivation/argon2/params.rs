//! Parameter definitions and validation for Argon2.
//!
//! This module defines the Argon2 variants and versions together with the
//! configurable cost parameters, and provides validation to ensure they
//! meet the algorithm's requirements.

use thiserror::Error;

/// Argon2 variant, selecting the block addressing mode during the fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Argon2d: data-dependent addressing throughout.
    D = 0,
    /// Argon2i: data-independent addressing throughout.
    I = 1,
    /// Argon2id: data-independent for the first half of the first pass,
    /// data-dependent afterwards.
    Id = 2,
}

impl Variant {
    /// RFC 9106 ordinal, as serialized into H0 and the address input block.
    pub(crate) fn ordinal(self) -> u32 {
        self as u32
    }
}

/// Argon2 version.
///
/// Version 0x13 folds recomputed blocks into the previous pass by XOR;
/// version 0x10 overwrites them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    /// Version 1.0 (0x10).
    V0x10 = 0x10,
    /// Version 1.3 (0x13), the RFC 9106 version.
    V0x13 = 0x13,
}

impl Version {
    /// The version word serialized into H0.
    pub(crate) fn word(self) -> u32 {
        self as u32
    }
}

/// Configuration parameters for an Argon2 computation.
///
/// These parameters control the memory and time cost of the hash,
/// allowing the security level to be tuned for the target hardware and
/// threat model.
///
/// # Recommended Values
///
/// For password hashing in 2024+, OWASP recommends:
/// - `mem_kib`: 19456 (19 MiB) minimum, 47104 (46 MiB) for higher security
/// - `time`: 2 passes minimum
/// - `lanes`: 1 (single-threaded) or number of available cores
/// - `tag_len`: 32 bytes for most applications
#[derive(Clone, Debug)]
pub struct Argon2Params {
    /// Requested memory size in KiB. Values below `8 * lanes` are raised
    /// to that minimum, and the total is truncated to a multiple of
    /// `4 * lanes` blocks.
    pub mem_kib: u32,
    /// Number of passes over memory (minimum 1).
    pub time: u32,
    /// Degree of parallelism (number of lanes, minimum 1).
    pub lanes: u32,
    /// Length of the output tag in bytes (minimum 4).
    pub tag_len: usize,
    /// Addressing mode.
    pub variant: Variant,
    /// Algorithm version.
    pub version: Version,
    /// Optional secret key (pepper) for keyed hashing.
    pub secret: Option<Vec<u8>>,
    /// Optional associated data.
    pub associated_data: Option<Vec<u8>>,
}

/// Errors that can occur during parameter validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Argon2ParamError {
    /// Lanes must be at least 1.
    #[error("parallelism must be at least 1 lane")]
    TooFewLanes,
    /// Time (passes) must be at least 1.
    #[error("iteration count must be at least 1")]
    TooFewPasses,
    /// Tag length must be at least 4 bytes.
    #[error("tag length must be at least 4 bytes, got {0}")]
    TagTooShort(usize),
}

impl Argon2Params {
    pub(crate) fn validate(&self) -> Result<(), Argon2ParamError> {
        if self.lanes < 1 {
            return Err(Argon2ParamError::TooFewLanes);
        }

        if self.time < 1 {
            return Err(Argon2ParamError::TooFewPasses);
        }

        if self.tag_len < 4 {
            return Err(Argon2ParamError::TagTooShort(self.tag_len));
        }

        Ok(())
    }
}

impl Default for Argon2Params {
    /// Default parameters: Argon2id v1.3, 64 MiB memory, 3 passes,
    /// 1 lane, 32-byte tag.
    fn default() -> Self {
        Self {
            mem_kib: 64 * 1024,
            time: 3,
            lanes: 1,
            tag_len: 32,
            variant: Variant::Id,
            version: Version::V0x13,
            secret: None,
            associated_data: None,
        }
    }
}
