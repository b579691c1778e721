//! Parameter definitions and validation for UVMAC.
//!
//! This module defines the configurable parameters of the MAC and provides
//! validation to ensure they meet the algorithm's requirements.

use crate::mac::uvmac::UvmacError;

/// Smallest accepted NH block size in bytes.
pub const NH_BLOCK_BYTES_MIN: usize = 16;

/// Largest accepted NH block size in bytes.
pub const NH_BLOCK_BYTES_MAX: usize = 4096;

/// Default NH block size in bytes.
pub const NH_BLOCK_BYTES_DEFAULT: usize = 128;

/// Authentication tag width.
///
/// A 128-bit tag runs the whole hashing pipeline twice in parallel with
/// independent key material and consumes two pad-key words per tag instead
/// of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagBits {
    /// One 64-bit tag word (forgery bound ≈ 2^-61 per tag).
    #[default]
    Bits64,
    /// Two 64-bit tag words.
    Bits128,
}

impl TagBits {
    /// Number of independent 64-bit hash pipelines behind this tag width.
    pub(crate) fn halves(self) -> usize {
        match self {
            TagBits::Bits64 => 1,
            TagBits::Bits128 => 2,
        }
    }
}

/// Configuration parameters for a UVMAC context.
///
/// Interoperating peers must construct their contexts from equal parameter
/// values: every field changes the tag for the same key and message.
///
/// # Recommended Values
///
/// The defaults (64-bit tags, 128-byte NH blocks, little-endian message
/// words) match the published test vectors. Larger NH blocks trade key-table
/// size for fewer polynomial steps on long messages.
#[derive(Debug, Clone)]
pub struct UvmacParams {
    /// Tag width in bits.
    pub tag_bits: TagBits,
    /// NH block size in bytes (power of two, 16..=4096).
    pub nh_block_bytes: usize,
    /// Read message words big-endian instead of little-endian.
    ///
    /// Key material and pad-key words are always read big-endian,
    /// independently of this flag.
    pub big_endian: bool,
}

impl UvmacParams {
    /// Number of 64-bit words in one NH block.
    pub(crate) fn block_words(&self) -> usize {
        self.nh_block_bytes / 8
    }

    /// Number of 64-bit words in the NH key table.
    ///
    /// Two extra words per additional tag half feed the overlapped key
    /// window of the doubled NH pass.
    pub(crate) fn nh_key_words(&self) -> usize {
        self.block_words() + 2 * (self.tag_bits.halves() - 1)
    }

    pub(crate) fn validate(&self) -> Result<(), UvmacError> {
        if self.nh_block_bytes < NH_BLOCK_BYTES_MIN
            || self.nh_block_bytes > NH_BLOCK_BYTES_MAX
            || !self.nh_block_bytes.is_power_of_two()
        {
            return Err(UvmacError::InvalidConfiguration);
        }

        Ok(())
    }
}

impl Default for UvmacParams {
    /// Default parameters: 64-bit tag, 128-byte NH blocks, little-endian
    /// message words.
    fn default() -> Self {
        Self {
            tag_bits: TagBits::Bits64,
            nh_block_bytes: NH_BLOCK_BYTES_DEFAULT,
            big_endian: false,
        }
    }
}
