//! UVMAC message authentication code.
//!
//! UVMAC composes the three-layer VHASH almost-delta-universal hash family
//! with a one-time-pad encryption of the hash output. The sender and
//! receiver share a long-lived hashing key plus a stream of fresh pad-key
//! words, one (or two, for 128-bit tags) of which is consumed per tag. The
//! forgery bound is information-theoretic: no computational assumption is
//! made.
//!
//! The implementation is split into layers:
//!
//! - `nh`: word-parallel block compression (64×64→128 multiplies summed
//!   modulo 2^128)
//! - `poly`: Carter–Wegman polynomial evaluation over 2^127 − 1
//! - `l3`: finalization into a 64-bit scalar over 2^64 − 257
//! - `key`: key schedule (NH table, masked poly keys, rejection-sampled
//!   l3 keys)
//! - `vhash`: the streaming [`Vhash`] context driving the layers
//! - `core`: pad-key cursor and tag combining
//!
//! # Security
//!
//! - Each (pad-key stream, cursor position) pair must authenticate at most
//!   one message. Reuse breaks the unconditional-security guarantee, and
//!   the library cannot detect it.
//! - A context must not be shared between threads; distinct contexts are
//!   fully independent.

pub mod core;
pub mod params;

pub(crate) mod key;
pub(crate) mod l3;
pub(crate) mod nh;
pub(crate) mod poly;
pub(crate) mod vhash;

pub use self::core::{authenticate, tag, verify, PadKey};
pub use self::params::{
    TagBits,
    UvmacParams,
    NH_BLOCK_BYTES_DEFAULT,
    NH_BLOCK_BYTES_MAX,
    NH_BLOCK_BYTES_MIN,
};
pub use self::vhash::Vhash;

use std::fmt::{Display, Formatter};

/// The prime 2^64 − 257 used by the l3 layer.
pub(crate) const P64: u64 = 0xFFFF_FFFF_FFFF_FEFF;

/// 62-bit mask applied to NH outputs before they enter the poly layer.
pub(crate) const M62: u64 = 0x3FFF_FFFF_FFFF_FFFF;

/// 63-bit mask used by the poly-127 reduction.
pub(crate) const M63: u64 = 0x7FFF_FFFF_FFFF_FFFF;

/// Poly key mask: keeps each 32-bit lane below 2^29 so that one polynomial
/// step never overflows its 128-bit intermediates.
pub(crate) const MPOLY: u64 = 0x1FFF_FFFF_1FFF_FFFF;

/// Errors surfaced by key setup, hashing, and tag generation.
///
/// All of these are caller precondition violations; the library never
/// recovers locally and never aborts the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvmacError {
    /// The user key ran out before every key slot was filled (rejection
    /// resampling of l3 key words included).
    InsufficientKeyMaterial,
    /// The pad-key cursor would move past the end of the stream.
    PadKeyExhausted,
    /// `update` was called with an empty buffer or a length that is not a
    /// multiple of the NH block size.
    InvalidUpdateLength,
    /// Context parameters violate their documented ranges.
    InvalidConfiguration,
}

/// A VHASH digest or UVMAC tag: one 64-bit word per tag half.
///
/// The `Display` form is the big-endian hexadecimal rendering used by the
/// published test vectors (first half, then second half for 128-bit tags).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// 64-bit tag.
    Bits64(u64),
    /// 128-bit tag as two independent 64-bit halves.
    Bits128(u64, u64),
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Bits64(w) => write!(f, "{:016X}", w),
            Tag::Bits128(w1, w2) => write!(f, "{:016X}{:016X}", w1, w2),
        }
    }
}
