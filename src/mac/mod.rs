//! Message authentication codes.
//!
//! Currently provides UVMAC, an unconditionally secure MAC built from the
//! VHASH universal hash family and a one-time-pad tag encryption.
//!
//! The implementation is split internally by hashing layer; users interact
//! with the [`uvmac::Vhash`] context, the [`uvmac::PadKey`] cursor, and the
//! tag-level operations re-exported below.

pub mod uvmac;

pub use self::uvmac::{PadKey, Tag, TagBits, UvmacError, UvmacParams, Vhash};
