//! Unconditionally secure message authentication.
//!
//! This crate implements UVMAC: the three-layer VHASH universal hash family
//! (NH block compression, Carter–Wegman polynomial evaluation over
//! 2^127 − 1, inner-product finalization over 2^64 − 257) composed with a
//! one-time-pad encryption of the hash output. Sender and receiver share a
//! long-lived hashing key plus a stream of fresh pad-key words; each tag
//! consumes a distinct slice of that stream, so the forgery probability is
//! bounded information-theoretically (about 2^-61 per 64-bit tag) with no
//! computational assumption.
//!
//! The focus is on **clarity, predictability, and auditability**: explicit
//! semantics, no hidden global state, and a dependency-free core.
//!
//! # Module overview
//!
//! - `primitives`
//!   Low-level, allocation-free arithmetic used by the hashing layers:
//!   wide multiplies, 128-bit adds, and byte-to-word loads.
//!
//! - `mac`
//!   The UVMAC construction itself: the streaming VHASH context, the key
//!   schedule, the pad-key cursor, and tag generation/verification.
//!
//! # Design goals
//!
//! - No heap allocation on the hashing hot path
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics shared with interoperating peers
//! - Clear separation between hashing layers and the tag-combining surface
//!
//! This crate provides message *authentication* only. It does not encrypt
//! messages, and it cannot detect pad-key reuse; both remain the caller's
//! responsibility.

pub mod mac;
pub mod primitives;
