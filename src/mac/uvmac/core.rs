//! Tag generation: VHASH output encrypted with one-time pad-key words.
//!
//! The pad-key stream is caller-owned uniform random data, read through a
//! [`PadKey`] cursor as big-endian 64-bit words. Tagging a message consumes
//! one word per tag half and adds it to the corresponding VHASH half modulo
//! 2^64. Because the pad word is fresh and uniform, the tag leaks nothing
//! about the hash, and the forgery bound is information-theoretic.
//!
//! ## Notes
//!
//! - The caller must ensure each (stream, cursor position) pair
//!   authenticates at most one message. Reuse breaks security and cannot
//!   be detected here.
//! - Callers who persist the cursor across runs serialize the word index
//!   ([`PadKey::cursor`]) and restore it with [`PadKey::with_cursor`].

use crate::mac::uvmac::params::UvmacParams;
use crate::mac::uvmac::vhash::Vhash;
use crate::mac::uvmac::{Tag, UvmacError};
use crate::primitives::conv::load_be64;

/// Read cursor over a caller-owned pad-key stream.
///
/// The stream is borrowed as bytes and consumed as big-endian 64-bit words;
/// the cursor counts words, not bytes. A trailing partial word is never
/// used.
pub struct PadKey<'a> {
    stream: &'a [u8],
    cursor: usize,
}

impl<'a> PadKey<'a> {
    /// Wraps `stream` with the cursor at word 0.
    pub fn new(stream: &'a [u8]) -> Self {
        Self { stream, cursor: 0 }
    }

    /// Wraps `stream` with the cursor at a previously saved word index.
    pub fn with_cursor(stream: &'a [u8], cursor: usize) -> Self {
        Self { stream, cursor }
    }

    /// Current cursor position, in 64-bit words.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whole words left between the cursor and the end of the stream.
    pub fn remaining_words(&self) -> usize {
        (self.stream.len() / 8).saturating_sub(self.cursor)
    }

    /// Returns the word at the cursor and advances by one.
    ///
    /// Fails with `PadKeyExhausted` once the stream has no whole word left;
    /// the cursor does not move on failure.
    pub fn consume_word(&mut self) -> Result<u64, UvmacError> {
        if self.remaining_words() == 0 {
            return Err(UvmacError::PadKeyExhausted);
        }

        let word = load_be64(&self.stream[8 * self.cursor..]);
        self.cursor += 1;
        Ok(word)
    }
}

/// Authenticates `msg`, consuming one pad word per tag half.
///
/// Absorbs `msg` (trailing full blocks plus the tail) into `ctx`, then adds
/// fresh pad-key words to the digest halves modulo 2^64. The context resets
/// for the next message; the cursor advances past the consumed words.
///
/// # Errors
///
/// `PadKeyExhausted` if the stream cannot supply every needed word. Pad
/// availability is checked up front, so on error neither the context nor
/// the cursor has changed.
pub fn tag(ctx: &mut Vhash, msg: &[u8], pad: &mut PadKey<'_>) -> Result<Tag, UvmacError> {
    if pad.remaining_words() < ctx.params().tag_bits.halves() {
        return Err(UvmacError::PadKeyExhausted);
    }

    Ok(match ctx.finalize(msg) {
        Tag::Bits64(h) => Tag::Bits64(h.wrapping_add(pad.consume_word()?)),
        Tag::Bits128(h1, h2) => Tag::Bits128(
            h1.wrapping_add(pad.consume_word()?),
            h2.wrapping_add(pad.consume_word()?),
        ),
    })
}

/// Recomputes the tag for `msg` and compares it against `expected`.
///
/// The comparison accumulates the word differences and checks them once,
/// without early exit. Consumes pad words exactly like [`tag`]; the caller
/// must hand in the same cursor position the sender used.
pub fn verify(
    ctx: &mut Vhash,
    msg: &[u8],
    pad: &mut PadKey<'_>,
    expected: &Tag,
) -> Result<bool, UvmacError> {
    let computed = tag(ctx, msg, pad)?;

    let diff = match (computed, *expected) {
        (Tag::Bits64(a), Tag::Bits64(b)) => a ^ b,
        (Tag::Bits128(a1, a2), Tag::Bits128(b1, b2)) => (a1 ^ b1) | (a2 ^ b2),
        // Tag widths are public parameters; a mismatch is a configuration
        // disagreement, not a forgery check.
        _ => return Ok(false),
    };

    Ok(diff == 0)
}

/// One-shot convenience: builds a context, tags `msg`, and discards it.
///
/// Streamed use and repeated messages under one key should construct a
/// [`Vhash`] once and call [`tag`] instead; the key schedule runs on every
/// call here.
pub fn authenticate(
    params: UvmacParams,
    user_key: &[u8],
    msg: &[u8],
    pad: &mut PadKey<'_>,
) -> Result<Tag, UvmacError> {
    let mut ctx = Vhash::new(params, user_key)?;
    tag(&mut ctx, msg, pad)
}
