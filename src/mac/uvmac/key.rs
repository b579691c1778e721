//! Key schedule.
//!
//! The user key is consumed front to back as big-endian 64-bit words:
//!
//! 1. the NH key table (block words plus two overlap words per extra tag
//!    half)
//! 2. the poly key pair per tag half, masked so every 32-bit lane fits in
//!    29 bits
//! 3. the l3 key pair per tag half, rejection-sampled below 2^64 − 257
//!
//! Rejection sampling can discard words, so the user key must carry slack
//! beyond the minimum word count; 160 bytes for 64-bit tags and 208 bytes
//! for 128-bit tags suffice except with negligible probability. A trailing
//! partial word is never read.

use crate::mac::uvmac::params::UvmacParams;
use crate::mac::uvmac::{UvmacError, MPOLY, P64};
use crate::primitives::conv::load_be64;

use std::slice::ChunksExact;

/// Expanded key material for one context.
///
/// Poly and l3 pairs are stored per tag half as `[hi, lo]`; the second half
/// is left zeroed for 64-bit tags and never read.
pub(crate) struct KeyMaterial {
    pub(crate) nh: Vec<u64>,
    pub(crate) poly: [[u64; 2]; 2],
    pub(crate) l3: [[u64; 2]; 2],
}

/// Expands `user_key` into the NH table and the poly/l3 key pairs.
///
/// Fails with `InsufficientKeyMaterial` if the key runs out before every
/// slot is filled, rejected l3 draws included.
pub(crate) fn expand(user_key: &[u8], params: &UvmacParams) -> Result<KeyMaterial, UvmacError> {
    let halves = params.tag_bits.halves();
    let mut words = user_key.chunks_exact(8);

    let mut nh = Vec::with_capacity(params.nh_key_words());
    for _ in 0..params.nh_key_words() {
        nh.push(next_word(&mut words)?);
    }

    let mut poly = [[0u64; 2]; 2];
    for pair in poly.iter_mut().take(halves) {
        pair[0] = next_word(&mut words)? & MPOLY;
        pair[1] = next_word(&mut words)? & MPOLY;
    }

    let mut l3 = [[0u64; 2]; 2];
    for pair in l3.iter_mut().take(halves) {
        for slot in pair.iter_mut() {
            *slot = loop {
                let w = next_word(&mut words)?;
                if w < P64 {
                    break w;
                }
            };
        }
    }

    Ok(KeyMaterial { nh, poly, l3 })
}

fn next_word(words: &mut ChunksExact<'_, u8>) -> Result<u64, UvmacError> {
    words
        .next()
        .map(load_be64)
        .ok_or(UvmacError::InsufficientKeyMaterial)
}
