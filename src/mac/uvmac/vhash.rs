//! VHASH streaming context.
//!
//! [`Vhash`] owns the expanded key material and drives the three hashing
//! layers as a streaming state machine. Per tag half the context is either
//! fresh (accumulator equals the poly key, no block absorbed) or running
//! (at least one full block absorbed).
//!
//! The first full block is *added* to the poly key rather than multiplied
//! in: the effective polynomial has the first NH output as its constant
//! term. Subsequent blocks are ordinary polynomial steps. The final partial
//! block, if any, is zero-padded to a 16-byte boundary, hashed over a
//! shortened key window, and folded in the same way; the l3 layer then
//! binds the tail length and produces the 64-bit digest(s).

use crate::mac::uvmac::key::{self, KeyMaterial};
use crate::mac::uvmac::params::{TagBits, UvmacParams, NH_BLOCK_BYTES_MAX};
use crate::mac::uvmac::{l3, nh, poly, Tag, UvmacError, M62};
use crate::primitives::arith::add128;
use crate::primitives::conv::load_words;

const MAX_BLOCK_WORDS: usize = NH_BLOCK_BYTES_MAX / 8;

/// Streaming VHASH state for one long-lived key.
///
/// A context is single-threaded by contract: concurrent use of one context
/// produces torn state. Distinct contexts are fully independent.
///
/// # Security
///
/// - Key material and accumulators are zeroed when the context is dropped.
/// - The digest is a universal hash, not a MAC; it must be combined with
///   fresh pad-key material (see [`crate::mac::uvmac::tag`]) before it can
///   be released to an adversary.
pub struct Vhash {
    params: UvmacParams,
    nh_key: Vec<u64>,
    poly_key: [[u64; 2]; 2],
    l3_key: [[u64; 2]; 2],
    poly_acc: [[u64; 2]; 2],
    first_block_processed: bool,
}

impl Vhash {
    /// Builds a context from validated parameters and a user key.
    ///
    /// The user key is consumed as big-endian 64-bit words by the key
    /// schedule; see [`crate::mac::uvmac::key`] for the required length.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `params` violates its documented ranges
    /// - `InsufficientKeyMaterial` if `user_key` runs out of words
    pub fn new(params: UvmacParams, user_key: &[u8]) -> Result<Self, UvmacError> {
        params.validate()?;
        let KeyMaterial { nh, poly, l3 } = key::expand(user_key, &params)?;

        Ok(Self {
            params,
            nh_key: nh,
            poly_key: poly,
            l3_key: l3,
            poly_acc: poly,
            first_block_processed: false,
        })
    }

    /// Parameters this context was built from.
    pub fn params(&self) -> &UvmacParams {
        &self.params
    }

    /// Absorbs full NH blocks into the running state.
    ///
    /// `msg` must be a positive multiple of the NH block size; anything
    /// shorter or ragged belongs to the final [`finalize`](Self::finalize)
    /// call. On error the context is unchanged.
    pub fn update(&mut self, msg: &[u8]) -> Result<(), UvmacError> {
        let block = self.params.nh_block_bytes;

        if msg.is_empty() || msg.len() % block != 0 {
            return Err(UvmacError::InvalidUpdateLength);
        }

        for chunk in msg.chunks_exact(block) {
            self.absorb(chunk);
        }

        Ok(())
    }

    /// Absorbs the rest of the message, applies l3, and resets the context.
    ///
    /// `msg` may be any length: full blocks stream through the state
    /// machine, the remainder is zero-padded internally to a 16-byte
    /// boundary. An empty total message hashes the poly key itself. The
    /// returned digest carries one 64-bit word per tag half.
    pub fn finalize(&mut self, msg: &[u8]) -> Tag {
        let block = self.params.nh_block_bytes;
        let split = msg.len() - msg.len() % block;

        for chunk in msg[..split].chunks_exact(block) {
            self.absorb(chunk);
        }

        let tail = &msg[split..];
        if !tail.is_empty() {
            let padded = (tail.len() + 15) & !15;
            let mut buf = [0u8; NH_BLOCK_BYTES_MAX];
            buf[..tail.len()].copy_from_slice(tail);
            self.absorb(&buf[..padded]);
        }

        // The length encoding is the remainder in bits, not the total
        // message length.
        let len_bits = (8 * tail.len()) as u64;

        let mut out = [0u64; 2];
        for h in 0..self.params.tag_bits.halves() {
            out[h] = l3::l3hash(
                self.poly_acc[h][0],
                self.poly_acc[h][1],
                self.l3_key[h][0],
                self.l3_key[h][1],
                len_bits,
            );
        }

        self.abort();

        match self.params.tag_bits {
            TagBits::Bits64 => Tag::Bits64(out[0]),
            TagBits::Bits128 => Tag::Bits128(out[0], out[1]),
        }
    }

    /// Discards any absorbed input: the accumulators return to the poly key
    /// and the first-block flag clears. Idempotent.
    pub fn abort(&mut self) {
        self.poly_acc = self.poly_key;
        self.first_block_processed = false;
    }

    /// Folds one 16-byte-aligned chunk (a full block, or the padded tail)
    /// into the per-half accumulators.
    fn absorb(&mut self, chunk: &[u8]) {
        let n = chunk.len() / 8;
        let mut words = [0u64; MAX_BLOCK_WORDS];
        load_words(chunk, self.params.big_endian, &mut words[..n]);

        let mut sums = [(0u64, 0u64); 2];
        match self.params.tag_bits {
            TagBits::Bits64 => {
                sums[0] = nh::nh(&words[..n], &self.nh_key);
            }
            TagBits::Bits128 => {
                (sums[0], sums[1]) = nh::nh_double(&words[..n], &self.nh_key);
            }
        }

        for h in 0..self.params.tag_bits.halves() {
            let m = (sums[h].0 & M62, sums[h].1);
            let k = (self.poly_key[h][0], self.poly_key[h][1]);

            let (hi, lo) = if self.first_block_processed {
                poly::poly_step((self.poly_acc[h][0], self.poly_acc[h][1]), k, m)
            } else {
                // First block: constant term, not a polynomial step.
                add128(k.0, k.1, m.0, m.1)
            };
            self.poly_acc[h] = [hi, lo];
        }

        self.first_block_processed = true;
    }
}

impl Drop for Vhash {
    fn drop(&mut self) {
        self.nh_key.fill(0);
        for pair in self.poly_key.iter_mut() {
            pair.fill(0);
        }
        for pair in self.l3_key.iter_mut() {
            pair.fill(0);
        }
        for pair in self.poly_acc.iter_mut() {
            pair.fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> Vec<u8> {
        let mut key = Vec::new();
        for i in 0..24u64 {
            let w = i
                .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                .wrapping_add(0x0F1E_2D3C_4B5A_6978);
            key.extend_from_slice(&w.to_be_bytes());
        }
        key
    }

    fn message(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
    }

    fn block_words(ctx: &Vhash, chunk: &[u8]) -> Vec<u64> {
        let mut words = vec![0u64; chunk.len() / 8];
        load_words(chunk, ctx.params.big_endian, &mut words);
        words
    }

    #[test]
    fn first_block_is_an_add_not_a_step() {
        let mut ctx = Vhash::new(UvmacParams::default(), &test_key()).unwrap();
        let msg = message(256);

        let k = (ctx.poly_key[0][0], ctx.poly_key[0][1]);
        let l3k = ctx.l3_key[0];

        let s0 = nh::nh(&block_words(&ctx, &msg[..128]), &ctx.nh_key);
        let s1 = nh::nh(&block_words(&ctx, &msg[128..]), &ctx.nh_key);

        let acc = add128(k.0, k.1, s0.0 & M62, s0.1);
        let acc = poly::poly_step(acc, k, (s1.0 & M62, s1.1));
        let expected = l3::l3hash(acc.0, acc.1, l3k[0], l3k[1], 0);

        assert_eq!(ctx.finalize(&msg), Tag::Bits64(expected));
    }

    #[test]
    fn short_message_skips_the_poly_step() {
        let mut ctx = Vhash::new(UvmacParams::default(), &test_key()).unwrap();
        let msg = message(40);

        let k = (ctx.poly_key[0][0], ctx.poly_key[0][1]);
        let l3k = ctx.l3_key[0];

        let mut padded = msg.clone();
        padded.resize(48, 0);
        let s = nh::nh(&block_words(&ctx, &padded), &ctx.nh_key);
        let acc = add128(k.0, k.1, s.0 & M62, s.1);
        let expected = l3::l3hash(acc.0, acc.1, l3k[0], l3k[1], 8 * 40);

        assert_eq!(ctx.finalize(&msg), Tag::Bits64(expected));
    }

    #[test]
    fn empty_message_hashes_the_poly_key() {
        let mut ctx = Vhash::new(UvmacParams::default(), &test_key()).unwrap();

        let k = ctx.poly_key[0];
        let l3k = ctx.l3_key[0];
        let expected = l3::l3hash(k[0], k[1], l3k[0], l3k[1], 0);

        assert_eq!(ctx.finalize(&[]), Tag::Bits64(expected));
    }

    #[test]
    fn finalize_resets_the_context() {
        let mut ctx = Vhash::new(UvmacParams::default(), &test_key()).unwrap();
        let msg = message(300);

        let first = ctx.finalize(&msg);
        let second = ctx.finalize(&msg);

        assert_eq!(first, second);
        assert_eq!(ctx.poly_acc, ctx.poly_key);
        assert!(!ctx.first_block_processed);
    }

    #[test]
    fn update_rejects_ragged_lengths() {
        let mut ctx = Vhash::new(UvmacParams::default(), &test_key()).unwrap();

        assert_eq!(ctx.update(&[]), Err(UvmacError::InvalidUpdateLength));
        assert_eq!(ctx.update(&message(127)), Err(UvmacError::InvalidUpdateLength));
        assert_eq!(ctx.update(&message(129)), Err(UvmacError::InvalidUpdateLength));
        assert!(ctx.update(&message(128)).is_ok());
        assert!(ctx.update(&message(384)).is_ok());
    }
}
