//! Byte-to-word conversions.
//!
//! The MAC layers operate on 64-bit words: message bytes are read in the
//! word order selected at context construction, while key material and
//! pad-key words are always read big-endian. These helpers centralize both
//! so no hashing code touches raw bytes.

/// Reads the first 8 bytes of `bytes` as a little-endian 64-bit word.
#[inline(always)]
pub fn load_le64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(bytes[..8].try_into().unwrap())
}

/// Reads the first 8 bytes of `bytes` as a big-endian 64-bit word.
#[inline(always)]
pub fn load_be64(bytes: &[u8]) -> u64 {
    u64::from_be_bytes(bytes[..8].try_into().unwrap())
}

/// Loads `out.len()` message words from `bytes`.
///
/// Words are read little-endian unless `big_endian` is set. The caller must
/// supply at least `8 * out.len()` bytes.
pub fn load_words(bytes: &[u8], big_endian: bool, out: &mut [u64]) {
    let chunks = bytes.chunks_exact(8);

    if big_endian {
        for (slot, chunk) in out.iter_mut().zip(chunks) {
            *slot = u64::from_be_bytes(chunk.try_into().unwrap());
        }
    } else {
        for (slot, chunk) in out.iter_mut().zip(chunks) {
            *slot = u64::from_le_bytes(chunk.try_into().unwrap());
        }
    }
}
