//! Low-level arithmetic shared by the hashing layers.
//!
//! Wide-multiply and 128-bit-add helpers live in [`arith`], byte-to-word
//! loads in [`conv`]. Everything here is branch-free on secret data and
//! performs no allocation.

pub mod arith;
pub mod conv;
