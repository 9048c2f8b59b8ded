//! Hash computation for the digest URI toolkit.
//!
//! This crate provides the algorithm registry, the streaming [`Hasher`],
//! and the [`HashProvider`] / [`Accumulator`] seam through which the
//! identifier layer computes digests without knowing concrete hash types.

mod error;
mod algorithm;
pub mod hasher;
pub mod provider;

pub use algorithm::HashAlgorithm;
pub use error::HashError;
pub use hasher::Hasher;
pub use provider::{Accumulator, BuiltinProvider, HashProvider};

/// Render raw digest bytes as lower-case hex, two characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
