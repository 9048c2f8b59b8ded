//! The seam between digest computation and concrete hash implementations.
//!
//! Callers never name a hash type directly: they ask a [`HashProvider`]
//! for an [`Accumulator`] by algorithm name, feed it bytes, and finalize
//! it into raw digest bytes.

use std::io::Write;

use crate::{HashAlgorithm, HashError, Hasher};

/// An in-progress digest that accepts bytes incrementally.
///
/// Every accumulator is also a [`Write`] sink, so readers can be copied
/// into it and serializers can write straight through it.
pub trait Accumulator: Write {
    /// Canonical name of the algorithm being computed.
    fn algorithm(&self) -> &str;

    /// Feed data into the accumulator.
    fn update(&mut self, data: &[u8]);

    /// Consume the accumulator and return the raw digest bytes.
    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HashError>;
}

/// A registry of digest algorithms.
pub trait HashProvider {
    /// Canonical names of every supported algorithm.
    fn algorithms(&self) -> Vec<&str>;

    /// Resolve `name` to the canonical advertised name, ignoring ASCII case.
    fn canonical_name(&self, name: &str) -> Option<String> {
        self.algorithms()
            .into_iter()
            .find(|advertised| advertised.eq_ignore_ascii_case(name))
            .map(str::to_owned)
    }

    /// Whether `name` names a supported algorithm.
    fn supports(&self, name: &str) -> bool {
        self.canonical_name(name).is_some()
    }

    /// Start a new accumulator for `name`.
    fn accumulator(&self, name: &str) -> Result<Box<dyn Accumulator>, HashError>;
}

/// Provider backed by the `sha1-checked` and `sha2` implementations.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl BuiltinProvider {
    fn lookup(name: &str) -> Result<HashAlgorithm, HashError> {
        HashAlgorithm::from_name(name).ok_or_else(|| HashError::UnknownAlgorithm {
            name: name.to_owned(),
        })
    }
}

impl HashProvider for BuiltinProvider {
    fn algorithms(&self) -> Vec<&str> {
        HashAlgorithm::ALL.iter().map(HashAlgorithm::name).collect()
    }

    fn accumulator(&self, name: &str) -> Result<Box<dyn Accumulator>, HashError> {
        Ok(Box::new(Hasher::new(Self::lookup(name)?)))
    }
}

impl Accumulator for Hasher {
    fn algorithm(&self) -> &str {
        Hasher::algorithm(self).name()
    }

    fn update(&mut self, data: &[u8]) {
        Hasher::update(self, data);
    }

    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HashError> {
        Hasher::finalize(*self)
    }
}

impl<P: HashProvider + ?Sized> HashProvider for &P {
    fn algorithms(&self) -> Vec<&str> {
        (**self).algorithms()
    }

    fn canonical_name(&self, name: &str) -> Option<String> {
        (**self).canonical_name(name)
    }

    fn accumulator(&self, name: &str) -> Result<Box<dyn Accumulator>, HashError> {
        (**self).accumulator(name)
    }
}
