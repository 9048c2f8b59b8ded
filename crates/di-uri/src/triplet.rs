//! The `cipher:key:iv` descriptor.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A colon-separated `cipher:key:iv` triplet.
///
/// The backing string is kept verbatim and split positionally on read.
/// Missing fields are empty; the iv keeps any further colons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Triplet {
    raw: String,
}

impl Triplet {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Text before the first colon.
    pub fn cipher(&self) -> &str {
        self.raw.split(':').next().unwrap_or_default()
    }

    /// Text between the first and second colon.
    pub fn key(&self) -> &str {
        self.raw.splitn(3, ':').nth(1).unwrap_or_default()
    }

    /// Everything after the second colon.
    pub fn iv(&self) -> &str {
        self.raw.splitn(3, ':').nth(2).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Triplet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for Triplet {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

impl From<&str> for Triplet {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
