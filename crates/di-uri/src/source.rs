//! Inputs a digest can be computed over.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use di_hash::Accumulator;
use log::trace;

use crate::{Result, UriError};

/// Callback that pushes bytes into an accumulator by its own logic.
pub type FeedFn<'a> = Box<dyn FnOnce(&mut dyn Accumulator) -> io::Result<()> + 'a>;

/// The bytes to digest.
pub enum Source<'a> {
    /// A reader drained to exhaustion in fixed-size chunks.
    Stream(Box<dyn Read + 'a>),
    /// A byte buffer fed in one call.
    Buffer(Cow<'a, [u8]>),
    /// A closure handed the accumulator.
    Callback(FeedFn<'a>),
    /// A plain string value fed as its UTF-8 bytes.
    Scalar(Cow<'a, str>),
}

impl<'a> Source<'a> {
    pub fn stream<R: Read + 'a>(reader: R) -> Self {
        Self::Stream(Box::new(reader))
    }

    pub fn buffer(bytes: impl Into<Cow<'a, [u8]>>) -> Self {
        Self::Buffer(bytes.into())
    }

    pub fn callback<F>(feed: F) -> Self
    where
        F: FnOnce(&mut dyn Accumulator) -> io::Result<()> + 'a,
    {
        Self::Callback(Box::new(feed))
    }

    pub fn scalar(value: impl Into<Cow<'a, str>>) -> Self {
        Self::Scalar(value.into())
    }

    /// Short name of the variant, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Stream(_) => "stream",
            Self::Buffer(_) => "buffer",
            Self::Callback(_) => "callback",
            Self::Scalar(_) => "scalar",
        }
    }

    /// Push every byte of this source into `acc`, returning the byte count
    /// where it is known.
    pub(crate) fn feed(self, acc: &mut dyn Accumulator, buffer_size: usize) -> Result<Option<u64>> {
        match self {
            Self::Stream(mut reader) => {
                let mut buf = vec![0u8; buffer_size.max(1)];
                let mut total = 0u64;
                loop {
                    let n = match reader.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => n,
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => return Err(e.into()),
                    };
                    acc.update(&buf[..n]);
                    total += n as u64;
                    trace!("fed {n} bytes from stream ({total} total)");
                }
                Ok(Some(total))
            }
            Self::Buffer(bytes) => {
                acc.update(&bytes);
                Ok(Some(bytes.len() as u64))
            }
            Self::Callback(feed) => {
                feed(acc)?;
                Ok(None)
            }
            Self::Scalar(value) => {
                acc.update(value.as_bytes());
                Ok(Some(value.len() as u64))
            }
        }
    }
}

impl Source<'static> {
    /// Open a regular file as a stream source.
    ///
    /// Directories and other non-regular file system objects cannot be
    /// read as a byte stream and fail with [`UriError::InvalidSource`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            let what = if meta.is_dir() { "a directory" } else { "not a regular file" };
            return Err(UriError::InvalidSource {
                reason: format!("'{}' is {what}", path.display()),
            });
        }
        Ok(Self::stream(File::open(path)?))
    }

    /// Standard input as a stream source.
    pub fn stdin() -> Self {
        Self::stream(io::stdin().lock())
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Buffer(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Source<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Buffer(Cow::Borrowed(bytes.as_slice()))
    }
}

impl From<Vec<u8>> for Source<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Buffer(Cow::Owned(bytes))
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(value: &'a str) -> Self {
        Self::Scalar(Cow::Borrowed(value))
    }
}

impl From<String> for Source<'_> {
    fn from(value: String) -> Self {
        Self::Scalar(Cow::Owned(value))
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            other => f.write_str(other.kind()),
        }
    }
}
