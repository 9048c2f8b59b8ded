//! Computation settings.
//!
//! Settings come from built-in defaults, then the `DI_ALGORITHM`
//! environment variable, then explicit `key=value` overrides. Keys are
//! matched case-insensitively.

use crate::{Result, UriError};

/// Algorithm used when neither the request nor the target identifier names one.
pub const DEFAULT_ALGORITHM: &str = "sha-256";

/// Read size for stream sources.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Environment variable overriding the default algorithm.
pub const ALGORITHM_ENV: &str = "DI_ALGORITHM";

/// Settings for a [`DigestComputer`](crate::DigestComputer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lower-case name of the fallback algorithm.
    pub default_algorithm: String,
    /// Chunk size used when draining stream sources.
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_algorithm: DEFAULT_ALGORITHM.to_owned(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(algorithm) = std::env::var(ALGORITHM_ENV) {
            config.set("digest.algorithm", &algorithm)?;
        }
        Ok(config)
    }

    /// Set a single configuration key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.to_ascii_lowercase().as_str() {
            "digest.algorithm" => {
                let value = value.trim();
                if value.is_empty() || value.contains(&[';', ':'][..]) {
                    return Err(UriError::InvalidConfig(format!(
                        "invalid algorithm name '{value}'"
                    )));
                }
                self.default_algorithm = value.to_ascii_lowercase();
            }
            "digest.buffersize" => {
                let size = parse_size(value)?;
                if size == 0 {
                    return Err(UriError::InvalidConfig(
                        "digest.bufferSize must be positive".into(),
                    ));
                }
                self.buffer_size = size;
            }
            _ => return Err(UriError::InvalidConfig(format!("unknown key '{key}'"))),
        }
        Ok(())
    }

    /// Apply `key=value` overrides in order.
    pub fn apply_overrides<I, S>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in overrides {
            let entry = entry.as_ref();
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                UriError::InvalidConfig(format!("expected key=value, got '{entry}'"))
            })?;
            self.set(key.trim(), value)?;
        }
        Ok(())
    }
}

/// Parse a byte count with optional k/m/g suffix (powers of 1024).
fn parse_size(value: &str) -> Result<usize> {
    let s = value.trim();
    if s.is_empty() {
        return Err(UriError::InvalidConfig("empty size value".into()));
    }

    let (digits, multiplier): (&str, usize) = match s.as_bytes().last() {
        Some(b'k') | Some(b'K') => (&s[..s.len() - 1], 1024),
        Some(b'm') | Some(b'M') => (&s[..s.len() - 1], 1024 * 1024),
        Some(b'g') | Some(b'G') => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        _ => (s, 1),
    };

    let base: usize = digits
        .parse()
        .map_err(|_| UriError::InvalidConfig(format!("invalid size '{s}'")))?;

    base.checked_mul(multiplier)
        .ok_or_else(|| UriError::InvalidConfig(format!("size overflow: '{s}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_algorithm, "sha-256");
        assert_eq!(config.buffer_size, 64 * 1024);
    }

    #[test]
    fn algorithm_is_lowercased() {
        let mut config = Config::default();
        config.set("digest.algorithm", "SHA-512").unwrap();
        assert_eq!(config.default_algorithm, "sha-512");
    }

    #[test]
    fn keys_are_case_insensitive() {
        let mut config = Config::default();
        config.set("Digest.BufferSize", "8k").unwrap();
        assert_eq!(config.buffer_size, 8192);
    }

    #[test]
    fn size_suffixes() {
        assert_eq!(parse_size("512").unwrap(), 512);
        assert_eq!(parse_size("2K").unwrap(), 2048);
        assert_eq!(parse_size("1m").unwrap(), 1024 * 1024);
        assert!(parse_size("k").is_err());
        assert!(parse_size("").is_err());
        assert!(parse_size("ten").is_err());
    }

    #[test]
    fn overrides_apply_in_order() {
        let mut config = Config::default();
        config
            .apply_overrides(["digest.algorithm=sha-1", "digest.algorithm=sha-384"])
            .unwrap();
        assert_eq!(config.default_algorithm, "sha-384");
    }

    #[test]
    fn rejects_bad_entries() {
        let mut config = Config::default();
        assert!(matches!(
            config.apply_overrides(["no-equals-sign"]),
            Err(UriError::InvalidConfig(_))
        ));
        assert!(matches!(
            config.set("digest.colour", "blue"),
            Err(UriError::InvalidConfig(_))
        ));
        assert!(matches!(
            config.set("digest.algorithm", "sha;256"),
            Err(UriError::InvalidConfig(_))
        ));
        assert!(matches!(
            config.set("digest.bufferSize", "0"),
            Err(UriError::InvalidConfig(_))
        ));
    }
}
