//! Base64 and base64url conversions for digest text.
//!
//! The URL-safe form is derived from standard base64 by character
//! substitution alone (`+` → `-`, `/` → `_`). Padding is whatever the
//! encoder emits, which for digests is none; decoding ignores any trailing
//! `=`, so both correct and over-long padding are accepted.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Standard alphabet, unpadded on encode, padding-indifferent on decode.
const DIGEST_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode raw digest bytes as standard base64.
pub fn encode(bytes: &[u8]) -> String {
    DIGEST_B64.encode(bytes)
}

/// Decode standard base64 text into raw bytes, ignoring trailing `=`.
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    DIGEST_B64.decode(text.trim_end_matches('='))
}

/// Encode raw digest bytes as base64url.
pub fn encode_url_safe(bytes: &[u8]) -> String {
    to_url_safe(&encode(bytes)).into_owned()
}

/// Substitute `+` → `-` and `/` → `_`.
pub fn to_url_safe(b64: &str) -> Cow<'_, str> {
    substitute(b64, [('+', '-'), ('/', '_')])
}

/// Substitute `-` → `+` and `_` → `/`.
pub fn from_url_safe(b64url: &str) -> Cow<'_, str> {
    substitute(b64url, [('-', '+'), ('_', '/')])
}

fn substitute(text: &str, pairs: [(char, char); 2]) -> Cow<'_, str> {
    if !text.contains(|c: char| pairs.iter().any(|(from, _)| *from == c)) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match pairs.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => *to,
                None => c,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_unpadded() {
        assert_eq!(encode(b"a"), "YQ");
        assert_eq!(encode(b"ab"), "YWI");
        assert_eq!(encode(b"abc"), "YWJj");
    }

    #[test]
    fn decode_accepts_both_padding_forms() {
        assert_eq!(decode("YQ").unwrap(), b"a");
        assert_eq!(decode("YQ==").unwrap(), b"a");
        assert_eq!(decode("YWI=").unwrap(), b"ab");
    }

    #[test]
    fn decode_ignores_excess_padding() {
        assert_eq!(decode("AAA==").unwrap(), [0, 0]);
        assert_eq!(decode("YQ===").unwrap(), b"a");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode("not base64!").is_err());
    }

    #[test]
    fn url_safe_substitution() {
        let bytes = [0xfb, 0xff, 0xbf];
        assert_eq!(encode(&bytes), "+/+/");
        assert_eq!(encode_url_safe(&bytes), "-_-_");
        assert_eq!(from_url_safe("-_-_"), "+/+/");
    }

    #[test]
    fn substitution_borrows_when_unchanged() {
        assert!(matches!(to_url_safe("abcd"), Cow::Borrowed("abcd")));
        assert!(matches!(from_url_safe("abcd"), Cow::Borrowed("abcd")));
    }

    #[test]
    fn padding_passes_through_substitution() {
        assert_eq!(to_url_safe("+/A="), "-_A=");
        assert_eq!(from_url_safe("-_A="), "+/A=");
    }
}
