use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use di_hash::HashProvider;

use crate::computer::{ComputeRequest, DigestComputer};
use crate::encoding;
use crate::{QueryForm, Result, UriError};

/// URI scheme of digest identifiers.
pub const SCHEME: &str = "di";

/// A digest identifier: `<algorithm>;<base64url-digest>[?<query>]`.
///
/// The opaque text is the only stored state. Every accessor derives its
/// value from it on read, so the algorithm and digest can never disagree.
/// An identifier with no opaque text yields empty results everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DigestUri {
    opaque: String,
}

impl DigestUri {
    /// Wrap an opaque component without validating it.
    pub fn from_opaque(opaque: impl Into<String>) -> Self {
        Self {
            opaque: opaque.into(),
        }
    }

    pub(crate) fn from_parts(algorithm: &str, digest: &[u8], query: Option<&QueryForm>) -> Self {
        let mut opaque = format!("{algorithm};{}", encoding::encode_url_safe(digest));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            opaque.push('?');
            opaque.push_str(&query.to_query_string());
        }
        Self { opaque }
    }

    /// The scheme-specific part.
    pub fn opaque(&self) -> &str {
        &self.opaque
    }

    pub fn is_empty(&self) -> bool {
        self.opaque.is_empty()
    }

    /// Text before the first `;`.
    pub fn algorithm(&self) -> &str {
        match self.opaque.split_once(';') {
            Some((algorithm, _)) => algorithm,
            None => &self.opaque,
        }
    }

    fn digest_text(&self) -> &str {
        let rest = match self.opaque.split_once(';') {
            Some((_, rest)) => rest,
            None => return "",
        };
        match rest.split_once('?') {
            Some((digest, _)) => digest,
            None => rest,
        }
    }

    /// The digest as base64.
    ///
    /// With `raw` the stored base64url text is returned untouched;
    /// otherwise `-` and `_` are mapped back to `+` and `/`.
    pub fn b64digest(&self, raw: bool) -> Cow<'_, str> {
        let text = self.digest_text();
        if raw {
            Cow::Borrowed(text)
        } else {
            encoding::from_url_safe(text)
        }
    }

    /// The raw digest bytes.
    pub fn digest(&self) -> Result<Vec<u8>> {
        let b64 = self.b64digest(false);
        encoding::decode(&b64).map_err(|source| UriError::InvalidDigest {
            digest: self.digest_text().to_owned(),
            source,
        })
    }

    /// The digest as lower-case hex.
    pub fn hexdigest(&self) -> Result<String> {
        Ok(di_hash::to_hex(&self.digest()?))
    }

    /// The raw query text, if any.
    pub fn query_str(&self) -> Option<&str> {
        self.opaque.split_once('?').map(|(_, query)| query)
    }

    /// The query component as a key → values mapping.
    pub fn query(&self) -> Option<QueryForm> {
        self.query_str().map(QueryForm::parse)
    }

    /// Compute a fresh identifier from `request`, keeping this identifier's
    /// algorithm unless the request names one. `self` is left untouched.
    pub fn recompute<P: HashProvider>(
        &self,
        computer: &DigestComputer<P>,
        request: ComputeRequest<'_>,
    ) -> Result<DigestUri> {
        let current = Some(self.algorithm()).filter(|a| !a.is_empty());
        computer.compute_with_fallback(current, request)
    }
}

impl fmt::Display for DigestUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}:{}", self.opaque)
    }
}

impl FromStr for DigestUri {
    type Err = UriError;

    /// Parse the full `di:` text form. The scheme is matched case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((scheme, opaque)) if scheme.eq_ignore_ascii_case(SCHEME) => {
                Ok(Self::from_opaque(opaque))
            }
            _ => Err(UriError::InvalidScheme {
                input: s.to_owned(),
            }),
        }
    }
}
