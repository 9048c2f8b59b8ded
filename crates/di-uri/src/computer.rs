use di_hash::{BuiltinProvider, HashProvider};
use log::debug;

use crate::{Config, DigestUri, QueryForm, Result, Source, UriError};

/// Inputs for one digest computation.
///
/// ```
/// use di_uri::{ComputeRequest, QueryForm};
///
/// let query: QueryForm = [("ct", "text/plain")].into_iter().collect();
/// let request = ComputeRequest::new()
///     .source(b"payload")
///     .algorithm("SHA-512")
///     .query(query);
/// # let _ = request;
/// ```
#[derive(Debug, Default)]
pub struct ComputeRequest<'a> {
    source: Option<Source<'a>>,
    algorithm: Option<String>,
    query: Option<QueryForm>,
}

impl<'a> ComputeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request over `source` with every other setting defaulted.
    pub fn for_source(source: impl Into<Source<'a>>) -> Self {
        Self::new().source(source)
    }

    pub fn source(mut self, source: impl Into<Source<'a>>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Explicit algorithm; takes precedence over every default.
    pub fn algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = Some(name.into());
        self
    }

    pub fn query(mut self, query: QueryForm) -> Self {
        self.query = Some(query);
        self
    }
}

/// Computes digest identifiers through an injected [`HashProvider`].
///
/// The computer holds no per-call state; it can be shared by reference
/// across threads when its provider can.
#[derive(Debug, Clone, Default)]
pub struct DigestComputer<P = BuiltinProvider> {
    provider: P,
    config: Config,
}

impl DigestComputer {
    /// A computer over the built-in provider with default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: HashProvider> DigestComputer<P> {
    pub fn with_provider(provider: P, config: Config) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute a new identifier.
    ///
    /// The algorithm is the request's, else the configured default.
    pub fn compute(&self, request: ComputeRequest<'_>) -> Result<DigestUri> {
        self.compute_with_fallback(None, request)
    }

    /// Compute with `fallback` taking precedence over the configured default.
    pub(crate) fn compute_with_fallback(
        &self,
        fallback: Option<&str>,
        request: ComputeRequest<'_>,
    ) -> Result<DigestUri> {
        let ComputeRequest {
            source,
            algorithm,
            query,
        } = request;
        let source = source.ok_or(UriError::MissingSource)?;
        let requested = algorithm
            .as_deref()
            .or(fallback)
            .unwrap_or(&self.config.default_algorithm);
        let algorithm = self.resolve_algorithm(requested)?;

        let digest = self.digest_bytes(&algorithm, source)?;
        Ok(DigestUri::from_parts(&algorithm, &digest, query.as_ref()))
    }

    /// Lower-case `name` and map it to the provider's canonical spelling.
    pub fn resolve_algorithm(&self, name: &str) -> Result<String> {
        let name = name.to_ascii_lowercase();
        self.provider
            .canonical_name(&name)
            .ok_or(UriError::UnsupportedAlgorithm { name })
    }

    /// Hash `source` under an already-resolved algorithm name.
    pub fn digest_bytes(&self, algorithm: &str, source: Source<'_>) -> Result<Vec<u8>> {
        let kind = source.kind();
        let mut acc = self.provider.accumulator(algorithm)?;
        let fed = source.feed(acc.as_mut(), self.config.buffer_size)?;
        let digest = acc.finalize()?;
        match fed {
            Some(bytes) => debug!("{algorithm} digest over {bytes} bytes from {kind} source"),
            None => debug!("{algorithm} digest from {kind} source"),
        }
        Ok(digest)
    }

    /// Whether `source` hashes to the digest carried by `uri`.
    ///
    /// The query component plays no part in the comparison.
    pub fn verify<'s>(&self, uri: &DigestUri, source: impl Into<Source<'s>>) -> Result<bool> {
        let algorithm = self.resolve_algorithm(uri.algorithm())?;
        let expected = uri.digest()?;
        let actual = self.digest_bytes(&algorithm, source.into())?;
        let matched = expected == actual;
        debug!("verify {uri}: {}", if matched { "match" } else { "mismatch" });
        Ok(matched)
    }
}
