use di_hash::HashError;

/// Errors produced while computing or decoding digest URIs.
#[derive(Debug, thiserror::Error)]
pub enum UriError {
    #[error("no input source given")]
    MissingSource,

    #[error("invalid input source: {reason}")]
    InvalidSource { reason: String },

    #[error("unsupported digest algorithm '{name}'")]
    UnsupportedAlgorithm { name: String },

    #[error("invalid digest encoding '{digest}': {source}")]
    InvalidDigest {
        digest: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("not a digest URI: '{input}'")]
    InvalidScheme { input: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
