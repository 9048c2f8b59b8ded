/// Errors produced by hash providers and accumulators.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("unsupported digest algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    #[error("SHA-1 collision detected")]
    Sha1Collision,
}
