//! Digest URI identifiers.
//!
//! A digest URI names content by its cryptographic digest:
//!
//! ```text
//! di:<algorithm>;<base64url-digest>[?<query>]
//! ```
//!
//! [`DigestComputer`] hashes a [`Source`] through an injected
//! [`HashProvider`](di_hash::HashProvider) and renders a [`DigestUri`];
//! the identifier's accessors decode the digest back into raw bytes, hex
//! and base64. [`Triplet`] splits the related `cipher:key:iv` descriptor.
//!
//! ```
//! use di_uri::{ComputeRequest, DigestComputer};
//!
//! let computer = DigestComputer::new();
//! let uri = computer
//!     .compute(ComputeRequest::new().source("hglaguaghlag"))
//!     .unwrap();
//! assert_eq!(
//!     uri.to_string(),
//!     "di:sha-256;AekWTPh53Qxi8rO53fjFQQbUl_CUN5t0q-2lyJHIqZ4"
//! );
//! ```

mod error;
mod computer;
mod identifier;
pub mod config;
pub mod encoding;
pub mod query;
pub mod source;
pub mod triplet;

pub use computer::{ComputeRequest, DigestComputer};
pub use config::Config;
pub use error::UriError;
pub use identifier::{DigestUri, SCHEME};
pub use query::QueryForm;
pub use source::Source;
pub use triplet::Triplet;

pub type Result<T> = std::result::Result<T, UriError>;
