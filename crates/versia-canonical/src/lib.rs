//! Canonical signing primitives for Versia federation requests.
//!
//! Every byte that participates in a request signature is produced here:
//! the body digest, the percent-encoded path and the canonical string
//!
//! ```text
//! <lowercased method> <percent-encoded path> <timestamp> <base64 sha-256 of body>
//! ```
//!
//! Signers and verifiers both build their canonical string through
//! [`build`], so the two sides cannot drift apart.
//!
#![deny(missing_docs)]

/// Canonical string construction.
pub mod canonicalizer;
/// SHA-256 body digests.
pub mod digest;
/// Path percent-encoding shared by signer and verifier.
pub mod encoding;
/// Signing timestamps.
pub mod timestamp;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{build, CanonicalString, SigningContext};
pub use digest::BodyDigest;
pub use encoding::encode_path;
pub use timestamp::SignedAt;
pub use validation::ValidationError;
