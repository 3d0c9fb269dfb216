//! Ed25519 request signatures for Versia federation.
//!
//! This crate provides:
//! - Key material import/export (SPKI public keys, PKCS8 private keys, base64 text)
//! - [`SignatureConstructor`] for signing outgoing requests
//! - [`SignatureValidator`] for verifying incoming requests
//! - A pluggable [`CryptoProvider`] checked once at construction
//!
//! Outcomes of verification:
//! - `Ok(true)`: the signature matches the request
//! - `Ok(false)`: the signature does not match (wrong key, tampered body, stale client)
//! - `Err(_)`: the request could not be evaluated (missing or malformed headers)
//!
//! ```rust
//! use http::{Method, Request};
//! use versia_signatures::{Keypair, SignatureConstructor, SignatureValidator};
//!
//! let keys = Keypair::generate();
//! let signer = SignatureConstructor::new(
//!     keys.private().clone(),
//!     "https://example.com/users/6a18f2c3-120e-4949-bda4-2aa4c8264d51",
//! )?;
//! let validator = SignatureValidator::new(keys.public().clone())?;
//!
//! let request = Request::builder()
//!     .method(Method::POST)
//!     .uri("https://example.com/inbox")
//!     .body(br#"{"type":"Note"}"#.to_vec())?;
//!
//! let signed = signer.sign_request(&request)?;
//! assert!(validator.validate_request(&signed.request)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
#![deny(missing_docs)]

/// Request signing.
pub mod constructor;
/// Lenient base64 decoding for signature values.
pub mod encoding;
/// Error types for key handling and signatures.
pub mod errors;
/// Versia signature headers.
pub mod headers;
/// Ed25519 key material.
pub mod keys;
/// Cryptographic capability injected into signers and validators.
pub mod provider;
/// Request verification.
pub mod validator;

pub use constructor::{SignatureConstructor, SignedHeaders, SignedRequest};
pub use errors::{KeyError, SignatureError, UnsupportedEnvironment};
pub use headers::{SignedEnvelope, VERSIA_SIGNATURE, VERSIA_SIGNED_AT, VERSIA_SIGNED_BY};
pub use keys::{Keypair, PrivateKey, PublicKey};
pub use provider::{CryptoProvider, Ed25519Provider};
pub use validator::SignatureValidator;
pub use versia_canonical::{CanonicalString, SignedAt};
