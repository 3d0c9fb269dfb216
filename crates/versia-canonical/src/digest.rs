use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::validation::ValidationError;

/// SHA-256 digest of a raw request body, base64-encoded (standard alphabet, padded).
///
/// The digest always covers the exact bytes put on the wire. An absent body
/// digests as the empty byte string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyDigest(String);

impl BodyDigest {
    /// Hashes `body` with SHA-256.
    pub fn compute(body: &[u8]) -> Self {
        Self::from_hash(Sha256::digest(body).into())
    }

    /// Wraps an already computed SHA-256 hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(STANDARD.encode(hash))
    }

    /// Parses a base64-encoded SHA-256 digest.
    pub fn parse(b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        let re = Regex::new(r"^[A-Za-z0-9+/]{43}=$").expect("invalid regex");
        if !re.is_match(&b64) {
            return Err(ValidationError::PatternMismatch {
                field: "body_digest",
                value: b64,
            });
        }
        Ok(Self(b64))
    }

    /// Base64 text of the digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BodyDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
