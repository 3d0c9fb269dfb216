use serde::{Deserialize, Serialize};
use std::fmt;

use crate::digest::BodyDigest;
use crate::encoding::encode_path;
use crate::timestamp::SignedAt;

/// The exact UTF-8 string that gets signed and verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalString(String);

impl CanonicalString {
    /// Borrows the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bytes handed to the signature primitive.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consumes the canonical string, returning the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the canonical string for a request.
///
/// Format: `"<method lowercased> <encode_path(path)> <timestamp> <digest>"`.
///
/// The method is lowercased with ASCII rules only, so the output never depends
/// on locale. `timestamp` is written as displayed, e.g. a [`SignedAt`] keeps
/// the text it was parsed from.
pub fn build(
    method: &str,
    path: &str,
    timestamp: impl fmt::Display,
    body_digest: &str,
) -> CanonicalString {
    CanonicalString(format!(
        "{} {} {} {}",
        method.to_ascii_lowercase(),
        encode_path(path),
        timestamp,
        body_digest
    ))
}

/// Everything that determines a request signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    method: String,
    path: String,
    signed_at: SignedAt,
    body_digest: BodyDigest,
}

impl SigningContext {
    /// Creates a context from an already computed body digest.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        signed_at: SignedAt,
        body_digest: BodyDigest,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            signed_at,
            body_digest,
        }
    }

    /// Creates a context by digesting the raw `body` bytes.
    pub fn for_body(
        method: impl Into<String>,
        path: impl Into<String>,
        signed_at: SignedAt,
        body: &[u8],
    ) -> Self {
        Self::new(method, path, signed_at, BodyDigest::compute(body))
    }

    /// HTTP method as supplied (not yet lowercased).
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request path as supplied (not yet encoded).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Signing timestamp.
    pub fn signed_at(&self) -> &SignedAt {
        &self.signed_at
    }

    /// Digest of the request body.
    pub fn body_digest(&self) -> &BodyDigest {
        &self.body_digest
    }

    /// Renders the canonical string for this context.
    pub fn canonical_string(&self) -> CanonicalString {
        build(
            &self.method,
            &self.path,
            &self.signed_at,
            self.body_digest.as_str(),
        )
    }
}
