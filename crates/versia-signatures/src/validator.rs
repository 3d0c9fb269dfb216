use http::{Method, Request};
use std::sync::Arc;
use versia_canonical::{BodyDigest, SignedAt, SigningContext};

use crate::encoding::decode_signature;
use crate::errors::SignatureError;
use crate::headers::SignedEnvelope;
use crate::keys::PublicKey;
use crate::provider::{CryptoProvider, Ed25519Provider};

/// Verifies incoming federation requests against one actor's public key.
///
/// The key is immutable after construction, so one validator can be shared
/// across threads and used for concurrent requests.
#[derive(Debug, Clone)]
pub struct SignatureValidator {
    public_key: PublicKey,
    provider: Arc<dyn CryptoProvider>,
}

impl SignatureValidator {
    /// Creates a validator using the default [`Ed25519Provider`].
    pub fn new(public_key: PublicKey) -> Result<Self, SignatureError> {
        Self::with_provider(public_key, Arc::new(Ed25519Provider))
    }

    /// Creates a validator backed by `provider`, checked once here.
    pub fn with_provider(
        public_key: PublicKey,
        provider: Arc<dyn CryptoProvider>,
    ) -> Result<Self, SignatureError> {
        provider.ensure_supported()?;
        Ok(Self {
            public_key,
            provider,
        })
    }

    /// Imports a base64 SPKI public key and creates a validator.
    pub fn from_base64_key(base64_public_key: &str) -> Result<Self, SignatureError> {
        Self::from_base64_key_with_provider(base64_public_key, Arc::new(Ed25519Provider))
    }

    /// Imports a base64 SPKI public key and creates a validator backed by `provider`.
    pub fn from_base64_key_with_provider(
        base64_public_key: &str,
        provider: Arc<dyn CryptoProvider>,
    ) -> Result<Self, SignatureError> {
        provider.ensure_supported()?;
        let public_key = PublicKey::from_base64(base64_public_key)?;
        Self::with_provider(public_key, provider)
    }

    /// Key signatures are checked against.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Verifies a request from its `Versia-Signature` and `Versia-Signed-At`
    /// headers, method, URI path and body.
    ///
    /// Returns `Ok(false)` when the signature does not match. Returns an error
    /// when a required header is missing or malformed.
    pub fn validate_request<B>(&self, request: &Request<B>) -> Result<bool, SignatureError>
    where
        B: AsRef<[u8]>,
    {
        let envelope = SignedEnvelope::from_headers(request.headers())?;
        self.validate_components(
            &envelope.signature,
            envelope.signed_at,
            request.method(),
            request.uri().path(),
            request.body().as_ref(),
        )
    }

    /// Verifies a signature over already extracted request parts.
    ///
    /// Fails with [`SignatureError::MalformedSignature`] when `signature` is
    /// not base64. A decoded signature of the wrong length verifies as `false`.
    pub fn validate_components(
        &self,
        signature: &str,
        signed_at: SignedAt,
        method: &Method,
        path: &str,
        body: &[u8],
    ) -> Result<bool, SignatureError> {
        let raw = decode_signature(signature)
            .map_err(|e| SignatureError::MalformedSignature(e.to_string()))?;

        let body_digest = BodyDigest::from_hash(self.provider.sha256(body));
        let context = SigningContext::new(method.as_str(), path, signed_at.clone(), body_digest);
        let canonical_string = context.canonical_string();

        let valid = match <[u8; 64]>::try_from(raw.as_slice()) {
            Ok(raw) => self
                .provider
                .verify(&self.public_key, canonical_string.as_bytes(), &raw),
            Err(_) => false,
        };

        tracing::debug!(
            method = %method,
            path,
            signed_at = %signed_at,
            valid,
            "verified federation request signature"
        );

        Ok(valid)
    }
}
