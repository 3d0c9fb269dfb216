use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use http::{HeaderMap, Method, Request};
use std::sync::Arc;
use versia_canonical::{BodyDigest, CanonicalString, SignedAt, SigningContext};

use crate::errors::SignatureError;
use crate::headers::{header_value, SignedEnvelope, SIGNED_BY_DISPLAY, VERSIA_SIGNED_AT};
use crate::keys::{PrivateKey, PublicKey};
use crate::provider::{CryptoProvider, Ed25519Provider};

/// Headers produced by [`SignatureConstructor::sign_components`].
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    /// Caller headers merged with the three signature headers.
    pub headers: HeaderMap,
    /// The signature values written into `headers`.
    pub envelope: SignedEnvelope,
    /// The string that was signed.
    pub canonical_string: CanonicalString,
}

/// Request produced by [`SignatureConstructor::sign_request`].
#[derive(Debug)]
pub struct SignedRequest<B> {
    /// Copy of the input request carrying the signature headers.
    pub request: Request<B>,
    /// The string that was signed.
    pub canonical_string: CanonicalString,
}

/// Signs outgoing federation requests on behalf of one actor.
#[derive(Debug, Clone)]
pub struct SignatureConstructor {
    private_key: PrivateKey,
    actor: String,
    provider: Arc<dyn CryptoProvider>,
}

impl SignatureConstructor {
    /// Creates a signer using the default [`Ed25519Provider`].
    pub fn new(private_key: PrivateKey, actor: impl Into<String>) -> Result<Self, SignatureError> {
        Self::with_provider(private_key, actor, Arc::new(Ed25519Provider))
    }

    /// Creates a signer backed by `provider`.
    ///
    /// The provider is checked here, once. The actor URI must be usable as a
    /// header value; it is not otherwise validated.
    pub fn with_provider(
        private_key: PrivateKey,
        actor: impl Into<String>,
        provider: Arc<dyn CryptoProvider>,
    ) -> Result<Self, SignatureError> {
        provider.ensure_supported()?;
        let actor = actor.into();
        header_value(SIGNED_BY_DISPLAY, &actor)?;
        Ok(Self {
            private_key,
            actor,
            provider,
        })
    }

    /// Imports a base64 PKCS8 private key and creates a signer.
    pub fn from_base64_key(
        base64_private_key: &str,
        actor: impl Into<String>,
    ) -> Result<Self, SignatureError> {
        Self::from_base64_key_with_provider(base64_private_key, actor, Arc::new(Ed25519Provider))
    }

    /// Imports a base64 PKCS8 private key and creates a signer backed by `provider`.
    pub fn from_base64_key_with_provider(
        base64_private_key: &str,
        actor: impl Into<String>,
        provider: Arc<dyn CryptoProvider>,
    ) -> Result<Self, SignatureError> {
        provider.ensure_supported()?;
        let private_key = PrivateKey::from_base64(base64_private_key)?;
        Self::with_provider(private_key, actor, provider)
    }

    /// URI of the signing actor.
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Public key matching the signing key.
    pub fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }

    /// Signs a request described by its parts.
    ///
    /// `body` is digested exactly as given (`None` digests the empty string).
    /// `signed_at` defaults to the current time. The result contains a copy of
    /// `headers` (or an empty map) with `Versia-Signature`, `Versia-Signed-At`
    /// and `Versia-Signed-By` set; `headers` itself is not modified.
    pub fn sign_components(
        &self,
        method: &Method,
        path: &str,
        body: Option<&[u8]>,
        headers: Option<&HeaderMap>,
        signed_at: Option<SignedAt>,
    ) -> Result<SignedHeaders, SignatureError> {
        let signed_at = signed_at.unwrap_or_else(now);
        let body_digest = BodyDigest::from_hash(self.provider.sha256(body.unwrap_or_default()));
        let context = SigningContext::new(method.as_str(), path, signed_at.clone(), body_digest);
        let canonical_string = context.canonical_string();

        let signature = self
            .provider
            .sign(&self.private_key, canonical_string.as_bytes());
        let envelope = SignedEnvelope {
            signature: BASE64.encode(signature),
            signed_at,
            signed_by: Some(self.actor.clone()),
        };

        let mut headers = headers.cloned().unwrap_or_default();
        envelope.apply_to(&mut headers)?;

        tracing::debug!(
            actor = %self.actor,
            method = %method,
            path,
            signed_at = %envelope.signed_at,
            "signed federation request"
        );

        Ok(SignedHeaders {
            headers,
            envelope,
            canonical_string,
        })
    }

    /// Signs a complete request and returns a signed copy.
    ///
    /// The body is borrowed, never consumed, and cloned into the copy. When the
    /// request already carries `Versia-Signed-At`, that timestamp is reused.
    /// Request extensions are not carried over.
    pub fn sign_request<B>(&self, request: &Request<B>) -> Result<SignedRequest<B>, SignatureError>
    where
        B: AsRef<[u8]> + Clone,
    {
        let signed_at = request
            .headers()
            .get(&VERSIA_SIGNED_AT)
            .map(|value| {
                value
                    .to_str()
                    .map_err(|e| SignatureError::MalformedTimestamp(e.to_string()))
                    .and_then(|value| {
                        SignedAt::parse(value)
                            .map_err(|e| SignatureError::MalformedTimestamp(e.to_string()))
                    })
            })
            .transpose()?;

        let signed = self.sign_components(
            request.method(),
            request.uri().path(),
            Some(request.body().as_ref()),
            Some(request.headers()),
            signed_at,
        )?;

        let mut copy = Request::new(request.body().clone());
        *copy.method_mut() = request.method().clone();
        *copy.uri_mut() = request.uri().clone();
        *copy.version_mut() = request.version();
        *copy.headers_mut() = signed.headers;

        Ok(SignedRequest {
            request: copy,
            canonical_string: signed.canonical_string,
        })
    }
}

fn now() -> SignedAt {
    SignedAt::from_secs(chrono::Utc::now().timestamp())
}
