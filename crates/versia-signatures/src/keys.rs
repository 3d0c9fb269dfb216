use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use ed25519_dalek::{SigningKey, VerifyingKey};
use std::fmt;

use crate::errors::KeyError;

fn decode_key_text(b64: &str) -> Result<Vec<u8>, KeyError> {
    BASE64
        .decode(b64.trim())
        .map_err(|e| KeyError::InvalidBase64(e.to_string()))
}

/// Ed25519 private key, used only for signing.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Imports a PKCS8 (RFC 8410) DER-encoded private key.
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self, KeyError> {
        let inner =
            SigningKey::from_pkcs8_der(der).map_err(|e| KeyError::InvalidPkcs8(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Imports a base64-encoded PKCS8 private key.
    pub fn from_base64(b64: &str) -> Result<Self, KeyError> {
        Self::from_pkcs8_der(&decode_key_text(b64)?)
    }

    /// Exports the key as PKCS8 DER.
    pub fn to_pkcs8_der(&self) -> Result<Vec<u8>, KeyError> {
        self.inner
            .to_pkcs8_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|e| KeyError::Export(e.to_string()))
    }

    /// Exports the key as base64-encoded PKCS8 DER.
    pub fn to_pkcs8_base64(&self) -> Result<String, KeyError> {
        Ok(BASE64.encode(self.to_pkcs8_der()?))
    }

    /// Derives the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.verifying_key(),
        }
    }

    /// Underlying `ed25519-dalek` key, for crypto providers.
    pub fn as_dalek(&self) -> &SigningKey {
        &self.inner
    }
}

impl From<SigningKey> for PrivateKey {
    fn from(inner: SigningKey) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Ed25519 public key, used only for verification.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Imports an SPKI DER-encoded public key.
    pub fn from_spki_der(der: &[u8]) -> Result<Self, KeyError> {
        let inner = VerifyingKey::from_public_key_der(der)
            .map_err(|e| KeyError::InvalidSpki(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Imports a base64-encoded SPKI public key.
    pub fn from_base64(b64: &str) -> Result<Self, KeyError> {
        Self::from_spki_der(&decode_key_text(b64)?)
    }

    /// Exports the key as SPKI DER.
    pub fn to_spki_der(&self) -> Result<Vec<u8>, KeyError> {
        self.inner
            .to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|e| KeyError::Export(e.to_string()))
    }

    /// Exports the key as base64-encoded SPKI DER.
    pub fn to_spki_base64(&self) -> Result<String, KeyError> {
        Ok(BASE64.encode(self.to_spki_der()?))
    }

    /// Raw 32-byte key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.inner.as_bytes()
    }

    /// Underlying `ed25519-dalek` key, for crypto providers.
    pub fn as_dalek(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(inner: VerifyingKey) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey")
            .field(&BASE64.encode(self.inner.as_bytes()))
            .finish()
    }
}

/// An Ed25519 key pair.
#[derive(Debug, Clone)]
pub struct Keypair {
    private: PrivateKey,
    public: PublicKey,
}

impl Keypair {
    /// Generates a fresh key pair from the operating system RNG.
    pub fn generate() -> Self {
        let mut rng = rand::rngs::OsRng;
        Self::from_private(PrivateKey::from(SigningKey::generate(&mut rng)))
    }

    /// Builds a key pair around an existing private key.
    pub fn from_private(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }

    /// Private half.
    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    /// Public half.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Splits the pair into its halves.
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}
