use ed25519_dalek::{Signature, Signer, Verifier};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::errors::UnsupportedEnvironment;
use crate::keys::{PrivateKey, PublicKey};

/// Cryptographic primitives used by signers and validators.
///
/// Signers and validators call [`CryptoProvider::ensure_supported`] once, at
/// construction, and keep the provider for every later call. Implementations
/// must be stateless per call so a single provider can serve concurrent
/// requests.
pub trait CryptoProvider: fmt::Debug + Send + Sync {
    /// Short provider name, used in logs and errors.
    fn name(&self) -> &str;

    /// Fails when the primitives below cannot be used in this environment.
    fn ensure_supported(&self) -> Result<(), UnsupportedEnvironment>;

    /// SHA-256 of `data`.
    fn sha256(&self, data: &[u8]) -> [u8; 32];

    /// Ed25519 signature of `message`.
    fn sign(&self, key: &PrivateKey, message: &[u8]) -> [u8; 64];

    /// Checks an Ed25519 signature of `message`.
    fn verify(&self, key: &PublicKey, message: &[u8], signature: &[u8; 64]) -> bool;
}

/// Pure-Rust provider backed by `ed25519-dalek` and `sha2`. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Provider;

impl CryptoProvider for Ed25519Provider {
    fn name(&self) -> &str {
        "ed25519-dalek"
    }

    fn ensure_supported(&self) -> Result<(), UnsupportedEnvironment> {
        Ok(())
    }

    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }

    fn sign(&self, key: &PrivateKey, message: &[u8]) -> [u8; 64] {
        key.as_dalek().sign(message).to_bytes()
    }

    fn verify(&self, key: &PublicKey, message: &[u8], signature: &[u8; 64]) -> bool {
        let signature = Signature::from_bytes(signature);
        key.as_dalek().verify(message, &signature).is_ok()
    }
}
