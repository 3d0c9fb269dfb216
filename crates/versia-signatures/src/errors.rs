use thiserror::Error;

/// Key import and export errors.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Key text is not valid base64.
    #[error("key is not valid base64: {0}")]
    InvalidBase64(String),
    /// Bytes are not a PKCS8-encoded Ed25519 private key.
    #[error("invalid PKCS8 Ed25519 private key: {0}")]
    InvalidPkcs8(String),
    /// Bytes are not an SPKI-encoded Ed25519 public key.
    #[error("invalid SPKI Ed25519 public key: {0}")]
    InvalidSpki(String),
    /// Key could not be serialized.
    #[error("key export failed: {0}")]
    Export(String),
}

/// The crypto provider cannot run in this environment.
#[derive(Error, Debug)]
#[error("crypto provider {provider} is unavailable: {reason}")]
pub struct UnsupportedEnvironment {
    /// Provider name.
    pub provider: String,
    /// Why the provider is unavailable.
    pub reason: String,
}

/// Signing and verification errors.
///
/// A signature that does not match is not an error: validators return
/// `Ok(false)` for it. These variants cover requests that cannot be evaluated.
#[derive(Error, Debug)]
pub enum SignatureError {
    /// Required cryptographic primitives are unavailable.
    #[error(transparent)]
    UnsupportedEnvironment(#[from] UnsupportedEnvironment),
    /// Key material could not be imported.
    #[error("key import failed: {0}")]
    KeyImport(#[from] KeyError),
    /// Required signature headers are absent from the request.
    #[error("headers are missing in request: {}", .headers.join(", "))]
    MissingHeaders {
        /// Names of the missing headers.
        headers: Vec<&'static str>,
    },
    /// Signature value is not valid base64.
    #[error("signature is not valid base64: {0}")]
    MalformedSignature(String),
    /// Timestamp value is not a decimal number of seconds.
    #[error("signature timestamp is malformed: {0}")]
    MalformedTimestamp(String),
    /// A value cannot be carried in an HTTP header.
    #[error("invalid header value for {name}: {reason}")]
    InvalidHeaderValue {
        /// Header the value was destined for.
        name: &'static str,
        /// Underlying reason.
        reason: String,
    },
}
