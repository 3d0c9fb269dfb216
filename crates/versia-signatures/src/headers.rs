use http::header::{HeaderMap, HeaderName, HeaderValue};
use versia_canonical::SignedAt;

use crate::errors::SignatureError;

/// Base64 of the raw Ed25519 signature over the canonical string.
pub const VERSIA_SIGNATURE: HeaderName = HeaderName::from_static("versia-signature");
/// Decimal Unix seconds used when building the canonical string.
pub const VERSIA_SIGNED_AT: HeaderName = HeaderName::from_static("versia-signed-at");
/// URI of the signing actor. Informational only; it is not covered by the signature.
pub const VERSIA_SIGNED_BY: HeaderName = HeaderName::from_static("versia-signed-by");

pub(crate) const SIGNATURE_DISPLAY: &str = "Versia-Signature";
pub(crate) const SIGNED_AT_DISPLAY: &str = "Versia-Signed-At";
pub(crate) const SIGNED_BY_DISPLAY: &str = "Versia-Signed-By";

/// Result of signing a request, as carried in its headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    /// Base64 signature.
    pub signature: String,
    /// Timestamp the canonical string was built with.
    pub signed_at: SignedAt,
    /// Actor URI of the signer, when known.
    pub signed_by: Option<String>,
}

impl SignedEnvelope {
    /// Reads the envelope from request headers.
    ///
    /// Fails with [`SignatureError::MissingHeaders`] naming every absent
    /// required header, so callers can tell a malformed request from a
    /// rejected one. An empty value counts as absent.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, SignatureError> {
        let signature = headers.get(&VERSIA_SIGNATURE).filter(|v| !v.is_empty());
        let signed_at = headers.get(&VERSIA_SIGNED_AT).filter(|v| !v.is_empty());

        let (signature, signed_at) = match (signature, signed_at) {
            (Some(signature), Some(signed_at)) => (signature, signed_at),
            (signature, signed_at) => {
                let mut missing = Vec::new();
                if signature.is_none() {
                    missing.push(SIGNATURE_DISPLAY);
                }
                if signed_at.is_none() {
                    missing.push(SIGNED_AT_DISPLAY);
                }
                return Err(SignatureError::MissingHeaders { headers: missing });
            }
        };

        let signature = signature
            .to_str()
            .map_err(|e| SignatureError::MalformedSignature(e.to_string()))?
            .to_string();
        let signed_at = signed_at
            .to_str()
            .map_err(|e| SignatureError::MalformedTimestamp(e.to_string()))
            .and_then(|value| {
                SignedAt::parse(value)
                    .map_err(|e| SignatureError::MalformedTimestamp(e.to_string()))
            })?;
        let signed_by = headers
            .get(&VERSIA_SIGNED_BY)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(Self {
            signature,
            signed_at,
            signed_by,
        })
    }

    /// Writes the envelope into `headers`, replacing earlier signature headers
    /// and leaving every other header untouched.
    pub fn apply_to(&self, headers: &mut HeaderMap) -> Result<(), SignatureError> {
        headers.insert(
            VERSIA_SIGNED_AT,
            header_value(SIGNED_AT_DISPLAY, &self.signed_at.to_string())?,
        );
        headers.insert(
            VERSIA_SIGNATURE,
            header_value(SIGNATURE_DISPLAY, &self.signature)?,
        );
        if let Some(signed_by) = &self.signed_by {
            headers.insert(
                VERSIA_SIGNED_BY,
                header_value(SIGNED_BY_DISPLAY, signed_by)?,
            );
        }
        Ok(())
    }
}

pub(crate) fn header_value(
    name: &'static str,
    value: &str,
) -> Result<HeaderValue, SignatureError> {
    HeaderValue::from_str(value).map_err(|e| SignatureError::InvalidHeaderValue {
        name,
        reason: e.to_string(),
    })
}
