use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Standard-alphabet base64 that accepts missing padding and stray trailing bits.
///
/// Only characters outside the alphabet, or an impossible length, fail to decode.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes a signature header value.
pub fn decode_signature(value: &str) -> Result<Vec<u8>, base64::DecodeError> {
    LENIENT.decode(value)
}
