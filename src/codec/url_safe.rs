//! URL-safe base64 used for path segments.
//!
//! Standard base64 with `+` replaced by `-` and `/` by `_`. Padding is kept on
//! encode and optional on decode.

use super::error::DecodeFailure;
use base64::alphabet;
use base64::engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// Standard alphabet that accepts both padded and unpadded input.
const STANDARD_ANY_PADDING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes text as URL-safe base64 (UTF-8 bytes).
pub fn encode(text: &str) -> String {
    general_purpose::STANDARD
        .encode(text.as_bytes())
        .replace('+', "-")
        .replace('/', "_")
}

/// Decodes URL-safe base64 back into UTF-8 text.
///
/// Standard-alphabet input is accepted too, since `+` and `/` are left alone.
pub fn decode(encoded: &str) -> Result<String, DecodeFailure> {
    let standard = encoded.replace('-', "+").replace('_', "/");
    let bytes = STANDARD_ANY_PADDING
        .decode(standard.as_bytes())
        .map_err(DecodeFailure::Base64)?;
    String::from_utf8(bytes).map_err(DecodeFailure::Utf8)
}
