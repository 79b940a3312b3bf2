//! Transport encoding used by the trivia API for every text field.

use data_encoding::BASE64;

use crate::error::DecodeError;

/// Decode one base64 value straight to plain text.
pub fn decode_text(encoded: &str) -> Result<String, DecodeError> {
    let bytes = BASE64.decode(encoded.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Encode plain text the same way the API does.
pub fn encode_text(plain: &str) -> String {
    BASE64.encode(plain.as_bytes())
}
