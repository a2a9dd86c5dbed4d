//! Base64 payloads with optional data-URI headers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;

use crate::{BlobError, Result};

/// Drop everything up to and including the first comma.
///
/// `data:image/gif;base64,R0lG...` becomes `R0lG...`; text without a comma is
/// returned unchanged.
pub fn strip_data_uri_prefix(text: &str) -> &str {
    match text.find(',') {
        Some(index) => &text[index + 1..],
        None => text,
    }
}

/// Strip an optional data-URI prefix and decode the remainder.
///
/// ASCII whitespace anywhere in the payload is ignored, so line-wrapped
/// output from `base64` decodes as-is.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let payload: Vec<u8> = strip_data_uri_prefix(text)
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    B64.decode(payload).map_err(|e| BlobError::decode(e.to_string()))
}

/// Lenient form of [`decode_base64`].
pub fn decode_data_uri(text: &str) -> Option<Vec<u8>> {
    match decode_base64(text) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::debug!("discarding undecodable payload: {err}");
            None
        }
    }
}

pub fn encode_base64(bytes: &[u8]) -> String {
    B64.encode(bytes)
}

/// `data:<mime>;base64,<payload>`
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", encode_base64(bytes))
}
