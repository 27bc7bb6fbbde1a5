//! URL-safe, unpadded base64 as used by every binary field of the key store.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

use crate::error::{ReaderError, Result};

pub fn encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decodes `text`, tolerating trailing `=` padding.
///
/// `field` names the value being decoded and is reported on failure.
pub fn decode(field: &'static str, text: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(text.trim_end_matches('='))
        .map_err(|source| ReaderError::Base64 { field, source })
}
