use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

use super::KEY_LEN;
use crate::error::{ReaderError, Result};

/// Derives the 128-bit PBE key from `password` with PBKDF2-HMAC-SHA1.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    if iterations < 1 {
        return Err(ReaderError::InvalidEnvelope(
            "iteration count must be >= 1".to_string(),
        ));
    }

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut key[..]);
    Ok(key)
}
