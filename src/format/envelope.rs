//! Password-based encryption envelope.
//!
//! Format:
//! ```text
//! {"cipher":"AES128","hmac":"HMAC_SHA1","iterationCount":N,"iv":..,"key":..,"salt":..}
//! ```
//! `key` holds the encrypted key material record.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::crypto::{self, web64};
use crate::error::{ReaderError, Result};

/// The only cipher identifier accepted in an envelope.
pub const SUPPORTED_CIPHER: &str = "AES128";
/// The only HMAC identifier accepted in an envelope.
pub const SUPPORTED_HMAC: &str = "HMAC_SHA1";

/// A parsed envelope. Missing fields default to empty/zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PbeEnvelope {
    pub cipher: String,
    pub hmac: String,
    pub iteration_count: u32,
    pub iv: String,
    pub key: String,
    pub salt: String,
}

impl PbeEnvelope {
    /// Parses an envelope from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Json`] if `text` is not a JSON object of the
    /// expected shape. Absent fields are not an error.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Rejects any cipher or HMAC other than AES128 / HMAC_SHA1.
    pub fn check_algorithms(&self) -> Result<()> {
        if self.cipher != SUPPORTED_CIPHER {
            return Err(ReaderError::UnsupportedAlgorithm {
                field: "cipher",
                value: self.cipher.clone(),
            });
        }
        if self.hmac != SUPPORTED_HMAC {
            return Err(ReaderError::UnsupportedAlgorithm {
                field: "hmac",
                value: self.hmac.clone(),
            });
        }
        Ok(())
    }

    /// Derives the key from `password` and decrypts the wrapped record.
    ///
    /// The result keeps whatever block padding the ciphertext carried.
    pub fn open(&self, password: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        self.check_algorithms()?;

        let salt = web64::decode("salt", &self.salt)?;
        let iv = web64::decode("iv", &self.iv)?;
        let ciphertext = web64::decode("key", &self.key)?;

        let key = crypto::derive_key(password, &salt, self.iteration_count)?;
        let plaintext = crypto::decrypt(&key[..], &iv, &ciphertext)?;

        Ok(Zeroizing::new(plaintext))
    }
}
