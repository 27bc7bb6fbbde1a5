//! The key reader abstraction and its decorators.
//!
//! A [`KeyReader`] yields a store's metadata and the key material of each
//! version. Readers compose by wrapping: an [`EncryptedReader`] or
//! [`PbeReader`] owns the reader it decrypts.

mod encrypted;
mod pbe;

pub use encrypted::{Decrypter, EncryptedReader};
pub use pbe::PbeReader;

use zeroize::Zeroizing;

use crate::error::{ReaderError, Result};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Source of key store metadata and per-version key material.
///
/// Implemented only by the readers in this crate. Every implementation is
/// immutable after construction, so repeated calls for the same version
/// return identical text.
pub trait KeyReader: sealed::Sealed + Send + Sync {
    /// Returns the store's metadata record as JSON text.
    fn metadata(&self) -> Result<String>;

    /// Returns the key material record for `version` as JSON text.
    fn key(&self, version: u32) -> Result<Zeroizing<String>>;
}

impl<R: KeyReader + ?Sized> sealed::Sealed for Box<R> {}

impl<R: KeyReader + ?Sized> KeyReader for Box<R> {
    fn metadata(&self) -> Result<String> {
        (**self).metadata()
    }

    fn key(&self, version: u32) -> Result<Zeroizing<String>> {
        (**self).key(version)
    }
}

/// Converts decrypted bytes to text without leaving copies behind.
pub(crate) fn into_text(mut bytes: Zeroizing<Vec<u8>>) -> Result<Zeroizing<String>> {
    match String::from_utf8(std::mem::take(&mut *bytes)) {
        Ok(text) => Ok(Zeroizing::new(text)),
        Err(err) => {
            drop(Zeroizing::new(err.into_bytes()));
            Err(ReaderError::Decryption(
                "decrypted key is not valid UTF-8".to_string(),
            ))
        }
    }
}
