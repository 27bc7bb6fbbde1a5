use zeroize::Zeroizing;

use super::{KeyReader, into_text, sealed};
use crate::error::Result;

/// Decrypts key material with a key the caller already holds.
///
/// Implementations own their key and algorithm.
pub trait Decrypter: Send + Sync {
    fn decrypt(&self, ciphertext: &str) -> Result<Vec<u8>>;
}

impl<F> Decrypter for F
where
    F: Fn(&str) -> Result<Vec<u8>> + Send + Sync,
{
    fn decrypt(&self, ciphertext: &str) -> Result<Vec<u8>> {
        self(ciphertext)
    }
}

/// Reader for a store whose key versions are encrypted by another key.
///
/// Metadata is never encrypted and passes through unchanged.
pub struct EncryptedReader<R, D> {
    reader: R,
    decrypter: D,
}

impl<R: KeyReader, D: Decrypter> EncryptedReader<R, D> {
    pub fn new(reader: R, decrypter: D) -> Self {
        Self { reader, decrypter }
    }
}

impl<R, D> sealed::Sealed for EncryptedReader<R, D> {}

impl<R: KeyReader, D: Decrypter> KeyReader for EncryptedReader<R, D> {
    fn metadata(&self) -> Result<String> {
        self.reader.metadata()
    }

    fn key(&self, version: u32) -> Result<Zeroizing<String>> {
        let ciphertext = self.reader.key(version)?;
        let plaintext = Zeroizing::new(self.decrypter.decrypt(&ciphertext)?);
        into_text(plaintext)
    }
}
