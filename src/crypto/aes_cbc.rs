use aes::Aes128;
use cbc::cipher::{BlockDecryptMut, KeyIvInit, block_padding::NoPadding};

use super::BLOCK_LEN;
use crate::error::{ReaderError, Result};

type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Decrypts `ciphertext` with AES-128-CBC.
///
/// The plaintext has exactly the length of the ciphertext; padding is left
/// in place for the caller.
///
/// # Errors
///
/// Fails if the key or IV have the wrong length, or the ciphertext is not a
/// whole number of blocks.
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let decryptor = Aes128CbcDec::new_from_slices(key, iv).map_err(|_| {
        ReaderError::InvalidEnvelope(format!(
            "expected a {}-byte key and IV, got {} and {}",
            BLOCK_LEN,
            key.len(),
            iv.len()
        ))
    })?;

    decryptor
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| {
            ReaderError::InvalidEnvelope(format!(
                "ciphertext length {} is not a multiple of {BLOCK_LEN}",
                ciphertext.len()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use cbc::cipher::{BlockEncryptMut, block_padding::Pkcs7};

    const KEY: [u8; 16] = [3u8; 16];
    const IV: [u8; 16] = [9u8; 16];

    fn encrypt(plaintext: &[u8]) -> Vec<u8> {
        cbc::Encryptor::<Aes128>::new(&KEY.into(), &IV.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    #[test]
    fn padding_is_not_removed() {
        let ciphertext = encrypt(b"secret data");
        let plaintext = decrypt(&KEY, &IV, &ciphertext).unwrap();

        assert_eq!(plaintext.len(), ciphertext.len());
        assert_eq!(&plaintext[..11], b"secret data");
        assert!(plaintext[11..].iter().all(|&b| b == 5));
    }

    #[test]
    fn wrong_iv_length_fails() {
        let ciphertext = encrypt(b"secret data");
        let err = decrypt(&KEY, &IV[..8], &ciphertext).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn partial_block_fails() {
        let ciphertext = encrypt(b"secret data");
        assert!(decrypt(&KEY, &IV, &ciphertext[..15]).is_err());
    }

    #[test]
    fn empty_ciphertext_gives_empty_plaintext() {
        assert!(decrypt(&KEY, &IV, &[]).unwrap().is_empty());
    }
}
