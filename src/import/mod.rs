//! Importing keys from foreign formats.
//!
//! Each entry point loads a key from a PEM file and wraps it in a reader
//! that reports a fabricated single-version store.

mod imported;
mod loader;

pub use imported::{
    AesKey, ImportedAesKeyReader, ImportedRsaPrivateKeyReader, ImportedRsaPublicKeyReader,
};
pub use loader::{
    RSA_ENCRYPTION, rsa_private_key_from_pem, rsa_public_key_from_certificate,
    rsa_public_key_from_pem,
};

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::format::KeyPurpose;

fn import_private(path: &Path, purpose: KeyPurpose) -> Result<ImportedRsaPrivateKeyReader> {
    let key = rsa_private_key_from_pem(path)?;
    debug!(path = %path.display(), ?purpose, "imported RSA private key");
    Ok(ImportedRsaPrivateKeyReader::new(&key, purpose))
}

fn import_public(path: &Path, purpose: KeyPurpose) -> Result<ImportedRsaPublicKeyReader> {
    let key = rsa_public_key_from_pem(path)?;
    debug!(path = %path.display(), ?purpose, "imported RSA public key");
    Ok(ImportedRsaPublicKeyReader::new(&key, purpose))
}

fn import_certificate(path: &Path, purpose: KeyPurpose) -> Result<ImportedRsaPublicKeyReader> {
    let key = rsa_public_key_from_certificate(path)?;
    debug!(path = %path.display(), ?purpose, "imported RSA public key from certificate");
    Ok(ImportedRsaPublicKeyReader::new(&key, purpose))
}

/// Imports a PKCS #1 RSA private key for signing and verification.
pub fn import_rsa_key_from_pem_for_signing(
    path: impl AsRef<Path>,
) -> Result<ImportedRsaPrivateKeyReader> {
    import_private(path.as_ref(), KeyPurpose::SignAndVerify)
}

/// Imports a PKCS #1 RSA private key for encryption and decryption.
pub fn import_rsa_key_from_pem_for_crypt(
    path: impl AsRef<Path>,
) -> Result<ImportedRsaPrivateKeyReader> {
    import_private(path.as_ref(), KeyPurpose::DecryptAndEncrypt)
}

/// Imports a PKIX RSA public key for encryption only.
pub fn import_rsa_public_key_from_pem_for_encryption(
    path: impl AsRef<Path>,
) -> Result<ImportedRsaPublicKeyReader> {
    import_public(path.as_ref(), KeyPurpose::Encrypt)
}

/// Imports a PKIX RSA public key for verification only.
pub fn import_rsa_public_key_from_pem_for_verify(
    path: impl AsRef<Path>,
) -> Result<ImportedRsaPublicKeyReader> {
    import_public(path.as_ref(), KeyPurpose::Verify)
}

/// Imports the RSA key of an X.509 certificate for verification only.
pub fn import_rsa_public_key_from_certificate_for_verify(
    path: impl AsRef<Path>,
) -> Result<ImportedRsaPublicKeyReader> {
    import_certificate(path.as_ref(), KeyPurpose::Verify)
}

/// Imports the RSA key of an X.509 certificate for encryption only.
pub fn import_rsa_public_key_from_certificate_for_crypt(
    path: impl AsRef<Path>,
) -> Result<ImportedRsaPublicKeyReader> {
    import_certificate(path.as_ref(), KeyPurpose::Encrypt)
}
