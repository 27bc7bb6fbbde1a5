//! Loaders for keys kept outside a key store, in PEM files.

use std::path::Path;

use der::Decode;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use spki::{ObjectIdentifier, SubjectPublicKeyInfoOwned};
use tracing::debug;
use x509_cert::Certificate;
use zeroize::Zeroizing;

use crate::error::{ReaderError, Result};
use crate::storage::slurp;

/// `rsaEncryption` from PKCS #1.
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Reads `path` and returns the DER payload of its first PEM block.
fn read_pem(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let text = Zeroizing::new(slurp(path)?);
    let block = pem::parse(text.as_bytes())?;
    debug!(path = %path.display(), tag = block.tag(), "decoded PEM block");
    Ok(Zeroizing::new(block.into_contents()))
}

fn rsa_from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<RsaPublicKey> {
    if spki.algorithm.oid != RSA_ENCRYPTION {
        return Err(ReaderError::NotRsaKey {
            algorithm: spki.algorithm.oid.to_string(),
        });
    }
    Ok(RsaPublicKey::from_pkcs1_der(
        spki.subject_public_key.raw_bytes(),
    )?)
}

/// Loads a PKCS #1 RSA private key (`RSA PRIVATE KEY`) from a PEM file.
pub fn rsa_private_key_from_pem(path: impl AsRef<Path>) -> Result<RsaPrivateKey> {
    let der = read_pem(path.as_ref())?;
    Ok(RsaPrivateKey::from_pkcs1_der(&der)?)
}

/// Loads a PKIX public key (`PUBLIC KEY`) from a PEM file.
///
/// # Errors
///
/// Returns [`ReaderError::NotRsaKey`] if the key parses but is not RSA.
pub fn rsa_public_key_from_pem(path: impl AsRef<Path>) -> Result<RsaPublicKey> {
    let der = read_pem(path.as_ref())?;
    let spki = SubjectPublicKeyInfoOwned::from_der(&der)?;
    rsa_from_spki(&spki)
}

/// Loads the subject public key of a PEM encoded X.509 certificate.
///
/// # Errors
///
/// Returns [`ReaderError::NotRsaKey`] if the certificate key is not RSA.
pub fn rsa_public_key_from_certificate(path: impl AsRef<Path>) -> Result<RsaPublicKey> {
    let der = read_pem(path.as_ref())?;
    let cert = Certificate::from_der(&der)?;
    rsa_from_spki(&cert.tbs_certificate.subject_public_key_info)
}
