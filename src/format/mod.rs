//! JSON schema of the key store.
//!
//! Field names and declaration order match the on-disk format, so serialized
//! output is stable across calls.

use serde::{Deserialize, Serialize};

pub mod envelope;
pub mod keys;

pub use envelope::PbeEnvelope;
pub use keys::{AesKeyJson, CipherMode, HmacKeyJson, RsaPrivateKeyJson, RsaPublicKeyJson};

/// Kind of key held by a store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyType {
    Aes,
    HmacSha1,
    DsaPriv,
    DsaPub,
    RsaPriv,
    RsaPub,
}

/// What a store's keys may be used for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyPurpose {
    DecryptAndEncrypt,
    Encrypt,
    SignAndVerify,
    Verify,
    Test,
}

/// Lifecycle status of a single key version.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyStatus {
    Primary,
    Active,
    Inactive,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyVersion {
    pub version_number: u32,
    pub status: KeyStatus,
    pub exportable: bool,
}

/// The `meta` record of a key store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: KeyType,
    pub purpose: KeyPurpose,
    pub encrypted: bool,
    pub versions: Vec<KeyVersion>,
}

impl KeyMeta {
    /// Metadata for a store fabricated around one imported key.
    ///
    /// The store has a single, primary, non-exportable version numbered 1
    /// and is not encrypted.
    pub fn imported(name: &str, key_type: KeyType, purpose: KeyPurpose) -> Self {
        Self {
            name: name.to_string(),
            key_type,
            purpose,
            encrypted: false,
            versions: vec![KeyVersion {
                version_number: 1,
                status: KeyStatus::Primary,
                exportable: false,
            }],
        }
    }

    /// Returns the primary version, if any.
    pub fn primary(&self) -> Option<&KeyVersion> {
        self.versions.iter().find(|v| v.status == KeyStatus::Primary)
    }
}
