use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a [`ReaderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file was missing or unreadable.
    Io,
    /// Malformed PEM armour or base64 text.
    Decode,
    /// Malformed DER, JSON or envelope structure.
    Parse,
    /// A key was parsed but is not the kind of key required.
    WrongKeyType,
    /// A PBE envelope declares an algorithm that is not supported.
    UnsupportedAlgorithm,
    /// The decryption step itself failed.
    Decryption,
}

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no PEM block found: {0}")]
    Pem(#[from] pem::PemError),

    #[error("malformed base64 in '{field}': {source}")]
    Base64 {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("malformed DER structure: {0}")]
    Der(#[from] der::Error),

    #[error("malformed RSA key: {0}")]
    Rsa(#[from] rsa::pkcs1::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid key envelope: {0}")]
    InvalidEnvelope(String),

    #[error("expected an RSA key, found algorithm {algorithm}")]
    NotRsaKey { algorithm: String },

    #[error("unsupported {field} '{value}' in key envelope")]
    UnsupportedAlgorithm { field: &'static str, value: String },

    #[error("decryption failed: {0}")]
    Decryption(String),
}

impl ReaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReaderError::Io { .. } => ErrorKind::Io,
            ReaderError::Pem(_) | ReaderError::Base64 { .. } => ErrorKind::Decode,
            ReaderError::Der(_)
            | ReaderError::Rsa(_)
            | ReaderError::Json(_)
            | ReaderError::InvalidEnvelope(_) => ErrorKind::Parse,
            ReaderError::NotRsaKey { .. } => ErrorKind::WrongKeyType,
            ReaderError::UnsupportedAlgorithm { .. } => ErrorKind::UnsupportedAlgorithm,
            ReaderError::Decryption(_) => ErrorKind::Decryption,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReaderError>;
