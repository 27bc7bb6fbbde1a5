//! Readers for JSON key stores.
//!
//! A key store is a directory with a `meta` record and one key material
//! record per version. [`FileReader`] reads such a directory as-is; the
//! [`EncryptedReader`] and [`PbeReader`] decorators decrypt key material
//! read through another reader; the importers in [`import`] present a PEM
//! key or raw AES key as a one-version store.
//!
//! ```no_run
//! use kzreader::{FileReader, KeyReader, PbeReader};
//!
//! let reader = PbeReader::new(FileReader::new("/etc/keys/signing"), b"password");
//! let meta = reader.metadata()?;
//! let key = reader.key(1)?;
//! # Ok::<(), kzreader::ReaderError>(())
//! ```

pub mod crypto;
mod error;
pub mod format;
pub mod import;
mod reader;
mod storage;

pub use crate::error::{ErrorKind, ReaderError, Result};
pub use crate::format::{KeyMeta, KeyPurpose, KeyStatus, KeyType, KeyVersion};
pub use crate::reader::{Decrypter, EncryptedReader, KeyReader, PbeReader};
pub use crate::storage::{FileReader, META_FILE};
