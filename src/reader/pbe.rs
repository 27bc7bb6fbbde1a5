use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::{KeyReader, into_text, sealed};
use crate::error::{ErrorKind, Result};
use crate::format::PbeEnvelope;

/// Reader for a store whose key versions are password protected.
///
/// Each version read from the wrapped reader is a [`PbeEnvelope`]; the
/// returned text is the decrypted record, padding included.
pub struct PbeReader<R> {
    reader: R,
    password: Zeroizing<Vec<u8>>,
}

impl<R: KeyReader> PbeReader<R> {
    /// Wraps `reader`. The password is copied; the caller keeps its buffer.
    pub fn new(reader: R, password: &[u8]) -> Self {
        Self {
            reader,
            password: Zeroizing::new(password.to_vec()),
        }
    }
}

impl<R> sealed::Sealed for PbeReader<R> {}

impl<R: KeyReader> KeyReader for PbeReader<R> {
    fn metadata(&self) -> Result<String> {
        self.reader.metadata()
    }

    fn key(&self, version: u32) -> Result<Zeroizing<String>> {
        let text = self.reader.key(version)?;
        let envelope = PbeEnvelope::parse(&text)?;

        debug!(
            version,
            iterations = envelope.iteration_count,
            "opening password protected key"
        );

        let plaintext = envelope.open(&self.password).inspect_err(|e| {
            if e.kind() == ErrorKind::UnsupportedAlgorithm {
                warn!(version, error = %e, "rejected key envelope");
            }
        })?;

        into_text(plaintext)
    }
}
