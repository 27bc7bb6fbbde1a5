//! Plain on-disk key stores.

use std::fs;
use std::path::{MAIN_SEPARATOR, Path};

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{ReaderError, Result};
use crate::reader::{KeyReader, sealed};

/// Name of the metadata entry inside a key store directory.
pub const META_FILE: &str = "meta";

/// Reads a key store laid out as a directory.
///
/// The directory holds one `meta` file plus one file per key version, named
/// by the decimal version number. Contents are returned verbatim.
#[derive(Debug, Clone)]
pub struct FileReader {
    location: String,
}

impl FileReader {
    /// Creates a reader for the store at `location`.
    ///
    /// The location is normalized to end with the platform path separator.
    pub fn new(location: impl Into<String>) -> Self {
        let mut location = location.into();
        if !location.is_empty() && !location.ends_with(MAIN_SEPARATOR) {
            location.push(MAIN_SEPARATOR);
        }
        Self { location }
    }

    /// Returns the normalized store location.
    pub fn location(&self) -> &str {
        &self.location
    }

    fn entry(&self, name: &str) -> String {
        format!("{}{}", self.location, name)
    }
}

impl sealed::Sealed for FileReader {}

impl KeyReader for FileReader {
    fn metadata(&self) -> Result<String> {
        slurp(self.entry(META_FILE))
    }

    fn key(&self, version: u32) -> Result<Zeroizing<String>> {
        slurp(self.entry(&version.to_string())).map(Zeroizing::new)
    }
}

/// Loads the entire file at `path` as text.
///
/// # Errors
///
/// Returns [`ReaderError::Io`] if the file is missing, unreadable or not UTF-8.
pub(crate) fn slurp(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading key store entry");
    fs::read_to_string(path).map_err(|source| ReaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn location_gets_trailing_separator() {
        let reader = FileReader::new("some/store");
        assert!(reader.location().ends_with(MAIN_SEPARATOR));
        assert_eq!(reader.location().len(), "some/store".len() + 1);
    }

    #[test]
    fn location_with_separator_is_unchanged() {
        let location = format!("some{MAIN_SEPARATOR}store{MAIN_SEPARATOR}");
        let reader = FileReader::new(location.clone());
        assert_eq!(reader.location(), location);
    }

    #[test]
    fn reads_meta_and_versions_verbatim() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("meta"), "{\"name\":\"x\"}\n").unwrap();
        fs::write(dir.path().join("1"), "first").unwrap();
        fs::write(dir.path().join("12"), "twelfth").unwrap();

        let reader = FileReader::new(dir.path().to_string_lossy());

        assert_eq!(reader.metadata().unwrap(), "{\"name\":\"x\"}\n");
        assert_eq!(*reader.key(1).unwrap(), "first");
        assert_eq!(*reader.key(12).unwrap(), "twelfth");
    }

    #[test]
    fn repeated_reads_are_identical() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1"), "material").unwrap();

        let reader = FileReader::new(dir.path().to_string_lossy());
        assert_eq!(*reader.key(1).unwrap(), *reader.key(1).unwrap());
    }

    #[test]
    fn missing_meta_is_io_error() {
        let dir = tempdir().unwrap();
        let reader = FileReader::new(dir.path().to_string_lossy());

        let err = reader.metadata().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn missing_version_is_io_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1"), "first").unwrap();
        let reader = FileReader::new(dir.path().to_string_lossy());

        match reader.key(2) {
            Err(ReaderError::Io { path, .. }) => assert!(path.ends_with("2")),
            other => panic!("expected Io error, got: {other:?}"),
        }
    }
}
