// crates/shared-kernel/src/value_objects/entry_path.rs
use std::{
    cmp::Ordering,
    ffi::OsStr,
    fmt,
    path::{Path, PathBuf},
};

/// Full path of one immediate member of the listed directory.
///
/// Ordering compares the encoded bytes of the whole path rather than its
/// components, which for UTF-8 names is plain code-point string order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EntryPath(PathBuf);

impl EntryPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Raw bytes as written to the output stream.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_os_str().as_encoded_bytes()
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.0.file_name()
    }
}

impl Ord for EntryPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for EntryPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for EntryPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}
