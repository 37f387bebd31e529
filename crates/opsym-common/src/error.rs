use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A per-file failure from the file driver.
///
/// Failures are collected during a run rather than aborting it, so a single
/// unreadable file does not stop the remaining files from being rewritten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub kind: FileErrorKind,
}

impl FileError {
    /// Create a new per-file error.
    pub fn new(path: impl Into<PathBuf>, kind: FileErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// The specific kind of per-file failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FileErrorKind {
    /// The file could not be read.
    Read(String),
    /// The file contents were not valid UTF-8.
    NotUtf8,
    /// The rewritten contents could not be written back.
    Write(String),
}

impl fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(msg) => write!(f, "cannot read file: {msg}"),
            Self::NotUtf8 => write!(f, "file is not valid UTF-8"),
            Self::Write(msg) => write!(f, "cannot write file: {msg}"),
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.kind)
    }
}

impl std::error::Error for FileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_error_display() {
        let err = FileError::new("src/a.cpp", FileErrorKind::NotUtf8);
        assert_eq!(err.to_string(), "src/a.cpp: file is not valid UTF-8");
    }

    #[test]
    fn file_error_kind_display_all_variants() {
        assert_eq!(
            FileErrorKind::Read("permission denied".into()).to_string(),
            "cannot read file: permission denied"
        );
        assert_eq!(
            FileErrorKind::NotUtf8.to_string(),
            "file is not valid UTF-8"
        );
        assert_eq!(
            FileErrorKind::Write("disk full".into()).to_string(),
            "cannot write file: disk full"
        );
    }
}
