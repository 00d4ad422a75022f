//! Reading response documents from the local file system.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use thiserror::Error;

/// Errors raised while reading a response document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Raised when the path has no file name component.
    #[error("document path {path} does not name a file")]
    NotAFile {
        /// Path supplied by the caller.
        path: Utf8PathBuf,
    },
    /// Raised when the file or its directory cannot be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

/// Reads a UTF-8 document from `path`.
///
/// # Errors
///
/// Returns [`DocumentError::NotAFile`] when `path` has no file name and
/// [`DocumentError::Io`] when the directory or file cannot be read.
pub fn read_document(path: &Utf8Path) -> Result<String, DocumentError> {
    let file_name = path.file_name().ok_or_else(|| DocumentError::NotAFile {
        path: path.to_path_buf(),
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|source| DocumentError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    dir.read_to_string(file_name)
        .map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
}
