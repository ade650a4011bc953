//! File input: reading diff operands as UTF-8 text.

use std::path::{Path, PathBuf};

/// Errors reading a diff operand.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid UTF-8. The engine diffs text only.
    #[error("{path}: binary content not supported")]
    Binary { path: PathBuf },
}

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| InputError::Binary {
        path: path.to_path_buf(),
    })
}
