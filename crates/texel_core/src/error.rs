//! Reader error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a reader can fail to produce an object
#[derive(Error, Debug)]
pub enum ReadError {
    /// The reader does not handle files with this extension
    #[error("File not handled by this reader")]
    FileNotHandled,

    /// The file could not be located on any search path
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file was found but its contents could not be read
    #[error("Error reading {}: {reason}", path.display())]
    ErrorInReadingFile { path: PathBuf, reason: String },

    /// IO error while accessing the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ReadError {
    /// Whether the error means "try another reader" rather than a real failure
    pub fn is_not_handled(&self) -> bool {
        matches!(self, ReadError::FileNotHandled)
    }
}

/// Result type for reader operations
pub type ReadResult<T> = std::result::Result<T, ReadError>;
