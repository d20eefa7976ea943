//! SVG error types

use std::path::Path;

use texel_core::ReadError;
use thiserror::Error;

/// Errors that can occur when parsing or rasterizing an SVG document
#[derive(Error, Debug)]
pub enum SvgError {
    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(#[from] usvg::Error),

    /// The drawing surface could not be allocated
    #[error("Failed to create {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
}

impl SvgError {
    /// Convert into the host error for the file being read
    pub fn into_read_error(self, path: &Path) -> ReadError {
        ReadError::ErrorInReadingFile {
            path: path.to_path_buf(),
            reason: self.to_string(),
        }
    }
}
