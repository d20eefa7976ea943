//! Per-call reader options

use std::path::PathBuf;

use crate::file_utils::FilePathList;

/// Options passed by the host along with each read request
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Free-form, reader-specific option string (e.g. `"1024x512 rs=2.0"`)
    pub option_string: String,
    /// Directories searched before the reader's own data paths
    pub database_paths: FilePathList,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reader-specific option string
    pub fn with_option_string(mut self, option_string: impl Into<String>) -> Self {
        self.option_string = option_string.into();
        self
    }

    /// Append a directory to the database search paths
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_paths.push(path);
        self
    }

    pub fn option_string(&self) -> &str {
        &self.option_string
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = ReaderOptions::new()
            .with_option_string("256x256")
            .with_database_path("/a")
            .with_database_path("/b");

        assert_eq!(options.option_string(), "256x256");
        let paths: Vec<_> = options.database_paths.iter().collect();
        assert_eq!(paths, vec![&PathBuf::from("/a"), &PathBuf::from("/b")]);
    }
}
