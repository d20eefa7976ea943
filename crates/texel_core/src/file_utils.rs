//! File name helpers and data-file search

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::options::ReaderOptions;

/// Environment variable holding the default data-file search paths
pub const FILE_PATH_ENV_VAR: &str = "TEXEL_FILE_PATH";

/// Lowercased extension of the final path component, without the dot
///
/// Returns an empty string when the file name has no extension.
/// Dot-files such as `.svg` count as having the extension `svg`.
pub fn lower_case_file_extension(file: impl AsRef<Path>) -> String {
    file.as_ref()
        .file_name()
        .and_then(OsStr::to_str)
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Ordered list of directories to search for data files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePathList {
    paths: Vec<PathBuf>,
}

impl FilePathList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from an environment variable split on the platform path separator
    ///
    /// A missing variable yields an empty list.
    pub fn from_env(var: &str) -> Self {
        match env::var_os(var) {
            Some(value) => env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            None => Self::default(),
        }
    }

    /// Build a list from [`FILE_PATH_ENV_VAR`]
    pub fn from_env_default() -> Self {
        Self::from_env(FILE_PATH_ENV_VAR)
    }

    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for FilePathList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<PathBuf>> Extend<P> for FilePathList {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.paths.extend(iter.into_iter().map(Into::into));
    }
}

/// Locate a data file
///
/// The file is returned as-is if it exists. Otherwise it is joined onto each
/// of the options' database paths and then each of `fallback_paths`. If the
/// name carries directory components and still wasn't found, the bare file
/// name is tried against the same directories.
pub fn find_data_file(
    file: impl AsRef<Path>,
    options: Option<&ReaderOptions>,
    fallback_paths: &FilePathList,
) -> Option<PathBuf> {
    let file = file.as_ref();
    if file.as_os_str().is_empty() {
        return None;
    }

    if file.is_file() {
        tracing::trace!("data file found directly: {}", file.display());
        return Some(file.to_path_buf());
    }

    let search = |name: &Path| {
        let database_paths = options.into_iter().flat_map(|o| o.database_paths.iter());
        database_paths
            .chain(fallback_paths.iter())
            .map(|dir| dir.join(name))
            .find(|candidate| {
                let found = candidate.is_file();
                tracing::trace!("probing {} -> {}", candidate.display(), found);
                found
            })
    };

    if let Some(found) = search(file) {
        return Some(found);
    }

    let simple_name = Path::new(file.file_name()?);
    if simple_name != file {
        return search(simple_name);
    }

    None
}
