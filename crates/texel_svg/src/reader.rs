//! The SVG reader plugin

use std::fs;
use std::path::Path;
use std::sync::Arc;

use texel_core::{
    find_data_file, lower_case_file_extension, FilePathList, Image, ReadError, ReadResult,
    ReaderOptions, ReaderWriter,
};
use usvg::{Options, Tree};

use crate::error::SvgError;
use crate::raster::create_image;
use crate::size::RasterSize;

const EXTENSIONS: &[(&str, &str)] = &[("svg", "Scalar Vector Graphics format")];

const OPTIONS: &[(&str, &str)] = &[
    ("1024x512", "Set resolution of the image generated by SVG"),
    ("rs=2.0", "Scale the resolution of the image generated by SVG"),
];

/// Reads `.svg` files as texture images
///
/// The output size is the document's intrinsic size unless the option
/// string overrides it (see [`RasterSize::with_options`]).
#[derive(Debug, Clone)]
pub struct SvgReader {
    data_paths: FilePathList,
    load_system_fonts: bool,
}

impl Default for SvgReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgReader {
    /// Create a reader searching the paths listed in `TEXEL_FILE_PATH`
    pub fn new() -> Self {
        Self {
            data_paths: FilePathList::from_env_default(),
            load_system_fonts: false,
        }
    }

    /// Replace the fallback data-file search paths
    pub fn with_data_paths(mut self, data_paths: FilePathList) -> Self {
        self.data_paths = data_paths;
        self
    }

    /// Load system fonts so `<text>` elements can be rendered
    pub fn with_system_fonts(mut self, enabled: bool) -> Self {
        self.load_system_fonts = enabled;
        self
    }

    pub fn data_paths(&self) -> &FilePathList {
        &self.data_paths
    }

    fn parse_tree(&self, path: &Path) -> ReadResult<Tree> {
        let data = fs::read(path)?;

        let mut options = Options {
            resources_dir: path.parent().map(Path::to_path_buf),
            ..Options::default()
        };
        if self.load_system_fonts {
            Arc::make_mut(&mut options.fontdb).load_system_fonts();
        }

        Tree::from_data(&data, &options).map_err(|e| {
            tracing::warn!("failed to parse {}: {}", path.display(), e);
            SvgError::from(e).into_read_error(path)
        })
    }
}

impl ReaderWriter for SvgReader {
    fn class_name(&self) -> &str {
        "SVG Image Reader"
    }

    fn supported_extensions(&self) -> &[(&'static str, &'static str)] {
        EXTENSIONS
    }

    fn supported_options(&self) -> &[(&'static str, &'static str)] {
        OPTIONS
    }

    fn read_image(&self, file: &str, options: Option<&ReaderOptions>) -> ReadResult<Image> {
        let ext = lower_case_file_extension(file);
        if !self.accepts_extension(&ext) {
            return Err(ReadError::FileNotHandled);
        }

        let path = find_data_file(file, options, &self.data_paths)
            .ok_or_else(|| ReadError::FileNotFound(file.into()))?;
        tracing::debug!("reading {} from {}", file, path.display());

        let tree = self.parse_tree(&path)?;

        let doc_size = tree.size();
        let mut size = RasterSize::from_document(doc_size.width(), doc_size.height());
        if let Some(options) = options {
            size = size.with_options(options.option_string());
        }

        let mut image =
            create_image(&tree, size.width, size.height).map_err(|e| e.into_read_error(&path))?;
        image.set_file_name(file);
        Ok(image)
    }
}
