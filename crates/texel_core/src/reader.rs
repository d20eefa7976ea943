//! The reader plugin contract

use crate::error::ReadResult;
use crate::image::Image;
use crate::options::ReaderOptions;

/// An object produced by a reader
#[derive(Debug, Clone)]
pub enum ReadObject {
    Image(Image),
}

impl ReadObject {
    pub fn into_image(self) -> Option<Image> {
        match self {
            ReadObject::Image(image) => Some(image),
        }
    }
}

impl From<Image> for ReadObject {
    fn from(image: Image) -> Self {
        ReadObject::Image(image)
    }
}

/// A format reader plugged into the host's asset loading
///
/// Readers advertise the extensions and option strings they understand and
/// convert files into host objects. Implementors only need the metadata
/// methods and [`ReaderWriter::read_image`].
pub trait ReaderWriter: Send + Sync {
    /// Human readable name of the reader
    fn class_name(&self) -> &str;

    /// `(extension, description)` pairs this reader handles
    fn supported_extensions(&self) -> &[(&'static str, &'static str)];

    /// `(option, description)` pairs understood in the option string
    fn supported_options(&self) -> &[(&'static str, &'static str)];

    /// Whether `extension` (without the dot) is handled, ignoring case
    fn accepts_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|(ext, _)| ext.eq_ignore_ascii_case(extension))
    }

    /// Read `file` as an image
    fn read_image(&self, file: &str, options: Option<&ReaderOptions>) -> ReadResult<Image>;

    /// Read `file` as a generic object
    fn read_object(&self, file: &str, options: Option<&ReaderOptions>) -> ReadResult<ReadObject> {
        self.read_image(file, options).map(ReadObject::from)
    }
}
