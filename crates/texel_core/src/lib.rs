//! Texel reader contract
//!
//! This crate provides the host-facing types that asset readers plug into:
//! the [`ReaderWriter`] trait, per-call [`ReaderOptions`], the [`Image`]
//! buffer handed back to the host, and data-file lookup over search paths.
//!
//! # Example
//!
//! ```ignore
//! use texel_core::{ReaderOptions, ReaderWriter};
//!
//! let options = ReaderOptions::new().with_option_string("1024x512");
//! let image = reader.read_image("icons/logo.svg", Some(&options))?;
//! ```

mod error;
mod file_utils;
mod image;
mod options;
mod reader;

pub use error::{ReadError, ReadResult};
pub use file_utils::{
    find_data_file, lower_case_file_extension, FilePathList, FILE_PATH_ENV_VAR,
};
pub use image::{DataType, Image, PixelFormat};
pub use options::ReaderOptions;
pub use reader::{ReadObject, ReaderWriter};
