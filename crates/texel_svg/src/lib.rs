//! SVG image reader for Texel
//!
//! Rasterizes SVG documents into host [`texel_core::Image`]s usable as
//! textures. Parsing is done by `usvg`, rendering by `resvg` onto a
//! `tiny-skia` pixmap; this crate only picks the output size and copies the
//! pixels into the host buffer (BGRA, bottom-up rows).
//!
//! # Example
//!
//! ```ignore
//! use texel_core::{ReaderOptions, ReaderWriter};
//! use texel_svg::SvgReader;
//!
//! let reader = SvgReader::new();
//! let options = ReaderOptions::new().with_option_string("rs=2.0");
//! let image = reader.read_image("icon.svg", Some(&options))?;
//! ```

mod error;
mod raster;
mod reader;
mod size;

pub use error::SvgError;
pub use raster::{create_image, MIN_RASTER_EXTENT};
pub use reader::SvgReader;
pub use size::RasterSize;
