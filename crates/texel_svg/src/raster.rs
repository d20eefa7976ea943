//! Rasterization of a parsed SVG tree into a host image
//!
//! The document is stretched to fill the requested size, rendered by resvg
//! onto a tiny-skia pixmap, then copied into a BGRA image with rows flipped
//! so the first row is the bottom of the picture.

use texel_core::{Image, PixelFormat};
use tiny_skia::{Pixmap, Transform};
use usvg::Tree;

use crate::error::SvgError;
use crate::size::RasterSize;

/// Smallest width or height of a generated image
///
/// Very small surfaces render with visible artifacts, so both extents are
/// raised to at least this value.
pub const MIN_RASTER_EXTENT: u32 = 128;

/// Render `tree` into a new `width` x `height` image
///
/// The document is scaled independently along each axis to cover the whole
/// image. Pixel data is premultiplied BGRA, bottom row first.
pub fn create_image(tree: &Tree, width: u32, height: u32) -> Result<Image, SvgError> {
    let RasterSize { width, height } =
        RasterSize::new(width, height).clamped_min(MIN_RASTER_EXTENT);

    // The pixmap enforces the drawable size limits, so it is created first.
    let mut pixmap = Pixmap::new(width, height).ok_or(SvgError::Pixmap { width, height })?;

    let mut image = Image::allocate(width, height, PixelFormat::Rgba)
        .ok_or(SvgError::Pixmap { width, height })?;
    image.set_pixel_format(PixelFormat::Bgra);
    image.clear();

    let doc_size = tree.size();
    let transform = Transform::from_scale(
        width as f32 / doc_size.width(),
        height as f32 / doc_size.height(),
    );
    resvg::render(tree, transform, &mut pixmap.as_mut());

    copy_rgba_to_bgra(pixmap.data(), image.data_mut());
    image.flip_vertical();

    tracing::debug!(
        "rasterized {}x{} document into {}x{} image",
        doc_size.width(),
        doc_size.height(),
        width,
        height
    );
    Ok(image)
}

/// Copy RGBA pixels into a BGRA buffer of the same length
fn copy_rgba_to_bgra(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[2];
        d[1] = s[1];
        d[2] = s[0];
        d[3] = s[3];
    }
}
