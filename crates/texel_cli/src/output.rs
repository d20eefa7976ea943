//! Conversion of reader images into PNG files

use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::Path;
use texel_core::{Image, PixelFormat};

/// Convert a host image into a top-down, straight-alpha RGBA image
///
/// Reader output is bottom-up and premultiplied, which is what textures
/// want but not what image files store.
pub fn to_rgba_image(image: &Image) -> Result<RgbaImage> {
    let mut flipped = image.clone();
    flipped.flip_vertical();
    let swap_red_blue = flipped.pixel_format() == PixelFormat::Bgra;

    let mut pixels = flipped.into_data();
    for px in pixels.chunks_exact_mut(4) {
        if swap_red_blue {
            px.swap(0, 2);
        }
        unpremultiply(px);
    }

    RgbaImage::from_raw(image.width(), image.height(), pixels)
        .context("Pixel buffer does not match image dimensions")
}

/// Write a host image as PNG
pub fn save_png(image: &Image, path: &Path) -> Result<()> {
    to_rgba_image(image)?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Divide color channels by alpha, rounding to nearest
fn unpremultiply(px: &mut [u8]) {
    let a = px[3] as u32;
    if a == 0 {
        px[..3].fill(0);
        return;
    }
    for c in &mut px[..3] {
        *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
    }
}
