//! Output raster size selection from the reader option string
//!
//! Two options are understood, and may be combined:
//!
//! - `<width>x<height>` replaces the document's intrinsic size when both
//!   numbers are non-zero.
//! - `rs=<scale>` multiplies the (possibly replaced) size by `scale` when it
//!   is non-zero.

/// Pixel dimensions of the image to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub width: u32,
    pub height: u32,
}

impl RasterSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Intrinsic size of a document, rounded to whole pixels
    pub fn from_document(width: f32, height: f32) -> Self {
        Self::new(round_extent(width), round_extent(height))
    }

    /// Apply the resolution and scale options found in `option_string`
    pub fn with_options(self, option_string: &str) -> Self {
        let mut size = self;

        // The first 'x' anywhere in the string splits width from height.
        if let Some(i) = option_string.find('x') {
            let w = parse_leading_uint(&option_string[..i]);
            let h = parse_leading_uint(&option_string[i + 1..]);
            if w != 0 && h != 0 {
                size = Self::new(w, h);
            }
        }

        if let Some(i) = option_string.find("rs=") {
            let scale = parse_leading_float(&option_string[i + 3..]);
            if scale != 0.0 {
                size = Self::new(
                    (size.width as f64 * scale) as u32,
                    (size.height as f64 * scale) as u32,
                );
            }
        }

        if size != self {
            tracing::debug!(
                "option string {:?} resized {}x{} -> {}x{}",
                option_string,
                self.width,
                self.height,
                size.width,
                size.height
            );
        }
        size
    }

    /// Grow each extent to at least `min`
    pub fn clamped_min(self, min: u32) -> Self {
        Self::new(self.width.max(min), self.height.max(min))
    }
}

fn round_extent(v: f32) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round() as u32
    } else {
        0
    }
}

/// Unsigned integer from the leading digits after optional whitespace
///
/// Yields 0 when there are no digits and saturates at `u32::MAX` when the
/// digits overflow.
fn parse_leading_uint(s: &str) -> u32 {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return 0;
    }
    s[..end].parse().unwrap_or(u32::MAX)
}

/// Longest leading float after optional whitespace, 0.0 if none
fn parse_leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .unwrap_or(s.len());

    (1..=end)
        .rev()
        .find_map(|n| s[..n].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTRINSIC: RasterSize = RasterSize {
        width: 100,
        height: 50,
    };

    #[test]
    fn test_no_options_keeps_intrinsic_size() {
        assert_eq!(INTRINSIC.with_options(""), INTRINSIC);
        assert_eq!(INTRINSIC.with_options("mipmap"), INTRINSIC);
    }

    #[test]
    fn test_resolution_override() {
        assert_eq!(
            INTRINSIC.with_options("1024x512"),
            RasterSize::new(1024, 512)
        );
        assert_eq!(
            INTRINSIC.with_options(" 300 x 200 "),
            RasterSize::new(300, 200)
        );
    }

    #[test]
    fn test_resolution_needs_both_extents() {
        assert_eq!(INTRINSIC.with_options("0x512"), INTRINSIC);
        assert_eq!(INTRINSIC.with_options("1024x"), INTRINSIC);
        assert_eq!(INTRINSIC.with_options("x512"), INTRINSIC);
    }

    #[test]
    fn test_first_x_wins() {
        // The 'x' of "box" is found first, so no resolution is parsed.
        assert_eq!(INTRINSIC.with_options("box 64x64"), INTRINSIC);
    }

    #[test]
    fn test_scale() {
        assert_eq!(INTRINSIC.with_options("rs=2.0"), RasterSize::new(200, 100));
        assert_eq!(INTRINSIC.with_options("rs= 0.5"), RasterSize::new(50, 25));
        assert_eq!(INTRINSIC.with_options("rs=1.5"), RasterSize::new(150, 75));
    }

    #[test]
    fn test_scale_truncates() {
        let size = RasterSize::new(3, 3).with_options("rs=1.5");
        assert_eq!(size, RasterSize::new(4, 4));
        let size = RasterSize::new(5, 5).with_options("rs=0.3");
        assert_eq!(size, RasterSize::new(1, 1));
    }

    #[test]
    fn test_invalid_or_zero_scale_is_ignored() {
        assert_eq!(INTRINSIC.with_options("rs=0"), INTRINSIC);
        assert_eq!(INTRINSIC.with_options("rs=abc"), INTRINSIC);
        assert_eq!(INTRINSIC.with_options("rs="), INTRINSIC);
    }

    #[test]
    fn test_resolution_then_scale() {
        assert_eq!(
            INTRINSIC.with_options("1024x512 rs=0.25"),
            RasterSize::new(256, 128)
        );
    }

    #[test]
    fn test_overflowing_resolution_saturates() {
        assert_eq!(
            INTRINSIC.with_options("99999999999x512"),
            RasterSize::new(u32::MAX, 512)
        );
    }

    #[test]
    fn test_negative_values() {
        // A signed width has no leading digits, so the override is skipped.
        assert_eq!(INTRINSIC.with_options("-5x10"), INTRINSIC);
        // A negative scale is non-zero and truncates to an empty size.
        assert_eq!(INTRINSIC.with_options("rs=-1"), RasterSize::new(0, 0));
    }

    #[test]
    fn test_huge_scale_saturates() {
        assert_eq!(
            INTRINSIC.with_options("rs=1e12"),
            RasterSize::new(u32::MAX, u32::MAX)
        );
    }

    #[test]
    fn test_leading_number_parsers() {
        assert_eq!(parse_leading_uint("  42px"), 42);
        assert_eq!(parse_leading_uint("-3"), 0);
        assert_eq!(parse_leading_uint("abc"), 0);
        assert_eq!(parse_leading_uint("4294967296"), u32::MAX);
        assert_eq!(parse_leading_float("2.5e1 more"), 25.0);
        assert_eq!(parse_leading_float("3.x"), 3.0);
        assert_eq!(parse_leading_float("1e"), 1.0);
    }

    #[test]
    fn test_from_document_rounds() {
        assert_eq!(
            RasterSize::from_document(99.6, 10.2),
            RasterSize::new(100, 10)
        );
        assert_eq!(RasterSize::from_document(f32::NAN, 1.0).width, 0);
    }

    #[test]
    fn test_clamped_min() {
        assert_eq!(
            RasterSize::new(16, 512).clamped_min(128),
            RasterSize::new(128, 512)
        );
    }
}
