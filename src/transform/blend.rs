//! Linear interpolation between colors and grids.
//!
//! Each channel is `alpha * v1 + (1 - alpha) * v2`, truncated toward zero.
//! `alpha` is meant to lie in `[0, 1]` but is not clamped: values outside
//! that range extrapolate. [`blend_channels`] returns the extrapolated
//! integers untouched; [`blend_color`] stores them in an 8-bit [`Color`],
//! which saturates at 0 and 255.
use crate::error::{Error, Result};
use crate::image::{Color, PixelGrid};
use log::debug;

/// Per-channel blend without any range handling.
#[inline]
pub fn blend_channels(c1: Color, c2: Color, alpha: f64) -> [i32; 3] {
    let mix = |v1: u8, v2: u8| (alpha * f64::from(v1) + (1.0 - alpha) * f64::from(v2)) as i32;
    [
        mix(c1.red(), c2.red()),
        mix(c1.green(), c2.green()),
        mix(c1.blue(), c2.blue()),
    ]
}

/// Blend two colors, `alpha` weighting `c1`.
///
/// Channels saturate at 0 and 255; use [`blend_channels`] for the unclamped values.
#[inline]
pub fn blend_color(c1: Color, c2: Color, alpha: f64) -> Color {
    let [r, g, b] = blend_channels(c1, c2, alpha);
    Color::saturating(r, g, b)
}

/// Blend two equally sized grids cell by cell.
pub fn blend_images(first: &PixelGrid, second: &PixelGrid, alpha: f64) -> Result<PixelGrid> {
    if first.dims() != second.dims() {
        return Err(Error::DimensionMismatch {
            left: first.dims(),
            right: second.dims(),
        });
    }
    debug!("blend {}x{} alpha={alpha:.4}", first.width(), first.height());
    Ok(first.zip_map(second, |a, b| blend_color(a, b, alpha)))
}
