//! Luminance-based grayscale.
use crate::image::{Color, PixelGrid};
use log::debug;

pub const RED_WEIGHT: f64 = 0.299;
pub const GREEN_WEIGHT: f64 = 0.587;
pub const BLUE_WEIGHT: f64 = 0.114;

/// Gray color carrying the luminance of `c`.
///
/// `lum = 0.299 r + 0.587 g + 0.114 b`, truncated toward zero (not rounded).
#[inline]
pub fn luminance(c: Color) -> Color {
    let lum = RED_WEIGHT * f64::from(c.red())
        + GREEN_WEIGHT * f64::from(c.green())
        + BLUE_WEIGHT * f64::from(c.blue());
    // Weights sum to 1, so the truncated value never exceeds 255.
    Color::gray(lum as u8)
}

/// Replace every cell with its luminance.
pub fn grayscale(grid: &PixelGrid) -> PixelGrid {
    debug!("grayscale {}x{}", grid.width(), grid.height());
    grid.map(luminance)
}
