//! Mirror and nearest-neighbour resampling.
use crate::error::Result;
use crate::image::grid::check_dims;
use crate::image::PixelGrid;
use log::debug;

/// Mirror about the vertical axis: `out[y][x] = in[y][w - 1 - x]`.
pub fn flip_horizontally(grid: &PixelGrid) -> PixelGrid {
    let w = grid.width();
    PixelGrid::from_fn(w, grid.height(), |x, y| grid.get(w - 1 - x, y))
}

/// Mirror about the horizontal axis: `out[y][x] = in[h - 1 - y][x]`.
pub fn flip_vertically(grid: &PixelGrid) -> PixelGrid {
    let h = grid.height();
    PixelGrid::from_fn(grid.width(), h, |x, y| grid.get(x, h - 1 - y))
}

/// Nearest-neighbour resize to `width` columns by `height` rows.
///
/// Output cell `(x, y)` samples source cell
/// `(floor(x * src_w / width), floor(y * src_h / height))`, with the ratios
/// computed in `f64`.
pub fn scale(grid: &PixelGrid, width: usize, height: usize) -> Result<PixelGrid> {
    check_dims(width, height)?;
    let (src_w, src_h) = grid.dims();
    let x_ratio = src_w as f64 / width as f64;
    let y_ratio = src_h as f64 / height as f64;
    debug!("scale {src_w}x{src_h} -> {width}x{height}");

    // Sample indices only depend on one axis each.
    let xs: Vec<usize> = (0..width).map(|x| sample(x, x_ratio, src_w)).collect();
    Ok(PixelGrid::from_fn(width, height, |x, y| {
        grid.get(xs[x], sample(y, y_ratio, src_h))
    }))
}

#[inline]
fn sample(i: usize, ratio: f64, len: usize) -> usize {
    ((i as f64 * ratio) as usize).min(len - 1)
}
