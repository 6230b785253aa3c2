//! File helpers for pixel grids and JSON.
//!
//! - `load_ppm`: read a plain-text pixel map from disk.
//! - `save_ppm`: write a grid back as a plain-text pixel map.
//! - `save_png`: write a grid to an RGB PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ppm, ImageView, PixelGrid};
use crate::error::{Error, Result};
use image::{ImageBuffer, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load and decode a pixel map file.
pub fn load_ppm(path: &Path) -> Result<PixelGrid> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    ppm::decode_bytes(&bytes)
}

/// Encode `grid` as a pixel map and write it to `path`.
pub fn save_ppm(grid: &PixelGrid, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, ppm::encode(grid)).map_err(|e| Error::io(path, e))
}

/// Copy `grid` into an `image` RGB buffer, row 0 at the top.
pub fn to_rgb_image(grid: &PixelGrid) -> RgbImage {
    let mut out: RgbImage = ImageBuffer::new(grid.width() as u32, grid.height() as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, c) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Rgb(c.channels()));
        }
    }
    out
}

/// Save a grid to an 8-bit RGB PNG.
pub fn save_png(grid: &PixelGrid, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    to_rgb_image(grid)
        .save(path)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Config(format!("failed to serialize JSON for {}: {e}", path.display())))?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}
