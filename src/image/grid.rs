//! Owned RGB pixel grid in row-major layout (stride == width).
//!
//! Width and height are both at least 1 and the backing buffer always holds
//! exactly `width * height` colors. Transforms never mutate a grid in place;
//! they build a new one through the constructors below.
use super::traits::ImageView;
use super::Color;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl PixelGrid {
    /// Grid of `width × height` cells all set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Color) -> Result<Self> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![fill; width * height],
        })
    }

    /// Wrap a flat row-major buffer.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Color>) -> Result<Self> {
        check_dims(width, height)?;
        let expected = width * height;
        if data.len() != expected {
            return Err(Error::TruncatedInput {
                expected: expected * 3,
                found: data.len() * 3,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dims(width, height)?;
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(Error::DimensionMismatch {
                    left: (width, 1),
                    right: (row.len(), 1),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    ///
    /// Callers are expected to have validated `width` and `height` already.
    pub(crate) fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Color,
    ) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Color at column `x`, row `y`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.data[self.idx(x, y)]
    }

    /// Flat row-major view of all cells.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.data
    }

    /// Apply `f` to every cell, keeping the dimensions.
    pub fn map(&self, f: impl FnMut(Color) -> Color) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Combine two grids of equal dimensions cell by cell.
    pub(crate) fn zip_map(&self, other: &Self, mut f: impl FnMut(Color, Color) -> Color) -> Self {
        debug_assert_eq!(self.dims(), other.dims());
        Self {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Copy out as nested rows, row 0 first.
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.rows().map(<[Color]>::to_vec).collect()
    }
}

impl ImageView for PixelGrid {
    type Pixel = Color;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[Color] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> &[Color] {
        &self.data
    }
}

/// Both sides at least 1 and the whole buffer addressable.
pub(crate) fn check_dims(width: usize, height: usize) -> Result<()> {
    let bytes = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(std::mem::size_of::<Color>()))
        .filter(|&b| b <= isize::MAX as usize);
    if width == 0 || height == 0 || bytes.is_none() {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![Color::BLACK; 3], vec![Color::BLACK; 2]];
        assert!(matches!(
            PixelGrid::from_rows(rows),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(matches!(
            PixelGrid::from_rows(Vec::new()),
            Err(Error::InvalidDimension { width: 0, height: 0 })
        ));
        assert!(PixelGrid::filled(0, 4, Color::WHITE).is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert!(matches!(
            PixelGrid::filled(usize::MAX, 2, Color::BLACK),
            Err(Error::InvalidDimension { height: 2, .. })
        ));
        assert!(PixelGrid::filled(usize::MAX / 2, usize::MAX / 2, Color::BLACK).is_err());
    }

    #[test]
    fn indexing_is_row_major() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| Color::new(x as u8, y as u8, 0));
        assert_eq!(grid.get(2, 1), Color::new(2, 1, 0));
        assert_eq!(grid.pixels()[5], Color::new(2, 1, 0));
        assert_eq!(grid.row(1)[0], Color::new(0, 1, 0));
        assert_eq!(grid.dims(), (3, 2));
    }
}
