//! Pure grid transforms and a small operation pipeline for config files.
pub mod blend;
pub mod color;
pub mod geometric;

pub use self::blend::{blend_channels, blend_color, blend_images};
pub use self::color::{grayscale, luminance};
pub use self::geometric::{flip_horizontally, flip_vertically, scale};

use crate::error::Result;
use crate::image::PixelGrid;
use serde::{Deserialize, Serialize};

/// Single-input transform step, as listed in a config file.
///
/// ```json
/// [{ "op": "flip_horizontal" }, { "op": "scale", "width": 64, "height": 48 }]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    Scale { width: usize, height: usize },
}

impl Operation {
    pub fn apply(self, grid: &PixelGrid) -> Result<PixelGrid> {
        Ok(match self {
            Operation::FlipHorizontal => flip_horizontally(grid),
            Operation::FlipVertical => flip_vertically(grid),
            Operation::Grayscale => grayscale(grid),
            Operation::Scale { width, height } => scale(grid, width, height)?,
        })
    }
}

/// Run `ops` in order, each on the previous step's output.
pub fn apply_operations(grid: &PixelGrid, ops: &[Operation]) -> Result<PixelGrid> {
    let mut current = grid.clone();
    for op in ops {
        log::debug!("apply {op:?}");
        current = op.apply(&current)?;
    }
    Ok(current)
}
