//! Display adapters for pixel grids.
//!
//! A [`Renderer`] is an explicit drawing context: the morph sequencer sizes
//! it once with [`Renderer::configure_canvas`], then hands it one frame at a
//! time. Frames are composed off-screen and presented as a whole.
pub mod png;
pub mod text;

pub use self::png::PngSequenceRenderer;
pub use self::text::{format_color, print_grid, write_grid, TextRenderer};

use crate::error::Result;
use crate::image::PixelGrid;
use std::time::Duration;

pub trait Renderer {
    /// Size the drawing surface to `grid`'s width and height.
    fn configure_canvas(&mut self, grid: &PixelGrid) -> Result<()>;

    /// Draw every cell of `frame` (row 0 at the top) and present it.
    fn render_frame(&mut self, frame: &PixelGrid) -> Result<()>;

    /// Block the calling thread before the next frame.
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
