//! Text dump of channel values, for debugging.
use super::Renderer;
use crate::error::{Error, Result};
use crate::image::{Color, ImageView, PixelGrid};
use std::io::{self, Write};
use std::time::Duration;

/// `(rrr,ggg,bbb)` with each channel right-aligned in three columns.
pub fn format_color(c: Color) -> String {
    c.to_string()
}

/// One line per row, cells separated by two spaces.
pub fn write_grid<W: Write>(out: &mut W, grid: &PixelGrid) -> io::Result<()> {
    for row in grid.rows() {
        for c in row {
            write!(out, "{c}  ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn print_grid(grid: &PixelGrid) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_grid(&mut lock, grid)
}

/// Renderer that dumps each frame as text, separated by a blank line.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn configure_canvas(&mut self, grid: &PixelGrid) -> Result<()> {
        self.frames = 0;
        writeln!(self.out, "# canvas {}x{}", grid.width(), grid.height())
            .map_err(|e| Error::io("<text renderer>", e))
    }

    fn render_frame(&mut self, frame: &PixelGrid) -> Result<()> {
        let to_err = |e| Error::io("<text renderer>", e);
        writeln!(self.out, "# frame {}", self.frames).map_err(to_err)?;
        write_grid(&mut self.out, frame).map_err(to_err)?;
        writeln!(self.out).map_err(to_err)?;
        self.out.flush().map_err(to_err)?;
        self.frames += 1;
        Ok(())
    }

    fn pause(&mut self, _delay: Duration) {}
}
