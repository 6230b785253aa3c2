//! Off-screen renderer writing each presented frame as a numbered PNG.
use super::Renderer;
use crate::error::{Error, Result};
use crate::image::io::ensure_parent_dir;
use crate::image::{ImageView, PixelGrid};
use image::{Rgb, RgbImage};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub struct PngSequenceRenderer {
    dir: PathBuf,
    prefix: String,
    realtime: bool,
    canvas: Option<RgbImage>,
    written: Vec<PathBuf>,
}

impl PngSequenceRenderer {
    /// Frames land in `dir` as `frame_0000.png`, `frame_0001.png`, ...
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_string(),
            realtime: false,
            canvas: None,
            written: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// When set, `pause` really sleeps; otherwise frames are written back to back.
    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Paths of all frames presented so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}_{index:04}.png", self.prefix))
    }
}

impl Renderer for PngSequenceRenderer {
    fn configure_canvas(&mut self, grid: &PixelGrid) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::io(&self.dir, e))?;
        self.canvas = Some(RgbImage::new(grid.width() as u32, grid.height() as u32));
        self.written.clear();
        debug!(
            "png canvas {}x{} in {}",
            grid.width(),
            grid.height(),
            self.dir.display()
        );
        Ok(())
    }

    fn render_frame(&mut self, frame: &PixelGrid) -> Result<()> {
        let path = self.frame_path(self.written.len());
        let canvas = self
            .canvas
            .as_mut()
            .ok_or_else(|| Error::Render("render_frame called before configure_canvas".into()))?;
        let canvas_dims = (canvas.width() as usize, canvas.height() as usize);
        if canvas_dims != frame.dims() {
            return Err(Error::DimensionMismatch {
                left: canvas_dims,
                right: frame.dims(),
            });
        }
        for (y, row) in frame.rows().enumerate() {
            for (x, c) in row.iter().enumerate() {
                canvas.put_pixel(x as u32, y as u32, Rgb(c.channels()));
            }
        }
        present(canvas, &path)?;
        info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        if self.realtime {
            std::thread::sleep(delay);
        }
    }
}

/// Write to a sibling temp file, then rename over the target.
fn present(canvas: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let tmp = path.with_extension("png.tmp");
    canvas
        .save_with_format(&tmp, image::ImageFormat::Png)
        .map_err(|source| Error::Image {
            path: tmp.clone(),
            source,
        })?;
    fs::rename(&tmp, path).map_err(|e| {
        // Best effort; the rename error is the one worth reporting.
        let _ = fs::remove_file(&tmp);
        Error::io(path, e)
    })
}
