use pixmorph::render::Renderer;
use pixmorph::{PixelGrid, Result};
use std::time::Duration;

/// Everything a renderer was asked to do, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Configure(usize, usize),
    Frame(PixelGrid),
    Pause(Duration),
}

/// Renderer double that records calls instead of drawing or sleeping.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> Vec<&PixelGrid> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Frame(g) => Some(g),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn configure_canvas(&mut self, grid: &PixelGrid) -> Result<()> {
        self.calls.push(Call::Configure(grid.width(), grid.height()));
        Ok(())
    }

    fn render_frame(&mut self, frame: &PixelGrid) -> Result<()> {
        self.calls.push(Call::Frame(frame.clone()));
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        self.calls.push(Call::Pause(delay));
    }
}
