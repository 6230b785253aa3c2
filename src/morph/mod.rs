//! Gradual blend from one grid to another, rendered frame by frame.
//!
//! The target is resampled to the source's exact dimensions once, when the
//! [`Morph`] is built. Frame `i` of `n` is then
//! `blend(source, target, alpha(i))`; see [`MorphDirection`] for how `alpha`
//! runs. Rendering is synchronous: after each frame the renderer's `pause`
//! blocks the calling thread for the configured delay.
pub mod options;
pub mod report;

pub use self::options::{MorphDirection, MorphOptions};
pub use self::report::{FrameReport, MorphReport};

use crate::error::{Error, Result};
use crate::image::PixelGrid;
use crate::render::Renderer;
use crate::transform::{blend_color, scale};
use log::{debug, info};
use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

#[derive(Debug)]
pub struct Morph<'a> {
    source: &'a PixelGrid,
    target: Cow<'a, PixelGrid>,
    options: MorphOptions,
}

impl<'a> Morph<'a> {
    /// Validate the step count and bring `target` to the source's size.
    pub fn new(source: &'a PixelGrid, target: &'a PixelGrid, options: MorphOptions) -> Result<Self> {
        if options.steps < 2 {
            return Err(Error::InvalidStepCount(options.steps));
        }
        let target = if target.dims() == source.dims() {
            Cow::Borrowed(target)
        } else {
            debug!(
                "rescaling morph target {}x{} -> {}x{}",
                target.width(),
                target.height(),
                source.width(),
                source.height()
            );
            Cow::Owned(scale(target, source.width(), source.height())?)
        };
        Ok(Self {
            source,
            target,
            options,
        })
    }

    pub fn steps(&self) -> usize {
        self.options.steps
    }

    pub fn options(&self) -> &MorphOptions {
        &self.options
    }

    /// Target as blended, i.e. already at the source's dimensions.
    pub fn target(&self) -> &PixelGrid {
        &self.target
    }

    pub fn target_rescaled(&self) -> bool {
        matches!(self.target, Cow::Owned(_))
    }

    /// Source weight used for frame `index`.
    pub fn alpha(&self, index: usize) -> f64 {
        let t = index as f64 / (self.options.steps - 1) as f64;
        match self.options.direction {
            MorphDirection::TargetToSource => t,
            MorphDirection::SourceToTarget => 1.0 - t,
        }
    }

    /// Build frame `index` without rendering it.
    pub fn frame(&self, index: usize) -> PixelGrid {
        let alpha = self.alpha(index);
        self.source.zip_map(&self.target, |a, b| blend_color(a, b, alpha))
    }

    /// All frames in order, built lazily.
    pub fn frames(&self) -> impl Iterator<Item = PixelGrid> + '_ {
        (0..self.options.steps).map(move |i| self.frame(i))
    }

    /// Render every frame, pausing after each one.
    pub fn run<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<MorphReport> {
        self.run_until(renderer, &AtomicBool::new(false))
    }

    /// Like [`Morph::run`], but checks `cancel` before each frame and stops
    /// early once it is set.
    pub fn run_until<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        cancel: &AtomicBool,
    ) -> Result<MorphReport> {
        let start = Instant::now();
        let mut report = MorphReport {
            width: self.source.width(),
            height: self.source.height(),
            steps: self.options.steps,
            target_rescaled: self.target_rescaled(),
            ..Default::default()
        };

        renderer.configure_canvas(self.source)?;
        let delay = self.options.delay();
        for index in 0..self.options.steps {
            if cancel.load(Ordering::Relaxed) {
                info!("morph cancelled after {index} frame(s)");
                report.cancelled = true;
                break;
            }
            let t0 = Instant::now();
            let alpha = self.alpha(index);
            let frame = self.frame(index);
            renderer.render_frame(&frame)?;
            report.push(index, alpha, t0.elapsed().as_secs_f64() * 1000.0);
            debug!("morph frame {index}/{} alpha={alpha:.4}", self.options.steps);
            renderer.pause(delay);
        }
        report.total_ms = start.elapsed().as_secs_f64() * 1000.0;
        Ok(report)
    }
}

/// Morph `source` and `target` over `steps` frames with the default delay.
pub fn morph<R: Renderer + ?Sized>(
    source: &PixelGrid,
    target: &PixelGrid,
    steps: usize,
    renderer: &mut R,
) -> Result<MorphReport> {
    Morph::new(source, target, MorphOptions::new(steps))?.run(renderer)
}
