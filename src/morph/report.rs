use serde::{Deserialize, Serialize};

/// One emitted frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub index: usize,
    pub alpha: f64,
    pub elapsed_ms: f64,
}

/// Summary of a morph run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphReport {
    pub width: usize,
    pub height: usize,
    pub steps: usize,
    /// True when the target had to be resampled to the source's size.
    pub target_rescaled: bool,
    /// True when the run stopped early on a cancellation request.
    pub cancelled: bool,
    pub total_ms: f64,
    pub frames: Vec<FrameReport>,
}

impl MorphReport {
    pub fn push(&mut self, index: usize, alpha: f64, elapsed_ms: f64) {
        self.frames.push(FrameReport {
            index,
            alpha,
            elapsed_ms,
        });
    }

    pub fn alphas(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.alpha).collect()
    }
}
