use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which input the animation starts from.
///
/// With `TargetToSource` frame `i` uses `alpha = i / (n - 1)` as the weight
/// of the source, so frame 0 shows the (rescaled) target and the last frame
/// shows the source. `SourceToTarget` uses `1 - i / (n - 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphDirection {
    #[default]
    TargetToSource,
    SourceToTarget,
}

/// Options controlling a morph run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphOptions {
    /// Number of frames emitted (>= 2).
    pub steps: usize,
    /// Pause after each presented frame, in milliseconds.
    pub delay_ms: u64,
    pub direction: MorphDirection,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            steps: 10,
            delay_ms: 500,
            direction: MorphDirection::default(),
        }
    }
}

impl MorphOptions {
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_direction(mut self, direction: MorphDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
