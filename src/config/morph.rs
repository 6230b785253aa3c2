use crate::morph::MorphOptions;
use crate::transform::Operation;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct MorphToolConfig {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Applied to the source before morphing.
    #[serde(default)]
    pub source_operations: Vec<Operation>,
    /// Applied to the target before it is resampled to the source's size.
    #[serde(default)]
    pub target_operations: Vec<Operation>,
    #[serde(default)]
    pub morph: MorphOptions,
    pub output: MorphOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct MorphOutputConfig {
    pub frames_dir: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// Honour the inter-frame delay while writing frames.
    #[serde(default)]
    pub realtime: bool,
}
