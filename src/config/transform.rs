use crate::transform::Operation;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct TransformToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// Optional final blend against a second pixel map.
    #[serde(default)]
    pub blend: Option<BlendConfig>,
    #[serde(default)]
    pub output: TransformOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct BlendConfig {
    pub with: PathBuf,
    /// Weight of the transformed input; the partner gets `1 - alpha`.
    pub alpha: f64,
    /// Resample the partner to the input's size instead of failing on a mismatch.
    #[serde(default)]
    pub rescale: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransformOutputConfig {
    pub ppm: Option<PathBuf>,
    pub png: Option<PathBuf>,
    /// Dump the result's channel values to stdout.
    pub print: bool,
}
