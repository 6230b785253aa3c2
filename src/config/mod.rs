//! JSON configuration for the demo tools.
pub mod morph;
pub mod transform;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON config file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read config {}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| Error::Config(format!("failed to parse config {}: {e}", path.display())))
}
