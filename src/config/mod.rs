// src/config/mod.rs
pub mod consts;
pub mod options;

use std::{fs, path::Path};

pub use options::AppOptions;

/// Load settings from a YAML file. A missing file gives the defaults; every
/// key in the file is optional.
pub fn load(path: &Path) -> Result<AppOptions, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(AppOptions::default());
    }
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(AppOptions::default());
    }
    let opts = serde_yaml::from_str(&text)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    Ok(opts)
}
