// crates/drape-core/src/config.rs
//! JSON settings files.

use crate::{Result, TransitionSettings};
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn settings_from_str(json: &str) -> Result<TransitionSettings> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<TransitionSettings> {
    let path = path.as_ref();
    debug!("Loading transition settings from {}", path.display());
    let json = fs::read_to_string(path)?;
    settings_from_str(&json)
}
