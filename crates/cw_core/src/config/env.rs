use std::{env, fs};

use super::CodeWindowConfig;
use crate::surface::Surface;

pub const CONFIG_PATH_ENV: &str = "CODEWINDOW_CONFIG_PATH";
pub const SURFACE_ENV: &str = "CODEWINDOW_SURFACE";

/// Default config, then the JSON file named by `CODEWINDOW_CONFIG_PATH`, then
/// the `CODEWINDOW_SURFACE` override. Empty variables are ignored.
pub fn load_from_env() -> Result<CodeWindowConfig, String> {
    load_with(|key| env::var(key).ok())
}

pub(crate) fn load_with(var: impl Fn(&str) -> Option<String>) -> Result<CodeWindowConfig, String> {
    let mut config = match non_empty(var(CONFIG_PATH_ENV)) {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|e| {
                format!("Failed to read config file from {CONFIG_PATH_ENV}='{path}': {e}")
            })?;
            CodeWindowConfig::from_json(&content).map_err(|e| {
                format!("Failed to parse config JSON from {CONFIG_PATH_ENV}='{path}': {e}")
            })?
        }
        None => CodeWindowConfig::default(),
    };

    if let Some(surface) = non_empty(var(SURFACE_ENV)) {
        config.surface = surface
            .parse::<Surface>()
            .map_err(|e| format!("Invalid {SURFACE_ENV}: {e}"))?;
    }

    config.validate().map_err(|e| format!("Invalid code window config: {e}"))?;
    Ok(config)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
