//! # Code window configuration
//!
//! Fixed parameters for one generation/layout call: the target surface and
//! the request settings passed to the text generator.
//!
//! ```rust
//! use cw_core::config::CodeWindowConfig;
//!
//! let config = CodeWindowConfig::default();
//! let court = CodeWindowConfig::basketball();
//! ```

mod env;

pub use env::{load_from_env, CONFIG_PATH_ENV, SURFACE_ENV};

use serde::{Deserialize, Serialize};

use crate::surface::Surface;

/// Request settings for the external text generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { model: "gpt-4".to_string(), temperature: 0.7, max_tokens: 700 }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("temperature must be within 0.0..=2.0, got {}", self.temperature));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeWindowConfig {
    pub surface: Surface,
    pub generation: GenerationConfig,
}

impl CodeWindowConfig {
    pub fn soccer() -> Self {
        Self::default()
    }

    pub fn basketball() -> Self {
        Self { surface: Surface::Basketball, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.generation.validate()
    }
}
