//! JSON configuration for the color registry.
//!
//! ```json
//! { "colors": ["red", "blue"], "extra_colors": ["rojo"] }
//! ```
//! - `colors` replaces the default registry contents when present.
//! - `extra_colors` are appended afterwards, in order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pointkit::ColorRegistry;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub colors: Option<Vec<String>>,
    pub extra_colors: Vec<String>,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Registry built from this config, then `cli_colors` appended.
    pub fn registry(&self, cli_colors: &[String]) -> ColorRegistry {
        let mut registry = match &self.colors {
            Some(colors) => ColorRegistry::from_colors(colors.iter().cloned()),
            None => ColorRegistry::default(),
        };
        for color in self.extra_colors.iter().chain(cli_colors) {
            registry.add_color(color.clone());
        }
        registry
    }
}
