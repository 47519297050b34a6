// src/config.rs

//! Rendering options.
//!
//! `RenderConfig` can be built in code or deserialized from JSON. Every field
//! has a default, so a config file only needs to name what it changes:
//!
//! ```json
//! { "use_css_classes": true }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for the HTML renderer. The plain-text renderer takes none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit `class="ansi-red-fg"` style classes for named colors instead of
    /// inline `color:rgb(...)` styles. Truecolor and extended-palette colors
    /// are always inline since they have no class.
    pub use_css_classes: bool,
    /// Escape `&`, `<` and `>` in text. Turn off only for input that is
    /// already HTML-safe.
    pub escape_html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            use_css_classes: false,
            escape_html: true,
        }
    }
}

impl RenderConfig {
    /// Parses a config from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse render config JSON")
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
