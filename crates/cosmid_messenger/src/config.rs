//! Output settings for the messenger.
//!
//! Color is an explicit switch carried by each `Messenger`, never the
//! process-wide override of the color library.
//!
//! ```toml
//! color = "never"
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Whether ANSI styling is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Always,
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }

    pub fn enabled(&self) -> bool {
        matches!(self, ColorMode::Always)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessengerConfig {
    #[serde(default)]
    pub color: ColorMode,
}

impl MessengerConfig {
    /// Config with styling turned off
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file. A missing file is an error, not a default.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), color = config.color.as_str(), "loaded messenger config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> String {
        // A struct of plain enums always serializes
        toml::to_string(self).unwrap_or_default()
    }
}
