use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::adjust::AdjustParams;
use crate::consts::DEFAULT_EXPORT_FILENAME;
use crate::error::{GlimmerError, Result};

/// A saved adjustment preset, stored as TOML.
///
/// ```toml
/// input = "photo.jpg"
/// output = "result.png"
///
/// [params]
/// brightness = 20
/// contrast = 40
/// opacity = 0.8
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub params: AdjustParams,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILENAME)
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: default_output(),
            params: AdjustParams::default(),
        }
    }
}

impl AdjustConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| GlimmerError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GlimmerError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
