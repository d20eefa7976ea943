//! Texel configuration file handling
//!
//! Settings are read from `texel.toml`, either the path given with
//! `--config` or the one in the current directory. Command line flags
//! override anything set here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "texel.toml";

/// Contents of `texel.toml`
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct TexelConfig {
    /// Extra directories searched for input files
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
    /// Option string passed to the reader (e.g. "1024x512 rs=2.0")
    #[serde(default)]
    pub option_string: Option<String>,
    /// Load system fonts so text renders
    #[serde(default)]
    pub load_system_fonts: bool,
    /// Directory for rendered PNGs when no explicit output is given
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl TexelConfig {
    /// Load configuration from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: TexelConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Load `texel.toml` from a directory, or defaults when there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
