// src/config.rs

//! Configuration for locating `.fnt` files.
//!
//! The structs deserialize from JSON; every field has a default so a partial
//! (or empty) document is valid.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Process-wide default configuration.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Font lookup settings.
    pub fonts: FontsConfig,
}

/// Where and how bare font names are resolved to files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FontsConfig {
    /// Directories searched, in order, for a bare font name.
    pub search_dirs: Vec<PathBuf>,
    /// Extension appended to bare names, without the dot.
    pub extension: String,
    /// Font used when a caller does not name one.
    pub default_font: Option<String>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        FontsConfig {
            search_dirs: vec![PathBuf::from("fonts")],
            extension: "fnt".to_string(),
            default_font: None,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse font configuration")
    }

    /// Reads and parses a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }
}
