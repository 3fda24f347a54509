// src/config.rs
//! Optional `linkrank.toml` settings, overridden by CLI arguments.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "linkrank.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_pages_file")]
    pub pages_file: PathBuf,
    #[serde(default = "default_links_file")]
    pub links_file: PathBuf,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pages_file: default_pages_file(),
            links_file: default_links_file(),
            iterations: default_iterations(),
            top: default_top(),
        }
    }
}

fn default_pages_file() -> PathBuf {
    PathBuf::from("pages.txt")
}
fn default_links_file() -> PathBuf {
    PathBuf::from("links.txt")
}
fn default_iterations() -> usize {
    10
}
fn default_top() -> usize {
    10
}

impl Settings {
    /// Loads `linkrank.toml` from the working directory. A missing file
    /// yields the defaults; an unreadable or invalid file is an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }
}
