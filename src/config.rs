//! Configuration file support
//!
//! Defaults come from `<config dir>/wordpop/config.toml`; CLI flags
//! override them. A missing or invalid file falls back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::entry::DEFAULT_LIST_HEIGHT;
use crate::suggest::MatchStyle;

/// Matching configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct MatchConfig {
    #[serde(default)]
    pub style: MatchStyle,
    #[serde(default)]
    pub ignore_case: bool,
}

/// Suggestion list configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_height")]
    pub height: u16,
}

fn default_height() -> u16 {
    DEFAULT_LIST_HEIGHT
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            height: default_height(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default, rename = "match")]
    pub matching: MatchConfig,
    #[serde(default)]
    pub list: ListConfig,
}

impl Config {
    /// Load the user configuration, falling back to defaults when the file
    /// is missing or unparseable.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|err| {
            log::warn!("ignoring invalid config {}: {err}", path.display());
            Self::default()
        })
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordpop").join("config.toml"))
}
