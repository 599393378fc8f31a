//! Configuration loading and parsing.
//!
//! Parses `pynav.toml`, preferring a file in the working directory before
//! the platform config dir. Unknown fields are ignored and parse errors fall
//! back to defaults so a broken config never blocks a session. Keys:
//!
//! * `[editor] tab_width` — indent unit (spaces) used when a newly inserted
//!   line needs synthesized indentation.
//! * `[run] python` — interpreter command for the process sandbox.
//! * `[files] default_save` — filename used by `save` without an argument.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_width")]
    pub tab_width: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_width() -> u8 {
        4
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RunConfig {
    #[serde(default = "RunConfig::default_python")]
    pub python: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            python: Self::default_python(),
        }
    }
}

impl RunConfig {
    fn default_python() -> String {
        "python3".to_string()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    #[serde(default = "FilesConfig::default_save_name")]
    pub default_save: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            default_save: Self::default_save_name(),
        }
    }
}

impl FilesConfig {
    fn default_save_name() -> String {
        "code.py".to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

/// Best-effort config path: working directory first, then platform dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("pynav.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("pynav").join("pynav.toml");
    }
    PathBuf::from("pynav.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<Config>(&content) {
            Ok(cfg) => Ok(cfg),
            Err(e) => {
                tracing::warn!(target: "config", file = %path.display(), %e, "config_parse_failed_using_defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}
