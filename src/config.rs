// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The file lives under the platform config directory (e.g.
//! `~/.config/IcedGallery/settings.toml`) and is tolerant of unknown or
//! malformed content: a broken file yields the defaults instead of an error
//! at startup.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// Default slideshow interval prefill, in seconds.
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: f64 = 5.0;

/// Which entry field the gallery listing is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Name,
    Size,
    Modified,
}

/// Direction of the listing sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub sort_by: Option<SortBy>,
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,
    #[serde(default)]
    pub exclude_dotfiles: Option<bool>,
    #[serde(default)]
    pub slideshow_interval_secs: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            sort_by: Some(SortBy::Name),
            sort_direction: Some(SortDirection::Ascending),
            exclude_dotfiles: Some(true),
            slideshow_interval_secs: Some(DEFAULT_SLIDESHOW_INTERVAL_SECS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            sort_by: Some(SortBy::Size),
            sort_direction: Some(SortDirection::Descending),
            exclude_dotfiles: Some(false),
            slideshow_interval_secs: Some(2.5),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.sort_by, config.sort_by);
        assert_eq!(loaded.sort_direction, config.sort_direction);
        assert_eq!(loaded.exclude_dotfiles, config.exclude_dotfiles);
        assert_eq!(loaded.slideshow_interval_secs, config.slideshow_interval_secs);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_sort_and_interval() {
        let config = Config::default();
        assert_eq!(config.sort_by, Some(SortBy::Name));
        assert_eq!(config.sort_direction, Some(SortDirection::Ascending));
        assert_eq!(
            config.slideshow_interval_secs,
            Some(DEFAULT_SLIDESHOW_INTERVAL_SECS)
        );
    }
}
