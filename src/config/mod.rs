// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[content]` - Content root directory and image store base
//! - `[viewer]` - Container layout and zoom tuning for the pan/zoom viewers
//! - `[cache]` - Decoded image cache capacity
//!
//! Every field is optional. Missing fields fall back to [`defaults`], and
//! out-of-range values are clamped when the effective settings are built.
//!
//! # Examples
//!
//! ```no_run
//! use analogy_gallery::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.viewer.zoom_step = Some(0.2);
//! let tuning = config.viewer.tuning();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::viewer::{ContainerLayout, ViewerTuning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Where chart content and images come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Directory holding `finalQuestionare/`, `data/` and `description/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Remote URL or local directory the chart images are read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base: Option<String>,
}

impl ContentConfig {
    #[must_use]
    pub fn root_or_default(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_ROOT))
    }

    #[must_use]
    pub fn image_base_or_default(&self) -> String {
        self.image_base
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_string())
    }
}

/// Pan/zoom viewer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Share of the window height given to one image container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_fraction: Option<f32>,

    /// Height reserved for heading and controls, in root font units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rem_offset: Option<f32>,

    /// Root font size in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_font_size: Option<f32>,

    /// Scale change per wheel pixel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel_sensitivity: Option<f32>,

    /// Scale change for the zoom buttons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,
}

impl ViewerConfig {
    /// Effective container layout with defaults applied and values clamped.
    #[must_use]
    pub fn layout(&self) -> ContainerLayout {
        ContainerLayout {
            viewport_fraction: self
                .viewport_fraction
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_VIEWPORT_FRACTION)
                .clamp(0.05, 1.0),
            rem_offset: self
                .rem_offset
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_REM_OFFSET)
                .max(0.0),
            root_font_size: self
                .root_font_size
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_ROOT_FONT_SIZE)
                .clamp(MIN_ROOT_FONT_SIZE, MAX_ROOT_FONT_SIZE),
        }
    }

    /// Effective zoom tuning with defaults applied and values clamped.
    #[must_use]
    pub fn tuning(&self) -> ViewerTuning {
        ViewerTuning {
            wheel_sensitivity: self
                .wheel_sensitivity
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_WHEEL_SENSITIVITY)
                .clamp(MIN_WHEEL_SENSITIVITY, MAX_WHEEL_SENSITIVITY),
            zoom_step: self
                .zoom_step
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_ZOOM_STEP)
                .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP),
        }
    }
}

/// Image cache settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Number of decoded images kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_images: Option<usize>,
}

impl CacheConfig {
    #[must_use]
    pub fn max_images_or_default(&self) -> usize {
        self.max_images
            .unwrap_or(DEFAULT_CACHE_MAX_IMAGES)
            .clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "ignoring {}: {err}; using default settings",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            content: ContentConfig {
                root: Some(PathBuf::from("/srv/analogies")),
                image_base: Some("https://example.org/public".to_string()),
            },
            viewer: ViewerConfig {
                zoom_step: Some(0.25),
                ..ViewerConfig::default()
            },
            cache: CacheConfig {
                max_images: Some(8),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[viewer\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str("[viewer]\nroot_font_size = 20.0\n").unwrap();

        assert_eq!(config.viewer.root_font_size, Some(20.0));
        assert!(config.content.root.is_none());
        assert_eq!(config.cache.max_images_or_default(), DEFAULT_CACHE_MAX_IMAGES);
    }

    #[test]
    fn default_layout_matches_defaults() {
        let layout = ViewerConfig::default().layout();
        assert_abs_diff_eq!(layout.viewport_fraction, DEFAULT_VIEWPORT_FRACTION);
        assert_abs_diff_eq!(layout.rem_offset, DEFAULT_REM_OFFSET);
        assert_abs_diff_eq!(layout.root_font_size, DEFAULT_ROOT_FONT_SIZE);
    }

    #[test]
    fn tuning_clamps_out_of_range_values() {
        let viewer = ViewerConfig {
            wheel_sensitivity: Some(10.0),
            zoom_step: Some(-1.0),
            ..ViewerConfig::default()
        };
        let tuning = viewer.tuning();
        assert_abs_diff_eq!(tuning.wheel_sensitivity, MAX_WHEEL_SENSITIVITY);
        assert_abs_diff_eq!(tuning.zoom_step, MIN_ZOOM_STEP);
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let viewer = ViewerConfig {
            root_font_size: Some(f32::NAN),
            ..ViewerConfig::default()
        };
        assert_abs_diff_eq!(viewer.layout().root_font_size, DEFAULT_ROOT_FONT_SIZE);
    }

    #[test]
    fn cache_capacity_is_clamped() {
        let cache = CacheConfig {
            max_images: Some(0),
        };
        assert_eq!(cache.max_images_or_default(), MIN_CACHE_MAX_IMAGES);
    }

    #[test]
    fn content_defaults_point_at_public_store() {
        let content = ContentConfig::default();
        assert_eq!(content.root_or_default(), PathBuf::from(DEFAULT_CONTENT_ROOT));
        assert_eq!(content.image_base_or_default(), DEFAULT_IMAGE_BASE);
    }
}
