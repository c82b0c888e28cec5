// SPDX-License-Identifier: MPL-2.0
//! Loading user preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Data file, image selection and initial ordering
//! - `[grid]` - Column and row geometry
//! - `[lightbox]` - Zoom step and swipe threshold
//! - `[remote]` - Allowed remote image locations
//! - `[cache]` - In-memory image cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("cache holds {} images", config.cache.max_images());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::{FilterOptions, SelectionPolicy, SortBy, SortOrder};
use crate::domain::layout::GridParams;
use crate::domain::ui::{newtypes::zoom_bounds, ZoomStep};
use crate::error::{Error, Result};
use crate::media::remote::{AllowList, RemotePattern};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Initial sort field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    #[default]
    GalleryName,
    Url,
}

impl From<SortField> for SortBy {
    fn from(field: SortField) -> Self {
        match field {
            SortField::GalleryName => SortBy::GalleryName,
            SortField::Url => SortBy::Url,
        }
    }
}

/// Initial sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl From<SortDirection> for SortOrder {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => SortOrder::Asc,
            SortDirection::Desc => SortOrder::Desc,
        }
    }
}

/// Which image of each gallery entry is shown.
///
/// Written as an integer position (`image_selection = 1`) or `"all"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSelection {
    Index(usize),
    All,
}

impl Default for ImageSelection {
    fn default() -> Self {
        ImageSelection::Index(DEFAULT_IMAGE_SELECTION_INDEX)
    }
}

impl From<ImageSelection> for SelectionPolicy {
    fn from(selection: ImageSelection) -> Self {
        match selection {
            ImageSelection::Index(index) => SelectionPolicy::Index(index),
            ImageSelection::All => SelectionPolicy::All,
        }
    }
}

impl Serialize for ImageSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ImageSelection::Index(index) => serializer.serialize_u64(*index as u64),
            ImageSelection::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for ImageSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Index(usize),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Index(index) => Ok(ImageSelection::Index(index)),
            Raw::Keyword(word) if word.eq_ignore_ascii_case("all") => Ok(ImageSelection::All),
            Raw::Keyword(other) => Err(D::Error::custom(format!(
                "invalid image_selection: {other}"
            ))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Gallery data and initial listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// JSON gallery file. The bundled demo gallery is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_image_selection", skip_serializing_if = "Option::is_none")]
    pub image_selection: Option<ImageSelection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortDirection>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            image_selection: default_image_selection(),
            sort_by: Some(SortField::default()),
            sort_order: Some(SortDirection::default()),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn selection_policy(&self) -> SelectionPolicy {
        self.image_selection.unwrap_or_default().into()
    }

    /// Options the search bar starts with, with an empty search term.
    #[must_use]
    pub fn initial_filter_options(&self) -> FilterOptions {
        FilterOptions {
            search_term: String::new(),
            sort_by: self.sort_by.unwrap_or_default().into(),
            sort_order: self.sort_order.unwrap_or_default().into(),
        }
    }
}

/// Grid geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_column_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_column_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_columns: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_height: Option<u32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_column_width: Some(DEFAULT_MIN_COLUMN_WIDTH),
            max_column_width: Some(DEFAULT_MAX_COLUMN_WIDTH),
            max_columns: Some(DEFAULT_MAX_COLUMNS),
            row_height: Some(DEFAULT_ROW_HEIGHT),
        }
    }
}

impl GridConfig {
    /// Effective layout parameters.
    ///
    /// Zero values fall back to the defaults and the maximum column width
    /// is raised to the minimum when configured below it.
    #[must_use]
    pub fn params(&self) -> GridParams {
        let positive = |value: Option<u32>, fallback: u32| value.filter(|v| *v > 0).unwrap_or(fallback);

        let min_column_width = positive(self.min_column_width, DEFAULT_MIN_COLUMN_WIDTH);
        let max_column_width =
            positive(self.max_column_width, DEFAULT_MAX_COLUMN_WIDTH).max(min_column_width);

        GridParams {
            min_column_width,
            max_column_width,
            max_columns: positive(self.max_columns, DEFAULT_MAX_COLUMNS),
            row_height: positive(self.row_height, DEFAULT_ROW_HEIGHT),
        }
    }
}

/// Lightbox interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Zoom change per zoom-in / zoom-out action.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Horizontal distance a swipe must exceed to navigate.
    #[serde(default = "default_swipe_threshold", skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl LightboxConfig {
    #[must_use]
    pub fn zoom_step(&self) -> ZoomStep {
        ZoomStep::new(self.zoom_step.unwrap_or(zoom_bounds::DEFAULT_STEP))
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
            .filter(|t| t.is_finite() && *t > 0.0)
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Allowed remote image locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_patterns")]
    pub patterns: Vec<RemotePattern>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            patterns: default_remote_patterns(),
        }
    }
}

impl RemoteConfig {
    #[must_use]
    pub fn allow_list(&self) -> AllowList {
        AllowList::new(self.patterns.clone())
    }
}

/// In-memory image cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    #[serde(default = "default_cache_max_images", skip_serializing_if = "Option::is_none")]
    pub max_images: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_images: default_cache_max_images(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub fn max_images(&self) -> usize {
        self.max_images
            .unwrap_or(DEFAULT_CACHE_MAX_IMAGES)
            .clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_image_selection() -> Option<ImageSelection> {
    Some(ImageSelection::default())
}

fn default_zoom_step() -> Option<f32> {
    Some(zoom_bounds::DEFAULT_STEP)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_remote_patterns() -> Vec<RemotePattern> {
    vec![RemotePattern::default()]
}

fn default_cache_max_images() -> Option<usize> {
    Some(DEFAULT_CACHE_MAX_IMAGES)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
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
                    tracing::warn!(path = %path.display(), %err, "Failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.selection_policy(), SelectionPolicy::Index(1));
        assert_eq!(config.grid.params(), GridParams::default());
        assert_eq!(config.lightbox.zoom_step().value(), 0.5);
        assert_eq!(config.lightbox.swipe_threshold(), 50.0);
        assert_eq!(config.remote.patterns, vec![RemotePattern::https("brave.photos")]);
        assert_eq!(config.cache.max_images(), DEFAULT_CACHE_MAX_IMAGES);
    }

    #[test]
    fn grid_defaults_agree_with_domain_defaults() {
        let params = GridParams::default();
        assert_eq!(params.min_column_width, DEFAULT_MIN_COLUMN_WIDTH);
        assert_eq!(params.max_column_width, DEFAULT_MAX_COLUMN_WIDTH);
        assert_eq!(params.max_columns, DEFAULT_MAX_COLUMNS);
        assert_eq!(params.row_height, DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.gallery.data_file = Some(PathBuf::from("/srv/galleries.json"));
        config.gallery.image_selection = Some(ImageSelection::All);
        config.gallery.sort_by = Some(SortField::Url);
        config.gallery.sort_order = Some(SortDirection::Desc);
        config.remote.patterns.push(RemotePattern {
            protocol: None,
            hostname: "**.example.com".into(),
            port: None,
            pathname: Some("/img/**".into()),
        });

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

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[gallery]\nimage_selection = 0\nsort_order = \"desc\"\n\n[grid]\nrow_height = 150\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.gallery.selection_policy(), SelectionPolicy::Index(0));
        let options = loaded.gallery.initial_filter_options();
        assert_eq!(options.sort_by, SortBy::GalleryName);
        assert_eq!(options.sort_order, SortOrder::Desc);
        assert_eq!(loaded.grid.params().row_height, 150);
        assert_eq!(loaded.remote, RemoteConfig::default());
    }

    #[test]
    fn image_selection_accepts_all_keyword() {
        let loaded: Config = toml::from_str("[gallery]\nimage_selection = \"ALL\"\n").expect("parse");
        assert_eq!(loaded.gallery.selection_policy(), SelectionPolicy::All);

        let bad = toml::from_str::<Config>("[gallery]\nimage_selection = \"some\"\n");
        assert!(bad.is_err());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn grid_params_sanitize_zero_and_inverted_values() {
        let grid = GridConfig {
            min_column_width: Some(0),
            max_column_width: Some(50),
            max_columns: Some(0),
            row_height: None,
        };
        let params = grid.params();
        assert_eq!(params.min_column_width, DEFAULT_MIN_COLUMN_WIDTH);
        assert_eq!(params.max_column_width, DEFAULT_MIN_COLUMN_WIDTH);
        assert_eq!(params.max_columns, DEFAULT_MAX_COLUMNS);
        assert_eq!(params.row_height, DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn lightbox_values_are_clamped() {
        let lightbox = LightboxConfig {
            zoom_step: Some(42.0),
            swipe_threshold: Some(-3.0),
        };
        assert_eq!(lightbox.zoom_step().value(), zoom_bounds::MAX_STEP);
        assert_eq!(lightbox.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_reads_settings_file_in_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.cache.max_images = Some(64);

        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.cache.max_images(), 64);
    }
}
