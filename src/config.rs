//! Montage configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a `config.toml` in the config directory overrides them, and
//! CLI flags (such as `--base-url`) override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [cdn]
//! base_url = ""             # Prefixed to every media URL
//!
//! [images]
//! quality = 90              # q= parameter (1-100)
//! widths = [640, 750, 828, 1080, 1200, 1920, 2048, 3840]
//!
//! [viewport]
//! mobile_max_width = 767    # Viewports at or below this width are mobile
//! ```
//!
//! Config files are sparse; unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Montage configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MontageConfig {
    /// Image CDN settings.
    pub cdn: CdnConfig,
    /// Rendition settings (quality, srcset widths).
    pub images: ImagesConfig,
    /// Mobile breakpoint.
    pub viewport: ViewportConfig,
}

impl MontageConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.quality == 0 || self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 1-100".into(),
            ));
        }
        if self.images.widths.is_empty() {
            return Err(ConfigError::Validation(
                "images.widths must not be empty".into(),
            ));
        }
        if self.images.widths.contains(&0) {
            return Err(ConfigError::Validation(
                "images.widths values must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CdnConfig {
    /// Prefix for every media URL. Empty means URLs stay relative.
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Value of the `q=` parameter.
    pub quality: u32,
    /// Candidate widths for responsive `srcset` entries.
    pub widths: Vec<u32>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            quality: 90,
            widths: vec![640, 750, 828, 1080, 1200, 1920, 2048, 3840],
        }
    }
}

impl ImagesConfig {
    /// Largest configured width, used for the fallback `src`.
    pub fn max_width(&self) -> u32 {
        self.widths.iter().copied().max().unwrap_or(crate::loader::MOBILE_WIDTH)
    }

    /// Widths sorted ascending with duplicates removed.
    pub fn sorted_widths(&self) -> Vec<u32> {
        let mut widths = self.widths.clone();
        widths.sort_unstable();
        widths.dedup();
        widths
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Viewports at or below this CSS pixel width are treated as mobile.
    pub mobile_max_width: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 767,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(MontageConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<MontageConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: MontageConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in `dir`, layered over stock defaults.
pub fn load_config(dir: &Path) -> Result<MontageConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Fully commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Photo Montage Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Image CDN
# ---------------------------------------------------------------------------
[cdn]
# Prefixed to every media URL, e.g. "https://example.cdn.net".
# Leave empty to keep URLs relative. Overridden by --base-url.
base_url = ""

# ---------------------------------------------------------------------------
# Renditions
# ---------------------------------------------------------------------------
[images]
# Value of the q= query parameter (1 = worst, 100 = best).
quality = 90

# Candidate widths for responsive srcset entries. The mobile layout ignores
# these and always requests 640px.
widths = [640, 750, 828, 1080, 1200, 1920, 2048, 3840]

# ---------------------------------------------------------------------------
# Viewport
# ---------------------------------------------------------------------------
[viewport]
# Viewports at or below this width (CSS px) get the single-image layout.
mobile_max_width = 767
"##
}
