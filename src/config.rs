//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! are the base layer; the user's `config.toml` in the content root is
//! merged on top, so it only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! lang = "en"
//! base_path = ""            # URL prefix when served from a subdirectory
//! description = ""
//!
//! [profile]
//! name = "Fouleni Flen"
//! tagline = "full-stack developer"
//! email = "myemail@email.com"
//! linkedin = "https://www.linkedin.com/myname"
//! github = "https://www.github.com/myname"
//! cv_path = "cv.pdf"        # Relative to assets/
//! cv_download_name = "CV.pdf"
//! hero_image = "hero/user-image.jpg"
//! tech_stack = ["React", "Node.js", "Full-Stack"]
//! availability = "Available for new opportunities"
//!
//! [colors]
//! background = "#111827"
//! surface = "#1f2937"
//! text = "#ffffff"
//! text_muted = "#9ca3af"
//! accent = "#60a5fa"
//! accent_alt = "#a855f7"
//! highlight = "#ec4899"
//!
//! [motion]
//! enabled = true
//! respect_reduced_motion = true
//! scroll_threshold_px = 50
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level settings (title, language, URL prefix).
    pub site: SiteMeta,
    /// The person the portfolio presents.
    pub profile: ProfileConfig,
    /// Palette, emitted as CSS custom properties.
    pub colors: ColorConfig,
    /// Animation switches.
    pub motion: MotionConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.site.base_path;
        if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
            return Err(ConfigError::Validation(
                "site.base_path must be empty or start with '/' and not end with '/'".into(),
            ));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        if self.motion.scroll_threshold_px > 10_000 {
            return Err(ConfigError::Validation(
                "motion.scroll_threshold_px must be 0-10000".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// `<title>` of the page.
    pub title: String,
    /// `lang` attribute of the root element.
    pub lang: String,
    /// Prefix for every asset URL, e.g. `"/portfolio"`. Empty for the root.
    pub base_path: String,
    /// `<meta name="description">`; omitted when empty.
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            lang: "en".to_string(),
            base_path: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    pub name: String,
    /// Role shown in the hero line ("I'm a {tagline} ...").
    pub tagline: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// CV document, relative to `assets/`. Empty hides the download button.
    pub cv_path: String,
    /// File name suggested to the browser when downloading the CV.
    pub cv_download_name: String,
    /// Portrait, relative to `assets/`.
    pub hero_image: String,
    /// Chips under the hero copy.
    pub tech_stack: Vec<String>,
    /// Status line in the contact section. Empty hides it.
    pub availability: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Fouleni Flen".to_string(),
            tagline: "full-stack developer".to_string(),
            email: "myemail@email.com".to_string(),
            linkedin: "https://www.linkedin.com/myname".to_string(),
            github: "https://www.github.com/myname".to_string(),
            cv_path: "cv.pdf".to_string(),
            cv_download_name: "CV.pdf".to_string(),
            hero_image: "hero/user-image.jpg".to_string(),
            tech_stack: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "Full-Stack".to_string(),
            ],
            availability: "Available for new opportunities".to_string(),
        }
    }
}

/// Site palette. Every field becomes a `--color-*` custom property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    /// Cards, chips, contact rows.
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    /// Primary accent (links, title gradient start).
    pub accent: String,
    /// Secondary accent (gradient middle, hover glows).
    pub accent_alt: String,
    /// Third gradient stop.
    pub highlight: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#111827".to_string(),
            surface: "#1f2937".to_string(),
            text: "#ffffff".to_string(),
            text_muted: "#9ca3af".to_string(),
            accent: "#60a5fa".to_string(),
            accent_alt: "#a855f7".to_string(),
            highlight: "#ec4899".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// When false every element renders at rest: no entrance, no loops.
    /// Hover feedback stays.
    pub enabled: bool,
    /// Honour the visitor's `prefers-reduced-motion: reduce`.
    pub respect_reduced_motion: bool,
    /// Scroll offset past which the navigation bar switches to its
    /// scrolled style.
    pub scroll_threshold_px: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            respect_reduced_motion: true,
            scroll_threshold_px: 50,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
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
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at content/config.toml. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
title = "Portfolio"
lang = "en"

# URL prefix when the site is served from a subdirectory, e.g. "/portfolio".
# Must start with "/" and must not end with "/". Empty for the domain root.
base_path = ""

# <meta name="description">. Omitted when empty.
description = ""

# ---------------------------------------------------------------------------
# Profile
# ---------------------------------------------------------------------------
[profile]
name = "Fouleni Flen"

# Shown in the hero line: "I'm a <tagline> ..."
tagline = "full-stack developer"

email = "myemail@email.com"
linkedin = "https://www.linkedin.com/myname"
github = "https://www.github.com/myname"

# CV document, relative to content/assets/. Empty hides the download button.
cv_path = "cv.pdf"
cv_download_name = "CV.pdf"

# Portrait, relative to content/assets/.
hero_image = "hero/user-image.jpg"

# Chips under the hero copy, in display order.
tech_stack = ["React", "Node.js", "Full-Stack"]

# Status line in the contact section. Empty hides it.
availability = "Available for new opportunities"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#111827"
surface = "#1f2937"       # Cards, chips, contact rows
text = "#ffffff"
text_muted = "#9ca3af"
accent = "#60a5fa"        # Links, title gradient start
accent_alt = "#a855f7"    # Gradient middle, hover glows
highlight = "#ec4899"     # Third gradient stop

# ---------------------------------------------------------------------------
# Motion
# ---------------------------------------------------------------------------
[motion]
# false renders every element at rest: no entrance animations, no loops.
# Hover feedback stays.
enabled = true

# Disable transitions and loops for visitors who ask for reduced motion.
respect_reduced_motion = true

# Scroll offset (px) past which the navigation bar gets its scrolled style.
scroll_threshold_px = 50
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-accent: {accent};
    --color-accent-alt: {accent_alt};
    --color-highlight: {highlight};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        accent = colors.accent,
        accent_alt = colors.accent_alt,
        highlight = colors.highlight,
    )
}
