//! Content directory loading.
//!
//! Reads everything the page is rendered from, once, into an immutable
//! [`Portfolio`]:
//!
//! ```text
//! content/
//! ├── config.toml        # Site config (optional)
//! ├── hero.md            # Short markdown bio under the hero title (optional)
//! ├── about.json         # Role cards          [{ title, imageSrc, description }]
//! ├── skills.json        # Skills grid         [{ title, imageSrc }]
//! ├── history.json       # Work history        [{ role, organisation, startDate, endDate, imageSrc, experiences }]
//! ├── projects.json      # Project cards       [{ title, imageSrc, description, skills, demo, source }]
//! └── assets/            # Images, CV → copied to the output root
//! ```
//!
//! ## Failure policy
//!
//! Missing pieces degrade: an absent collection file loads as an empty
//! collection, an image reference that points nowhere renders as a
//! placeholder. Both are recorded as [`Diagnostic`] warnings. Content that
//! exists but cannot be parsed (invalid JSON syntax, a collection that is
//! not an array, invalid TOML) is an error: silently dropping a section
//! the author wrote is worse than refusing to build.

use crate::config::{self, SiteConfig};
use crate::types::{AboutEntry, HistoryEntry, ProjectEntry, SkillEntry};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SKILLS_FILE: &str = "skills.json";
pub const HISTORY_FILE: &str = "history.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const ABOUT_FILE: &str = "about.json";
pub const HERO_FILE: &str = "hero.md";
pub const ASSETS_DIR: &str = "assets";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A non-fatal problem found while loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// File the problem was found in, relative to the content root.
    pub file: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
        }
    }
}

/// Everything the page renders, read-only after load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Portfolio {
    pub about: Vec<AboutEntry>,
    pub skills: Vec<SkillEntry>,
    pub history: Vec<HistoryEntry>,
    pub projects: Vec<ProjectEntry>,
    /// Raw markdown of `hero.md`; empty when absent.
    pub hero_bio: String,
    pub config: SiteConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Load a content directory.
pub fn load(root: &Path) -> Result<Portfolio, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::MissingRoot(root.to_path_buf()));
    }

    let config = config::load_config(root)?;
    let mut diagnostics = Vec::new();

    let about = load_collection(root, ABOUT_FILE, &mut diagnostics)?;
    let skills = load_collection(root, SKILLS_FILE, &mut diagnostics)?;
    let history = load_collection(root, HISTORY_FILE, &mut diagnostics)?;
    let projects = load_collection(root, PROJECTS_FILE, &mut diagnostics)?;

    let hero_path = root.join(HERO_FILE);
    let hero_bio = if hero_path.is_file() {
        fs::read_to_string(&hero_path)?
    } else {
        String::new()
    };

    let mut portfolio = Portfolio {
        about,
        skills,
        history,
        projects,
        hero_bio,
        config,
        diagnostics,
    };
    let missing = missing_images(&portfolio, &root.join(ASSETS_DIR));
    portfolio.diagnostics.extend(missing);
    Ok(portfolio)
}

/// Read one JSON array. An absent file is an empty collection plus a
/// warning.
fn load_collection<T: DeserializeOwned>(
    root: &Path,
    file: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<T>, ContentError> {
    let path = root.join(file);
    if !path.is_file() {
        diagnostics.push(Diagnostic::new(file, "file not found, section will be empty"));
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        diagnostics.push(Diagnostic::new(file, "file is empty, section will be empty"));
        return Ok(Vec::new());
    }
    serde_json::from_str(&content).map_err(|source| ContentError::Json { path, source })
}

impl Portfolio {
    /// Every image reference with the file that declares it, in page order.
    pub fn image_references(&self) -> Vec<(&'static str, &str)> {
        let mut refs = Vec::new();
        if !self.config.profile.hero_image.is_empty() {
            refs.push(("config.toml", self.config.profile.hero_image.as_str()));
        }
        refs.extend(self.about.iter().map(|e| (ABOUT_FILE, e.image_src.as_str())));
        refs.extend(self.skills.iter().map(|e| (SKILLS_FILE, e.image_src.as_str())));
        refs.extend(self.history.iter().map(|e| (HISTORY_FILE, e.image_src.as_str())));
        refs.extend(self.projects.iter().map(|e| (PROJECTS_FILE, e.image_src.as_str())));
        refs
    }
}

/// Warnings for image references that do not resolve to a file under
/// `assets/`. External URLs are not checked. Each distinct reference is
/// reported once.
fn missing_images(portfolio: &Portfolio, assets: &Path) -> Vec<Diagnostic> {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for (file, reference) in portfolio.image_references() {
        let reference = reference.trim();
        if seen.contains(&reference) {
            continue;
        }
        seen.push(reference);
        if reference.is_empty() {
            out.push(Diagnostic::new(file, "entry has no image reference"));
        } else if !crate::assets::is_external(reference) && !assets.join(reference).is_file() {
            out.push(Diagnostic::new(
                file,
                format!("image not found: assets/{reference}"),
            ));
        }
    }
    out
}
