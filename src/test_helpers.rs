//! Shared test utilities for the folio test suite.
//!
//! Provides fixture setup, lookup helpers and small HTML probes that work
//! with the loaded [`Portfolio`] and the rendered page.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let portfolio = content::load(tmp.path()).unwrap();
//!
//! let project = find_project(&portfolio, "Weather App");
//! assert_eq!(project.skill_tags(), vec!["React", "API"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::Portfolio;
use crate::types::{HistoryEntry, ProjectEntry};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a tiny valid PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::from_pixel(width, height, image::Rgb([96, 165, 250]))
        .save(path)
        .unwrap();
}

// =========================================================================
// Portfolio lookups: panic with a clear message on miss
// =========================================================================

/// Find a project by title. Panics if not found.
pub fn find_project<'a>(portfolio: &'a Portfolio, title: &str) -> &'a ProjectEntry {
    portfolio
        .projects
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();
            panic!("project '{title}' not found. Available: {titles:?}")
        })
}

/// Find a history entry by role. Panics if not found.
pub fn find_history<'a>(portfolio: &'a Portfolio, role: &str) -> &'a HistoryEntry {
    portfolio
        .history
        .iter()
        .find(|h| h.role == role)
        .unwrap_or_else(|| {
            let roles: Vec<&str> = portfolio.history.iter().map(|h| h.role.as_str()).collect();
            panic!("history entry '{role}' not found. Available: {roles:?}")
        })
}

/// All about-card titles in file order.
pub fn about_titles(portfolio: &Portfolio) -> Vec<&str> {
    portfolio.about.iter().map(|a| a.title.as_str()).collect()
}

// =========================================================================
// HTML probes
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// The markup between the opening tag carrying `id="{id}"` and the next
/// `</section>`. Panics if the section is absent.
pub fn section_html<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!("id=\"{id}\"");
    let start = html
        .find(&marker)
        .unwrap_or_else(|| panic!("section '{id}' not found in page"));
    let rest = &html[start..];
    let end = rest.find("</section>").unwrap_or(rest.len());
    &rest[..end]
}

/// Assert `needles` appear in `html` in the given order.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{needle}' not found (in order) after byte {from}"),
        }
    }
}
