//! Static assets: image URL resolution and copying `assets/` to the output.
//!
//! Image references in content are paths relative to `content/assets/`
//! (`"about/cursor-icon.png"`). [`image_url`] turns one into the URL the
//! page uses; [`ImageResolver`] additionally checks the file exists and
//! reads its intrinsic size so the page can reserve layout space.
//!
//! Copying is incremental: a file whose SHA-256 matches the one already in
//! the output directory is left alone. Content hashes rather than mtimes,
//! so a fresh `git checkout` does not force a full copy.

use crate::content::ASSETS_DIR;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// URL of an asset-relative reference.
///
/// `base_path` is the site's URL prefix (empty or `"/sub"`). Absolute URLs
/// and `data:` URIs pass through untouched. With an empty base path the
/// URL stays relative so the page also works opened from disk.
pub fn image_url(base_path: &str, reference: &str) -> String {
    let reference = reference.trim();
    if is_external(reference) {
        return reference.to_string();
    }
    let reference = reference.trim_start_matches('/');
    if base_path.is_empty() {
        format!("{ASSETS_DIR}/{reference}")
    } else {
        format!("{base_path}/{ASSETS_DIR}/{reference}")
    }
}

pub(crate) fn is_external(reference: &str) -> bool {
    reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("data:")
        || reference.starts_with("//")
}

/// Outcome of resolving one image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImage {
    /// File exists. Dimensions are present when the format is decodable.
    Found {
        src: String,
        dimensions: Option<(u32, u32)>,
    },
    /// External URL, not checked.
    External { src: String },
    /// Referenced file does not exist; rendered as a broken-image placeholder.
    Missing { src: String },
    /// No reference at all.
    Empty,
}

impl ResolvedImage {
    pub fn src(&self) -> Option<&str> {
        match self {
            ResolvedImage::Found { src, .. }
            | ResolvedImage::External { src }
            | ResolvedImage::Missing { src } => Some(src),
            ResolvedImage::Empty => None,
        }
    }
}

/// Resolves references against a content directory's `assets/`.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    assets_dir: PathBuf,
    base_path: String,
}

impl ImageResolver {
    pub fn new(content_root: &Path, base_path: &str) -> Self {
        Self {
            assets_dir: content_root.join(ASSETS_DIR),
            base_path: base_path.to_string(),
        }
    }

    pub fn resolve(&self, reference: &str) -> ResolvedImage {
        let reference = reference.trim();
        if reference.is_empty() {
            return ResolvedImage::Empty;
        }
        let src = image_url(&self.base_path, reference);
        if is_external(reference) {
            return ResolvedImage::External { src };
        }
        let path = self.assets_dir.join(reference.trim_start_matches('/'));
        if !path.is_file() {
            return ResolvedImage::Missing { src };
        }
        let dimensions = image::image_dimensions(&path).ok();
        ResolvedImage::Found { src, dimensions }
    }

    /// URL of a non-image asset (the CV), without an existence check.
    pub fn url(&self, reference: &str) -> String {
        image_url(&self.base_path, reference)
    }
}

/// SHA-256 hash of a file's contents, returned as a hex string.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{:x}", digest))
}

/// Summary of an asset copy run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyStats {
    pub copied: u32,
    pub unchanged: u32,
}

impl CopyStats {
    pub fn total(&self) -> u32 {
        self.copied + self.unchanged
    }
}

/// Mirror `content/assets/` into `{output}/assets/`.
///
/// Files whose content already matches are skipped. A missing source
/// directory copies nothing.
pub fn copy_assets(content_root: &Path, output_dir: &Path) -> Result<CopyStats, AssetError> {
    let src_root = content_root.join(ASSETS_DIR);
    let dst_root = output_dir.join(ASSETS_DIR);
    let mut stats = CopyStats::default();
    if !src_root.is_dir() {
        return Ok(stats);
    }

    for entry in WalkDir::new(&src_root).sort_by_file_name() {
        let entry = entry.map_err(|source| AssetError::Walk {
            path: src_root.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(&src_root).unwrap_or(entry.path());
        // Dotfiles (.DS_Store, editor swap files) are not assets.
        if relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        {
            continue;
        }
        let dst = dst_root.join(relative);
        if dst.is_file() && hash_file(&dst)? == hash_file(entry.path())? {
            stats.unchanged += 1;
            continue;
        }
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dst)?;
        stats.copied += 1;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_png;
    use tempfile::TempDir;

    #[test]
    fn image_url_relative_without_base_path() {
        assert_eq!(image_url("", "about/icon.png"), "assets/about/icon.png");
    }

    #[test]
    fn image_url_with_base_path() {
        assert_eq!(
            image_url("/portfolio", "about/icon.png"),
            "/portfolio/assets/about/icon.png"
        );
    }

    #[test]
    fn image_url_strips_leading_slash() {
        assert_eq!(image_url("", "/hero/me.jpg"), "assets/hero/me.jpg");
    }

    #[test]
    fn image_url_passes_external_through() {
        assert_eq!(
            image_url("/p", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(image_url("", "data:image/png;base64,AA"), "data:image/png;base64,AA");
    }

    #[test]
    fn resolver_reads_dimensions() {
        let tmp = TempDir::new().unwrap();
        write_png(&tmp.path().join("assets/skills/rust.png"), 12, 8);
        let resolver = ImageResolver::new(tmp.path(), "");
        assert_eq!(
            resolver.resolve("skills/rust.png"),
            ResolvedImage::Found {
                src: "assets/skills/rust.png".into(),
                dimensions: Some((12, 8)),
            }
        );
    }

    #[test]
    fn resolver_undecodable_file_has_no_dimensions() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("assets")).unwrap();
        fs::write(tmp.path().join("assets/logo.svg"), "<svg/>").unwrap();
        let resolver = ImageResolver::new(tmp.path(), "");
        assert!(matches!(
            resolver.resolve("logo.svg"),
            ResolvedImage::Found { dimensions: None, .. }
        ));
    }

    #[test]
    fn resolver_missing_and_empty() {
        let tmp = TempDir::new().unwrap();
        let resolver = ImageResolver::new(tmp.path(), "/p");
        assert_eq!(
            resolver.resolve("gone.png"),
            ResolvedImage::Missing {
                src: "/p/assets/gone.png".into()
            }
        );
        assert_eq!(resolver.resolve("   "), ResolvedImage::Empty);
        assert_eq!(resolver.resolve("").src(), None);
    }

    #[test]
    fn hash_file_changes_with_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.txt");
        fs::write(&path, "one").unwrap();
        let first = hash_file(&path).unwrap();
        fs::write(&path, "two").unwrap();
        assert_ne!(first, hash_file(&path).unwrap());
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn copy_assets_copies_then_skips_unchanged() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("assets/nested")).unwrap();
        fs::write(src.path().join("assets/cv.pdf"), "cv").unwrap();
        fs::write(src.path().join("assets/nested/a.txt"), "a").unwrap();

        let first = copy_assets(src.path(), out.path()).unwrap();
        assert_eq!(first, CopyStats { copied: 2, unchanged: 0 });
        assert!(out.path().join("assets/nested/a.txt").is_file());

        fs::write(src.path().join("assets/cv.pdf"), "cv v2").unwrap();
        let second = copy_assets(src.path(), out.path()).unwrap();
        assert_eq!(second, CopyStats { copied: 1, unchanged: 1 });
        assert_eq!(
            fs::read_to_string(out.path().join("assets/cv.pdf")).unwrap(),
            "cv v2"
        );
    }

    #[test]
    fn copy_assets_skips_dotfiles() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("assets")).unwrap();
        fs::write(src.path().join("assets/.DS_Store"), "x").unwrap();
        let stats = copy_assets(src.path(), out.path()).unwrap();
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn copy_assets_without_source_dir() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        assert_eq!(copy_assets(src.path(), out.path()).unwrap().total(), 0);
    }
}
