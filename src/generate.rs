//! HTML page generation.
//!
//! Renders the loaded [`Portfolio`] into a single `index.html` and mirrors
//! `content/assets/` next to it.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # The whole page, CSS and JS inlined
//! └── assets/           # Copied from content/assets/
//!     ├── hero/user-image.jpg
//!     ├── cv.pdf
//!     └── ...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: layout and component styles (colors injected from config)
//! - `static/motion.js`: reveal latch, viewport observer, menu and scroll flag
//!
//! The motion stylesheet is compiled from the section definitions on every
//! build (see [`crate::motion::MotionSheet`]).
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::assets::{self, AssetError, CopyStats, ImageResolver};
use crate::config::{self, SiteConfig};
use crate::content::Portfolio;
use crate::motion::MotionSheet;
use crate::sections::{RenderContext, SectionKind};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/motion.js");

pub const INDEX_FILE: &str = "index.html";

/// What a build produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub index_path: PathBuf,
    /// Section id and number of content items it rendered, in page order.
    pub sections: Vec<(&'static str, usize)>,
    pub assets: CopyStats,
    pub page_bytes: usize,
}

/// Build the site into `output_dir`.
pub fn generate(
    portfolio: &Portfolio,
    content_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let images = ImageResolver::new(content_root, &portfolio.config.site.base_path);
    let page = render_page(portfolio, &images).into_string();

    fs::create_dir_all(output_dir)?;
    let index_path = output_dir.join(INDEX_FILE);
    fs::write(&index_path, &page)?;

    let assets = assets::copy_assets(content_root, output_dir)?;

    let sections = SectionKind::ALL
        .iter()
        .map(|kind| (kind.id(), kind.item_count(portfolio)))
        .collect();

    Ok(GenerateReport {
        index_path,
        sections,
        assets,
        page_bytes: page.len(),
    })
}

/// Motion stylesheet for every section of the page.
pub fn motion_css(portfolio: &Portfolio) -> String {
    let mut sheet = MotionSheet::new();
    for kind in SectionKind::ALL {
        sheet.add_choreography(&kind.choreography(portfolio));
        sheet.add_interactions(kind.interactions().iter().copied());
        sheet.add_ambients(kind.ambients().iter().copied());
    }
    let motion = &portfolio.config.motion;
    sheet.to_css(motion.enabled, motion.respect_reduced_motion)
}

/// Full stylesheet: palette, static styles, then motion rules.
pub fn page_css(portfolio: &Portfolio) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&portfolio.config.colors),
        CSS_STATIC,
        motion_css(portfolio)
    )
}

/// The single page.
pub fn render_page(portfolio: &Portfolio, images: &ImageResolver) -> Markup {
    let ctx = RenderContext::new(portfolio, images);
    let content = html! {
        @for kind in SectionKind::ALL {
            (kind.render(&ctx))
        }
    };
    base_document(&portfolio.config, &page_css(portfolio), content)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
///
/// The root starts as `no-js`; the runtime swaps it for `js`, which is
/// what arms the pre-entrance styles.
fn base_document(config: &SiteConfig, css: &str, content: Markup) -> Markup {
    let site = &config.site;
    let motion = &config.motion;
    let description = (!site.description.is_empty()).then_some(site.description.as_str());
    let motion_attr = if motion.enabled { "on" } else { "off" };
    let reduced_attr = if motion.respect_reduced_motion { "respect" } else { "ignore" };

    html! {
        (DOCTYPE)
        html lang=(site.lang) class="no-js" data-motion=(motion_attr) data-reduced-motion=(reduced_attr) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                title { (site.title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}
