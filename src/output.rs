//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (card, skill, position, project) is its semantic
//! identity, positional index and title, with file references shown as
//! secondary context via indented lines. The output reads as a content
//! inventory while still letting users trace data back to specific files.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! About
//! 001 Frontend Developer
//!     Image: about/cursor-icon.png
//!
//! History
//! 001 Senior Developer, Acme (Jan 2020 - Present)
//!     Image: history/acme.png
//!     2 experiences
//!
//! Projects
//! 001 Weather App
//!     Image: projects/weather.png
//!     Tags: React, API
//!
//! Config
//!     config.toml
//!     assets/
//!
//! Warnings
//!     skills.json: image not found: assets/skills/go.png
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html → dist/index.html (48.2 KB)
//!
//! Sections
//! 001 nav (3 links)
//! 002 hero (3 chips)
//! ...
//!
//! Assets: 14 copied, 0 unchanged
//! ```
//!
//! ## Timeline
//!
//! ```text
//! about (viewport, threshold 0.2)
//!        0ms  content   600ms ease-out
//!        0ms      title   800ms ease-out
//!      150ms      card-1   600ms ease-out
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects. Filesystem facts they
//! report, such as [`SourceLayout`], are gathered by the `print_*` side.

use crate::content::Portfolio;
use crate::generate::GenerateReport;
use crate::motion::{RevealTrigger, Timeline};
use crate::sections::SectionKind;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Weather App
/// 001 Senior Developer, Acme (Jan 2020 - Present)
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    let title = if title.trim().is_empty() { "(untitled)" } else { title };
    match detail {
        Some(d) if !d.is_empty() => format!("{} {} ({})", format_index(index), title, d),
        _ => format!("{} {}", format_index(index), title),
    }
}

/// Indented `Image:` context line; an empty reference says so.
fn image_line(reference: &str) -> String {
    if reference.trim().is_empty() {
        format!("{}Image: (none)", indent(1))
    } else {
        format!("{}Image: {}", indent(1), reference)
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

// ============================================================================
// Check
// ============================================================================

/// Which optional entries the content directory has, read once before
/// formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceLayout {
    pub config_file: bool,
    pub assets_dir: bool,
}

impl SourceLayout {
    pub fn probe(source_root: &Path) -> Self {
        Self {
            config_file: source_root.join("config.toml").is_file(),
            assets_dir: source_root.join(crate::content::ASSETS_DIR).is_dir(),
        }
    }
}

pub fn format_load_output(portfolio: &Portfolio, layout: SourceLayout) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Hero".to_string());
    let profile = &portfolio.config.profile;
    lines.push(format!("{}{}, {}", indent(1), profile.name, profile.tagline));
    lines.push(image_line(&profile.hero_image));
    if portfolio.hero_bio.trim().is_empty() {
        lines.push(format!("{}Bio: (none)", indent(1)));
    } else {
        let first = portfolio.hero_bio.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
        lines.push(format!("{}Bio: {}", indent(1), truncate_desc(first.trim(), 60)));
    }

    lines.push(String::new());
    lines.push("About".to_string());
    for (i, entry) in portfolio.about.iter().enumerate() {
        lines.push(entity_header(i + 1, &entry.title, None));
        lines.push(image_line(&entry.image_src));
        if !entry.description.trim().is_empty() {
            lines.push(format!("{}{}", indent(1), truncate_desc(entry.description.trim(), 60)));
        }
    }

    lines.push(String::new());
    lines.push("Skills".to_string());
    for (i, skill) in portfolio.skills.iter().enumerate() {
        lines.push(entity_header(i + 1, &skill.title, None));
        lines.push(image_line(&skill.image_src));
    }

    lines.push(String::new());
    lines.push("History".to_string());
    for (i, entry) in portfolio.history.iter().enumerate() {
        let title = if entry.organisation.is_empty() {
            entry.role.clone()
        } else {
            format!("{}, {}", entry.role, entry.organisation)
        };
        lines.push(entity_header(i + 1, &title, Some(&entry.date_range())));
        lines.push(image_line(&entry.image_src));
        lines.push(format!(
            "{}{}",
            indent(1),
            plural(entry.experiences.len(), "experience", "experiences")
        ));
    }

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in portfolio.projects.iter().enumerate() {
        lines.push(entity_header(i + 1, &project.title, None));
        lines.push(image_line(&project.image_src));
        let tags = project.skill_tags();
        if !tags.is_empty() {
            lines.push(format!("{}Tags: {}", indent(1), tags.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if layout.config_file {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    if layout.assets_dir {
        lines.push(format!("{}{}/", indent(1), crate::content::ASSETS_DIR));
    }

    if !portfolio.diagnostics.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for diagnostic in &portfolio.diagnostics {
            lines.push(format!("{}{}: {}", indent(1), diagnostic.file, diagnostic.message));
        }
    }

    lines
}

pub fn print_load_output(portfolio: &Portfolio, source_root: &Path) {
    for line in format_load_output(portfolio, SourceLayout::probe(source_root)) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

fn item_noun(id: &str) -> (&'static str, &'static str) {
    match id {
        "nav" => ("link", "links"),
        "hero" => ("chip", "chips"),
        "about" | "projects" => ("card", "cards"),
        "experience" => ("entry", "entries"),
        "contact" => ("row", "rows"),
        _ => ("item", "items"),
    }
}

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "index.html → {} ({})",
        report.index_path.display(),
        format_size(report.page_bytes)
    ));

    lines.push(String::new());
    lines.push("Sections".to_string());
    for (i, (id, count)) in report.sections.iter().enumerate() {
        let (one, many) = item_noun(id);
        lines.push(entity_header(i + 1, id, Some(&plural(*count, one, many))));
    }

    lines.push(String::new());
    lines.push(format!(
        "Assets: {} copied, {} unchanged",
        report.assets.copied, report.assets.unchanged
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Timeline
// ============================================================================

fn trigger_label(trigger: RevealTrigger) -> String {
    match trigger {
        RevealTrigger::Mount => "mount".to_string(),
        RevealTrigger::Viewport(config) => format!("viewport, threshold {}", config.threshold),
    }
}

/// Every section's entrance schedule, elements in start order and
/// indented by nesting depth.
pub fn format_timeline_output(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, kind) in SectionKind::ALL.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", kind.id(), trigger_label(kind.trigger())));
        let timeline = Timeline::visible(&kind.choreography(portfolio));
        for target in timeline.by_start() {
            lines.push(format!(
                "{:>8}ms  {}{}  {}ms {}",
                target.delay_ms,
                indent(target.depth),
                target.key,
                target.duration_ms,
                target.easing.label()
            ));
        }
        lines.push(format!("{}done at {}ms", indent(1), timeline.total_ms()));
    }
    lines
}

pub fn print_timeline_output(portfolio: &Portfolio) {
    for line in format_timeline_output(portfolio) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::CopyStats;
    use crate::content::Diagnostic;
    use crate::test_helpers::*;
    use crate::types::{HistoryEntry, ProjectEntry};
    use std::path::PathBuf;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        let expected = format!("{}...", "a".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
    }

    #[test]
    fn truncate_desc_respects_char_boundaries() {
        assert_eq!(truncate_desc("héllo wörld", 4), "héll...");
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn entity_header_with_detail() {
        assert_eq!(entity_header(2, "Weather App", None), "002 Weather App");
        assert_eq!(entity_header(1, "Dev", Some("2020 - 2022")), "001 Dev (2020 - 2022)");
        assert_eq!(entity_header(1, "", Some("")), "001 (untitled)");
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }

    // =========================================================================
    // Check output
    // =========================================================================

    #[test]
    fn load_output_lists_entities_with_context() {
        let portfolio = Portfolio {
            history: vec![HistoryEntry {
                role: "Senior Developer".into(),
                organisation: "Acme".into(),
                start_date: "2020".into(),
                end_date: "Present".into(),
                image_src: "history/acme.png".into(),
                experiences: vec!["a".into(), "b".into()],
            }],
            projects: vec![ProjectEntry {
                title: "Weather App".into(),
                skills: vec!["React".into(), "API".into()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let lines = format_load_output(&portfolio, SourceLayout::default());
        assert!(lines.contains(&"001 Senior Developer, Acme (2020 - Present)".to_string()));
        assert!(lines.contains(&"    Image: history/acme.png".to_string()));
        assert!(lines.contains(&"    2 experiences".to_string()));
        assert!(lines.contains(&"001 Weather App".to_string()));
        assert!(lines.contains(&"    Image: (none)".to_string()));
        assert!(lines.contains(&"    Tags: React, API".to_string()));
        assert!(lines.contains(&"    (stock defaults)".to_string()));
        assert!(!lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn load_output_warnings_section_only_with_diagnostics() {
        let mut portfolio = Portfolio::default();
        let lines = format_load_output(&portfolio, SourceLayout::default());
        assert!(!lines.contains(&"Warnings".to_string()));

        portfolio
            .diagnostics
            .push(Diagnostic::new("skills.json", "image not found: assets/x.png"));
        let lines = format_load_output(&portfolio, SourceLayout::default());
        assert!(lines.contains(&"Warnings".to_string()));
        assert!(lines.contains(&"    skills.json: image not found: assets/x.png".to_string()));
    }

    #[test]
    fn load_output_for_fixtures() {
        let tmp = setup_fixtures();
        let portfolio = crate::content::load(tmp.path()).unwrap();
        let layout = SourceLayout::probe(tmp.path());
        assert_eq!(layout, SourceLayout { config_file: true, assets_dir: true });
        let lines = format_load_output(&portfolio, layout);
        assert!(lines.contains(&"001 Frontend Developer".to_string()));
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("    Ada Example")));
    }

    // =========================================================================
    // Build output
    // =========================================================================

    #[test]
    fn generate_output_summarizes_sections_and_assets() {
        let report = GenerateReport {
            index_path: PathBuf::from("dist/index.html"),
            sections: vec![("nav", 3), ("about", 1), ("experience", 8)],
            assets: CopyStats {
                copied: 4,
                unchanged: 2,
            },
            page_bytes: 2048,
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[0], "index.html → dist/index.html (2.0 KB)");
        assert!(lines.contains(&"001 nav (3 links)".to_string()));
        assert!(lines.contains(&"002 about (1 card)".to_string()));
        assert!(lines.contains(&"003 experience (8 entries)".to_string()));
        assert_eq!(lines.last().unwrap(), "Assets: 4 copied, 2 unchanged");
    }

    // =========================================================================
    // Timeline output
    // =========================================================================

    #[test]
    fn timeline_output_shows_triggers_and_offsets() {
        let lines = format_timeline_output(&Portfolio::default());
        assert_eq!(lines[0], "nav (mount)");
        assert!(lines.contains(&"about (viewport, threshold 0.2)".to_string()));
        assert!(lines.contains(&"experience (viewport, threshold 0.1)".to_string()));
        assert!(lines.iter().any(|l| l.contains("300ms      link-about  300ms ease-out")));
    }

    #[test]
    fn timeline_output_is_in_start_order() {
        let lines = format_timeline_output(&Portfolio::default());
        let hero_start = lines.iter().position(|l| l == "hero (mount)").unwrap();
        let offsets: Vec<u32> = lines[hero_start + 1..]
            .iter()
            .take_while(|l| l.contains("ms  "))
            .map(|l| l.trim().split("ms").next().unwrap().parse().unwrap())
            .collect();
        assert!(!offsets.is_empty());
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    }
}
