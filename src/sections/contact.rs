//! Contact: email, LinkedIn and GitHub rows, the availability note and
//! the page footer.

use crate::config::ProfileConfig;
use crate::content::Portfolio;
use crate::motion::{Adjustment, Ambient, Easing, Frame, Group, Interaction, Stagger, Variant, VisualState};
use crate::naming::item_key;
use crate::sections::{
    BACKDROP, EXTERNAL_REL, HEADING, HEADING_SHIMMER, RenderContext, SectionKind, ambient_span,
    heading, hover_class, image, opens_new_tab,
};
use maud::{Markup, html};

/// One way to get in touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub href: String,
    /// Address as displayed (`linkedin.com/myname`).
    pub label: String,
    pub caption: &'static str,
    /// Icon, relative to `assets/`.
    pub icon: &'static str,
    pub icon_alt: &'static str,
    pub tone: &'static str,
}

/// Rows for every non-empty profile channel, in display order.
pub fn rows(profile: &ProfileConfig) -> Vec<ContactRow> {
    let mut rows = Vec::new();
    let email = profile.email.trim();
    if !email.is_empty() {
        rows.push(ContactRow {
            href: format!("mailto:{email}"),
            label: email.to_string(),
            caption: "Send me an email",
            icon: "contact/emailIcon.png",
            icon_alt: "Email icon",
            tone: "tone-red",
        });
    }
    let linkedin = profile.linkedin.trim();
    if !linkedin.is_empty() {
        rows.push(ContactRow {
            href: linkedin.to_string(),
            label: display_url(linkedin),
            caption: "Let's connect professionally",
            icon: "contact/linkedinIcon.png",
            icon_alt: "LinkedIn icon",
            tone: "tone-blue",
        });
    }
    let github = profile.github.trim();
    if !github.is_empty() {
        rows.push(ContactRow {
            href: github.to_string(),
            label: display_url(github),
            caption: "Check out my repositories",
            icon: "contact/githubIcon.png",
            icon_alt: "GitHub icon",
            tone: "tone-gray",
        });
    }
    rows
}

/// URL without scheme, `www.` or trailing slash.
fn display_url(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.trim_end_matches('/').to_string()
}

// ============================================================================
// Motion
// ============================================================================

const CONTENT: Variant = Variant::new("contact-content", VisualState::TRANSPARENT, 600);
const ITEM: Variant = Variant::new("contact-item", VisualState::TRANSPARENT.offset(0.0, 20.0), 600);
const ROW: Variant = Variant::new("contact-row", VisualState::TRANSPARENT.offset(50.0, 0.0), 600);
const FOOTER: Variant = Variant::new("contact-footer", VisualState::TRANSPARENT, 600);

const ROW_HOVER: Interaction = Interaction::new("contact-row")
    .on_hover(
        Adjustment::transform(VisualState::REST.offset(0.0, -2.0).scaled(1.05))
            .background("rgba(255, 255, 255, 0.1)"),
    )
    .timed(300, Easing::EaseOut);
const ICON_HOVER: Interaction = Interaction::new("contact-icon")
    .on_hover(Adjustment::transform(VisualState::REST.rotated(5.0).scaled(1.1)))
    .timed(300, Easing::Spring { stiffness: 300 });

pub const INTERACTIONS: &[Interaction] = &[ROW_HOVER, ICON_HOVER];

const DOT_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST).opacity(1.0),
    Frame::at(50).transform(VisualState::REST.scaled(1.5)).opacity(0.5),
    Frame::at(100).transform(VisualState::REST).opacity(1.0),
];
const AVAILABLE_DOT: Ambient = Ambient::new("available-dot", DOT_FRAMES, 2000);

const FOOTER_FRAMES: &[Frame] = &[
    Frame::at(0).opacity(0.6),
    Frame::at(50).opacity(1.0),
    Frame::at(100).opacity(0.6),
];
const FOOTER_PULSE: Ambient = Ambient::new("footer-pulse", FOOTER_FRAMES, 3000);

const GLOW_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST).opacity(0.3),
    Frame::at(50).transform(VisualState::REST.scaled(1.2)).opacity(0.6),
    Frame::at(100).transform(VisualState::REST).opacity(0.3),
];
const GLOW: Ambient = Ambient::new("contact-glow", GLOW_FRAMES, 6000).eased(Easing::EaseInOut);
const GLOW_ALT: Ambient =
    Ambient::new("contact-glow-alt", GLOW_FRAMES, 8000).eased(Easing::EaseInOut);

pub const AMBIENTS: &[Ambient] = &[
    HEADING_SHIMMER,
    BACKDROP,
    AVAILABLE_DOT,
    FOOTER_PULSE,
    GLOW,
    GLOW_ALT,
];

/// Intro copy 200 ms apart, then the rows as their own cascade, then the
/// footer.
pub fn choreography(portfolio: &Portfolio) -> Group {
    let profile = &portfolio.config.profile;
    let mut row_group = Group::new("rows", Stagger::every(200));
    for i in 0..rows(profile).len() {
        row_group = row_group.leaf(item_key("row", i), ROW);
    }

    let mut group = Group::new("content", Stagger::every(200))
        .with_variant(CONTENT)
        .leaf("title", HEADING)
        .leaf("lead", ITEM);
    if !profile.availability.trim().is_empty() {
        group = group.leaf("availability", ITEM);
    }
    group.group(row_group).leaf("footer", FOOTER)
}

// ============================================================================
// Markup
// ============================================================================

pub fn render(ctx: &RenderContext) -> Markup {
    let stage = ctx.stage(SectionKind::Contact);
    let portfolio = ctx.portfolio;
    let profile = &portfolio.config.profile;
    let availability = profile.availability.trim();

    html! {
        section id=(SectionKind::Contact.id()) class="contact" data-reveal=(SectionKind::Contact.reveal_attr()) {
            div.section-backdrop aria-hidden="true" {
                (ambient_span(&BACKDROP, "backdrop-glow", 0))
                (ambient_span(&GLOW, "contact-glow contact-glow-top", 0))
                (ambient_span(&GLOW_ALT, "contact-glow contact-glow-bottom", 0))
            }
            div class=(stage.class("content", &["section-inner"])) style=[stage.style("content")] {
                div.contact-columns {
                    div.contact-intro {
                        (heading(&stage, "Contact"))
                        p class=(stage.class("lead", &["contact-lead"])) style=[stage.style("lead")] {
                            "Feel free to reach out! Let's create something amazing together."
                        }
                        @if !availability.is_empty() {
                            p class=(stage.class("availability", &["availability"])) style=[stage.style("availability")] {
                                (ambient_span(&AVAILABLE_DOT, "status-dot", 0))
                                span { (availability) }
                            }
                        }
                    }
                    ul.contact-rows {
                        @for (i, row) in rows(profile).iter().enumerate() {
                            @let key = item_key("row", i);
                            @let new_tab = opens_new_tab(&row.href);
                            li class=(stage.class(&key, &[])) style=[stage.style(&key)] {
                                a class=(hover_class(&ROW_HOVER, &["contact-row", row.tone]))
                                    href=(row.href)
                                    target=[new_tab.then_some("_blank")]
                                    rel=[new_tab.then_some(EXTERNAL_REL)] {
                                    div class=(hover_class(&ICON_HOVER, &["contact-icon"])) {
                                        (image(&ctx.images.resolve(row.icon), row.icon_alt, "icon"))
                                    }
                                    div.contact-text {
                                        div.contact-label { (row.label) }
                                        div.contact-caption { (row.caption) }
                                    }
                                }
                            }
                        }
                    }
                }
                footer class=(stage.class("footer", &["site-footer"])) style=[stage.style("footer")] {
                    p class=(FOOTER_PULSE.class()) data-ambient {
                        "© " (portfolio.config.site.title) ". Created by " (profile.name) "."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageResolver;
    use crate::motion::Timeline;
    use crate::test_helpers::*;
    use std::path::Path;

    fn render_html(portfolio: &Portfolio) -> String {
        let images = ImageResolver::new(Path::new("/nonexistent"), "");
        render(&RenderContext::new(portfolio, &images)).into_string()
    }

    #[test]
    fn default_profile_has_three_rows() {
        let rows = rows(&ProfileConfig::default());
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["myemail@email.com", "linkedin.com/myname", "github.com/myname"]
        );
        assert_eq!(rows[0].href, "mailto:myemail@email.com");
        assert_eq!(rows[1].caption, "Let's connect professionally");
    }

    #[test]
    fn empty_channels_are_skipped() {
        let profile = ProfileConfig {
            linkedin: String::new(),
            ..Default::default()
        };
        let hrefs: Vec<String> = rows(&profile).into_iter().map(|r| r.href).collect();
        assert_eq!(
            hrefs,
            vec!["mailto:myemail@email.com", "https://www.github.com/myname"]
        );
    }

    #[test]
    fn display_url_strips_scheme_and_www() {
        assert_eq!(display_url("https://www.github.com/ada/"), "github.com/ada");
        assert_eq!(display_url("http://example.com"), "example.com");
        assert_eq!(display_url("example.com/x"), "example.com/x");
    }

    #[test]
    fn mailto_row_stays_in_tab() {
        let html = render_html(&Portfolio::default());
        assert!(html.contains("href=\"mailto:myemail@email.com\">"));
        assert_eq!(count(&html, "target=\"_blank\""), 2);
        assert_eq!(count(&html, "rel=\"noopener noreferrer\""), 2);
    }

    #[test]
    fn availability_note_optional() {
        let html = render_html(&Portfolio::default());
        assert!(html.contains("Available for new opportunities"));

        let mut portfolio = Portfolio::default();
        portfolio.config.profile.availability = String::new();
        let html = render_html(&portfolio);
        assert!(!html.contains("availability"));
        let timeline = Timeline::visible(&choreography(&portfolio));
        assert!(timeline.get("availability").is_none());
    }

    #[test]
    fn rows_cascade_after_intro() {
        let timeline = Timeline::visible(&choreography(&Portfolio::default()));
        assert_eq!(timeline.get("lead").unwrap().delay_ms, 200);
        assert_eq!(timeline.get("availability").unwrap().delay_ms, 400);
        assert_eq!(timeline.get("row-1").unwrap().delay_ms, 600);
        assert_eq!(timeline.get("row-3").unwrap().delay_ms, 1000);
        assert_eq!(timeline.get("footer").unwrap().delay_ms, 800);
    }

    #[test]
    fn rows_carry_the_shared_transition() {
        let html = render_html(&Portfolio::default());
        let contact = section_html(&html, "contact");
        assert_eq!(count(contact, "class=\"fx hx-contact-row contact-row tone-"), 3);
        assert!(contact.contains("contact-row tone-red"));
    }

    #[test]
    fn footer_credits_profile() {
        let html = render_html(&Portfolio::default());
        assert!(html.contains("© Portfolio. Created by Fouleni Flen."));
    }
}
