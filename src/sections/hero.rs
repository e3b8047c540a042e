//! Hero: greeting with the typed name, markdown bio, calls to action,
//! tech chips and the framed portrait.
//!
//! Entrance runs on mount. The title line cascades greeting then name;
//! the chips are a nested group so they start only after the buttons.

use crate::content::Portfolio;
use crate::motion::{
    Adjustment, Ambient, Easing, Frame, Group, Interaction, Stagger, Variant, VisualState,
};
use crate::naming::{anchor_href, item_key};
use crate::sections::{RenderContext, SectionKind, ambient_span, hover_class, image};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

// ============================================================================
// Motion
// ============================================================================

const TITLE: Variant = Variant::new("hero-title", VisualState::TRANSPARENT.offset(0.0, 30.0), 800);
const GREETING: Variant =
    Variant::new("hero-greeting", VisualState::TRANSPARENT.offset(-20.0, 0.0), 600);
const NAME: Variant = Variant::new("hero-name", VisualState::TRANSPARENT.offset(20.0, 0.0), 600);
const BIO: Variant = TITLE.renamed("hero-bio").delayed(300);
const ACTIONS: Variant =
    Variant::new("hero-actions", VisualState::TRANSPARENT.offset(0.0, 20.0), 600).delayed(500);
const CHIPS: Variant = Variant::new("hero-chips", VisualState::TRANSPARENT.offset(0.0, 20.0), 600);
const CHIP: Variant = Variant::new("hero-chip", VisualState::TRANSPARENT.scaled(0.8), 400);
const PORTRAIT: Variant = Variant::new(
    "hero-portrait",
    VisualState::TRANSPARENT.scaled(0.8).rotated(-10.0),
    1000,
);
const SCROLL_CUE: Variant = Variant::new("scroll-cue", VisualState::TRANSPARENT, 600).delayed(1000);

const CTA: Interaction = Interaction::new("hero-cta")
    .on_hover(Adjustment::scale(1.05).shadow("0 10px 30px rgba(59, 130, 246, 0.3)"))
    .on_press(Adjustment::scale(0.95));
const CV: Interaction = Interaction::new("hero-cv")
    .on_hover(Adjustment::scale(1.05).shadow("0 10px 30px rgba(168, 85, 247, 0.3)"))
    .on_press(Adjustment::scale(0.95));
const CHIP_HOVER: Interaction = Interaction::new("hero-chip")
    .on_hover(
        Adjustment::transform(VisualState::REST.offset(0.0, -2.0).scaled(1.05))
            .background("rgba(255, 255, 255, 0.2)"),
    )
    .on_press(Adjustment::scale(0.95));
const PORTRAIT_HOVER: Interaction = Interaction::new("hero-portrait")
    .on_hover(Adjustment::scale(1.05))
    .timed(300, Easing::EaseOut);

pub const INTERACTIONS: &[Interaction] = &[CTA, CV, CHIP_HOVER, PORTRAIT_HOVER];

const BLOB_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST).opacity(0.3),
    Frame::at(50)
        .transform(VisualState::REST.scaled(1.1).rotated(180.0))
        .opacity(0.5),
    Frame::at(100)
        .transform(VisualState::REST.rotated(360.0))
        .opacity(0.3),
];
const BLOB: Ambient = Ambient::new("hero-blob", BLOB_FRAMES, 8000).eased(Easing::EaseInOut);
const BLOB_ALT: Ambient = Ambient::new("hero-blob-alt", BLOB_FRAMES, 6000)
    .delayed(1000)
    .eased(Easing::EaseInOut);

const PARTICLE_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST).opacity(0.2),
    Frame::at(50).transform(VisualState::REST.offset(0.0, -20.0)).opacity(0.8),
    Frame::at(100).transform(VisualState::REST).opacity(0.2),
];
const PARTICLES: [Ambient; 4] = [
    Ambient::new("hero-particle-1", PARTICLE_FRAMES, 3000).eased(Easing::EaseInOut),
    Ambient::new("hero-particle-2", PARTICLE_FRAMES, 4000)
        .delayed(500)
        .eased(Easing::EaseInOut),
    Ambient::new("hero-particle-3", PARTICLE_FRAMES, 2500)
        .delayed(1000)
        .eased(Easing::EaseInOut),
    Ambient::new("hero-particle-4", PARTICLE_FRAMES, 3500)
        .delayed(1500)
        .eased(Easing::EaseInOut),
];

const SPIN_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST),
    Frame::at(100).transform(VisualState::REST.rotated(360.0)),
];
const SPIN_BACK_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST.rotated(360.0)),
    Frame::at(100).transform(VisualState::REST),
];
const GLOW: Ambient = Ambient::new("portrait-glow", SPIN_FRAMES, 10000).eased(Easing::Linear);
const RING: Ambient = Ambient::new("portrait-ring", SPIN_FRAMES, 20000).eased(Easing::Linear);
const RING_REVERSE: Ambient =
    Ambient::new("portrait-ring-reverse", SPIN_BACK_FRAMES, 15000).eased(Easing::Linear);

const TYPED_FRAMES: &[Frame] = &[
    Frame::at(0).props(&[("max-width", "0ch")]),
    Frame::at(40).props(&[("max-width", "var(--typed-width)")]),
    Frame::at(80).props(&[("max-width", "var(--typed-width)")]),
    Frame::at(100).props(&[("max-width", "0ch")]),
];
/// Type-then-erase loop over the name. The step count is overridden per
/// render to match the name's length.
const TYPED: Ambient = Ambient::new("typed-name", TYPED_FRAMES, 6000)
    .delayed(800)
    .eased(Easing::Steps(12));

const CARET_FRAMES: &[Frame] = &[
    Frame::at(0).opacity(1.0),
    Frame::at(50).opacity(0.0),
    Frame::at(100).opacity(1.0),
];
const CARET: Ambient = Ambient::new("caret", CARET_FRAMES, 1000).eased(Easing::Steps(1));

const BOB_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST),
    Frame::at(50).transform(VisualState::REST.offset(0.0, 10.0)),
    Frame::at(100).transform(VisualState::REST),
];
const SCROLL_BOB: Ambient = Ambient::new("scroll-bob", BOB_FRAMES, 2000).eased(Easing::EaseInOut);

pub const AMBIENTS: &[Ambient] = &[
    BLOB,
    BLOB_ALT,
    PARTICLES[0],
    PARTICLES[1],
    PARTICLES[2],
    PARTICLES[3],
    GLOW,
    RING,
    RING_REVERSE,
    TYPED,
    CARET,
    SCROLL_BOB,
];

/// Copy cascades 200 ms apart; chips follow the buttons 100 ms apart.
pub fn choreography(portfolio: &Portfolio) -> Group {
    let title = Group::new("title", Stagger::every(200).after(200))
        .with_variant(TITLE)
        .leaf("greeting", GREETING)
        .leaf("name", NAME);

    let mut chips = Group::new("chips", Stagger::every(100).after(300)).with_variant(CHIPS);
    for i in 0..portfolio.config.profile.tech_stack.len() {
        chips = chips.leaf(item_key("chip", i), CHIP);
    }

    Group::new("hero", Stagger::every(200))
        .group(title)
        .leaf("bio", BIO)
        .leaf("actions", ACTIONS)
        .group(chips)
        .leaf("portrait", PORTRAIT)
        .leaf("scroll-cue", SCROLL_CUE)
}

// ============================================================================
// Markup
// ============================================================================

/// Bio markdown as HTML. Falls back to a line built from the tagline.
fn bio_html(markdown: &str, tagline: &str) -> String {
    if markdown.trim().is_empty() {
        return format!("<p>I'm a {}.</p>", html! { (tagline) }.into_string());
    }
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(markdown));
    out
}

/// Inline style sizing the typed-name loop to the name.
fn typed_style(name: &str) -> String {
    let chars = name.chars().count().max(1);
    format!("--typed-width: {chars}ch; animation-timing-function: steps({chars}, end);")
}

pub fn render(ctx: &RenderContext) -> Markup {
    let stage = ctx.stage(SectionKind::Hero);
    let profile = &ctx.portfolio.config.profile;
    let portrait = ctx.images.resolve(&profile.hero_image);
    let chip_class = CHIP_HOVER.class();

    html! {
        section id=(SectionKind::Hero.id()) class="hero" data-reveal=(SectionKind::Hero.reveal_attr()) {
            div.hero-backdrop aria-hidden="true" {
                (ambient_span(&BLOB, "hero-blob hero-blob-top", 0))
                (ambient_span(&BLOB_ALT, "hero-blob hero-blob-bottom", 0))
                @for particle in &PARTICLES {
                    (ambient_span(particle, "hero-particle", 0))
                }
            }
            div.hero-inner {
                div.hero-copy {
                    h1 class=(stage.class("title", &["hero-title"])) style=[stage.style("title")] {
                        span class=(stage.class("greeting", &["hero-greeting"])) style=[stage.style("greeting")] {
                            "Hi, I'm"
                        }
                        " "
                        span class=(stage.class("name", &["hero-name", "gradient-text"])) style=[stage.style("name")] {
                            span class={ "typed " (TYPED.class()) } data-ambient style=(typed_style(&profile.name)) {
                                (profile.name)
                            }
                            span class={ "caret " (CARET.class()) } data-ambient aria-hidden="true" { "|" }
                        }
                    }
                    div class=(stage.class("bio", &["hero-bio"])) style=[stage.style("bio")] {
                        (PreEscaped(bio_html(&ctx.portfolio.hero_bio, &profile.tagline)))
                    }
                    div class=(stage.class("actions", &["hero-actions"])) style=[stage.style("actions")] {
                        a class=(hover_class(&CTA, &["btn", "btn-primary"])) href=(anchor_href(SectionKind::Contact.id())) {
                            "Contact Me"
                        }
                        @if !profile.cv_path.trim().is_empty() {
                            a class=(hover_class(&CV, &["btn", "btn-secondary"]))
                                href=(ctx.images.url(&profile.cv_path))
                                download=(profile.cv_download_name) {
                                "Download CV"
                            }
                        }
                    }
                    @if !profile.tech_stack.is_empty() {
                        ul class=(stage.class("chips", &["tech-chips"])) style=[stage.style("chips")] {
                            @for (i, tech) in profile.tech_stack.iter().enumerate() {
                                @let key = item_key("chip", i);
                                li class=(stage.class(&key, &[chip_class.as_str(), "tech-chip"])) style=[stage.style(&key)] {
                                    (tech)
                                }
                            }
                        }
                    }
                }
                div class=(stage.class("portrait", &["hero-portrait"])) style=[stage.style("portrait")] {
                    (ambient_span(&GLOW, "portrait-glow", 0))
                    (ambient_span(&RING, "portrait-ring", 0))
                    (ambient_span(&RING_REVERSE, "portrait-ring portrait-ring-inner", 0))
                    div class=(hover_class(&PORTRAIT_HOVER, &["portrait-frame"])) {
                        (image(&portrait, &profile.name, "portrait-img"))
                    }
                }
            }
            a class=(stage.class("scroll-cue", &["scroll-cue"]))
                style=[stage.style("scroll-cue")]
                href=(anchor_href(SectionKind::About.id()))
                aria-label="Scroll to about" {
                span class={ "scroll-mouse " (SCROLL_BOB.class()) } data-ambient {
                    span.scroll-wheel {}
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
    use crate::test_helpers::{assert_in_order, count};
    use std::path::Path;

    fn render_html(portfolio: &Portfolio) -> String {
        let images = ImageResolver::new(Path::new("/nonexistent"), "");
        render(&RenderContext::new(portfolio, &images)).into_string()
    }

    #[test]
    fn title_cascades_greeting_then_name() {
        let timeline = Timeline::visible(&choreography(&Portfolio::default()));
        assert_eq!(timeline.get("title").unwrap().delay_ms, 0);
        assert_eq!(timeline.get("greeting").unwrap().delay_ms, 200);
        assert_eq!(timeline.get("name").unwrap().delay_ms, 400);
    }

    #[test]
    fn own_delays_push_later_siblings() {
        let timeline = Timeline::visible(&choreography(&Portfolio::default()));
        assert_eq!(timeline.get("bio").unwrap().delay_ms, 500);
        assert_eq!(timeline.get("actions").unwrap().delay_ms, 900);
        assert_eq!(timeline.get("chips").unwrap().delay_ms, 1100);
        assert_eq!(timeline.get("portrait").unwrap().delay_ms, 1300);
        assert_eq!(timeline.get("scroll-cue").unwrap().delay_ms, 2000);
    }

    #[test]
    fn chips_stagger_inside_their_group() {
        let timeline = Timeline::visible(&choreography(&Portfolio::default()));
        let chips = timeline.get("chips").unwrap().delay_ms;
        for i in 0..3 {
            let chip = timeline.get(&item_key("chip", i)).unwrap();
            assert_eq!(chip.delay_ms, chips + 300 + i as u32 * 100);
            assert_eq!(chip.depth, 2);
        }
    }

    #[test]
    fn renders_name_chips_and_actions() {
        let html = render_html(&Portfolio::default());
        assert!(html.contains("Fouleni Flen"));
        assert_eq!(count(&html, "tech-chip\""), 3);
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("download=\"CV.pdf\""));
        assert!(html.contains("href=\"assets/cv.pdf\""));
        assert_in_order(&html, &["Hi, I'm", "Fouleni Flen", "React", "Node.js", "Full-Stack"]);
    }

    #[test]
    fn empty_cv_path_hides_download() {
        let mut portfolio = Portfolio::default();
        portfolio.config.profile.cv_path = String::new();
        assert!(!render_html(&portfolio).contains("download="));
    }

    #[test]
    fn empty_tech_stack_omits_chip_list() {
        let mut portfolio = Portfolio::default();
        portfolio.config.profile.tech_stack.clear();
        let html = render_html(&portfolio);
        assert!(!html.contains("tech-chips"));
    }

    #[test]
    fn bio_markdown_rendered() {
        let mut portfolio = Portfolio::default();
        portfolio.hero_bio = "I build **fast** things.".to_string();
        let html = render_html(&portfolio);
        assert!(html.contains("<strong>fast</strong>"));
    }

    #[test]
    fn bio_falls_back_to_tagline() {
        let html = render_html(&Portfolio::default());
        assert!(html.contains("<p>I'm a full-stack developer.</p>"));
    }

    #[test]
    fn fallback_bio_escapes_tagline() {
        assert_eq!(bio_html("", "<b>dev</b>"), "<p>I'm a &lt;b&gt;dev&lt;/b&gt;.</p>");
    }

    #[test]
    fn typed_loop_sized_to_name() {
        assert_eq!(
            typed_style("Ada"),
            "--typed-width: 3ch; animation-timing-function: steps(3, end);"
        );
    }

    #[test]
    fn missing_portrait_renders_placeholder() {
        let html = render_html(&Portfolio::default());
        assert!(html.contains("portrait-img img-missing"));
    }

    #[test]
    fn section_reveals_on_mount() {
        assert!(render_html(&Portfolio::default()).contains("data-reveal=\"mount\""));
    }
}
