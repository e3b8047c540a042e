//! The fixed section set of the page and the glue between the motion model
//! and the markup.
//!
//! Every section module exposes the same four things:
//!
//! - `choreography(&Portfolio) -> Group`: the entrance tree, keyed by
//!   element; item counts come from content, so the tree is built per
//!   render.
//! - `INTERACTIONS`: pointer responses its elements use.
//! - `AMBIENTS`: infinite loops its decorations run.
//! - `render(&RenderContext) -> Markup`.
//!
//! A [`Stage`] is the resolved schedule of one section: renderers ask it
//! for the classes and inline delay of each keyed element.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;

use crate::assets::{ImageResolver, ResolvedImage};
use crate::content::Portfolio;
use crate::motion::{
    Ambient, Easing, Frame, Group, Interaction, ObserverConfig, RevealTrigger, Timeline,
    Variant, VisualState, delay_style, variant_class,
};
use crate::nav;
use maud::{Markup, html};

/// Sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Nav,
    Hero,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Nav,
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Contact,
    ];

    /// Element id, also the anchor nav links target.
    pub fn id(&self) -> &'static str {
        match self {
            SectionKind::Nav => "nav",
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Contact => "contact",
        }
    }

    pub fn trigger(&self) -> RevealTrigger {
        match self {
            SectionKind::Nav | SectionKind::Hero => RevealTrigger::Mount,
            SectionKind::About | SectionKind::Contact => {
                RevealTrigger::Viewport(ObserverConfig::once(0.2))
            }
            SectionKind::Experience | SectionKind::Projects => {
                RevealTrigger::Viewport(ObserverConfig::once(0.1))
            }
        }
    }

    pub fn choreography(&self, portfolio: &Portfolio) -> Group {
        match self {
            SectionKind::Nav => nav::choreography(),
            SectionKind::Hero => hero::choreography(portfolio),
            SectionKind::About => about::choreography(portfolio),
            SectionKind::Experience => experience::choreography(portfolio),
            SectionKind::Projects => projects::choreography(portfolio),
            SectionKind::Contact => contact::choreography(portfolio),
        }
    }

    pub fn interactions(&self) -> &'static [Interaction] {
        match self {
            SectionKind::Nav => nav::INTERACTIONS,
            SectionKind::Hero => hero::INTERACTIONS,
            SectionKind::About => about::INTERACTIONS,
            SectionKind::Experience => experience::INTERACTIONS,
            SectionKind::Projects => projects::INTERACTIONS,
            SectionKind::Contact => contact::INTERACTIONS,
        }
    }

    pub fn ambients(&self) -> &'static [Ambient] {
        match self {
            SectionKind::Nav => nav::AMBIENTS,
            SectionKind::Hero => hero::AMBIENTS,
            SectionKind::About => about::AMBIENTS,
            SectionKind::Experience => experience::AMBIENTS,
            SectionKind::Projects => projects::AMBIENTS,
            SectionKind::Contact => contact::AMBIENTS,
        }
    }

    /// Number of content items the section renders (cards, entries, rows).
    pub fn item_count(&self, portfolio: &Portfolio) -> usize {
        match self {
            SectionKind::Nav => nav::LINKS.len(),
            SectionKind::Hero => portfolio.config.profile.tech_stack.len(),
            SectionKind::About => portfolio.about.len(),
            SectionKind::Experience => portfolio.skills.len() + portfolio.history.len(),
            SectionKind::Projects => portfolio.projects.len(),
            SectionKind::Contact => contact::rows(&portfolio.config.profile).len(),
        }
    }

    pub fn render(&self, ctx: &RenderContext) -> Markup {
        match self {
            SectionKind::Nav => nav::render(ctx),
            SectionKind::Hero => hero::render(ctx),
            SectionKind::About => about::render(ctx),
            SectionKind::Experience => experience::render(ctx),
            SectionKind::Projects => projects::render(ctx),
            SectionKind::Contact => contact::render(ctx),
        }
    }

    /// `data-reveal` attribute value: `mount` or the intersection threshold.
    pub fn reveal_attr(&self) -> String {
        match self.trigger() {
            RevealTrigger::Mount => "mount".to_string(),
            RevealTrigger::Viewport(config) => config.threshold.to_string(),
        }
    }
}

/// What every section renderer reads.
pub struct RenderContext<'a> {
    pub portfolio: &'a Portfolio,
    pub images: &'a ImageResolver,
}

impl<'a> RenderContext<'a> {
    pub fn new(portfolio: &'a Portfolio, images: &'a ImageResolver) -> Self {
        Self { portfolio, images }
    }

    pub fn stage(&self, kind: SectionKind) -> Stage {
        Stage::new(&kind.choreography(self.portfolio))
    }
}

/// Resolved entrance schedule of one section.
pub struct Stage {
    timeline: Timeline,
}

impl Stage {
    pub fn new(choreography: &Group) -> Self {
        Self {
            timeline: Timeline::visible(choreography),
        }
    }

    /// Class list of a keyed element: `fx v-{variant}` followed by `extra`.
    /// Keys outside the choreography only get `extra`.
    pub fn class(&self, key: &str, extra: &[&str]) -> String {
        let mut classes: Vec<String> = Vec::with_capacity(extra.len() + 2);
        if let Some(target) = self.timeline.get(key) {
            classes.push("fx".to_string());
            classes.push(variant_class(target.variant));
        }
        classes.extend(extra.iter().filter(|c| !c.is_empty()).map(|c| c.to_string()));
        classes.join(" ")
    }

    /// Inline `--rd` delay of a keyed element. Always set, even at 0,
    /// since custom properties inherit from the enclosing element.
    pub fn style(&self, key: &str) -> Option<String> {
        self.timeline.get(key).map(delay_style)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

/// Class list for an element with a pointer response but no entrance.
pub fn hover_class(interaction: &Interaction, extra: &[&str]) -> String {
    let mut classes = vec!["fx".to_string(), interaction.class()];
    classes.extend(extra.iter().filter(|c| !c.is_empty()).map(|c| c.to_string()));
    classes.join(" ")
}

/// Decorative element running an ambient loop, phase-shifted by `offset_ms`.
pub fn ambient_span(ambient: &Ambient, extra: &str, offset_ms: u32) -> Markup {
    let style = (offset_ms > 0).then(|| ambient.phase_style(offset_ms));
    html! {
        span class={ (ambient.class()) " " (extra) } data-ambient aria-hidden="true" style=[style] {}
    }
}

/// `<img>` for a content image, or a placeholder when it cannot resolve.
pub fn image(resolved: &ResolvedImage, alt: &str, class: &str) -> Markup {
    match resolved {
        ResolvedImage::Found {
            src,
            dimensions: Some((width, height)),
        } => html! {
            img class=(class) src=(src) alt=(alt) width=(width) height=(height) loading="lazy";
        },
        ResolvedImage::Found {
            src,
            dimensions: None,
        }
        | ResolvedImage::External { src } => html! {
            img class=(class) src=(src) alt=(alt) loading="lazy";
        },
        ResolvedImage::Missing { src } => html! {
            img class={ (class) " img-missing" } src=(src) alt=(alt) loading="lazy";
        },
        ResolvedImage::Empty => html! {
            span class={ (class) " img-placeholder" } role="img" aria-label=(alt) {}
        },
    }
}

// ============================================================================
// Shared by the content sections
// ============================================================================

/// Section heading entrance.
pub(crate) const HEADING: Variant =
    Variant::new("heading", VisualState::TRANSPARENT.offset(0.0, 30.0), 800);

const HEADING_SHIMMER_FRAMES: &[Frame] = &[
    Frame::at(0).props(&[("background-position", "0% 50%")]),
    Frame::at(50).props(&[("background-position", "100% 50%")]),
    Frame::at(100).props(&[("background-position", "0% 50%")]),
];
/// Gradient sweep across heading text.
pub(crate) const HEADING_SHIMMER: Ambient =
    Ambient::new("heading-shimmer", HEADING_SHIMMER_FRAMES, 4000).eased(Easing::Linear);

const BACKDROP_FRAMES: &[Frame] = &[
    Frame::at(0).opacity(0.5).props(&[("background-position", "0% 0%")]),
    Frame::at(50).opacity(0.8).props(&[("background-position", "100% 100%")]),
    Frame::at(100).opacity(0.5).props(&[("background-position", "0% 0%")]),
];
/// Slow gradient drift behind a section.
pub(crate) const BACKDROP: Ambient =
    Ambient::new("backdrop", BACKDROP_FRAMES, 8000).eased(Easing::Linear);

const FLOAT_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST).opacity(0.3),
    Frame::at(50).transform(VisualState::REST.offset(0.0, -20.0)).opacity(0.8),
    Frame::at(100).transform(VisualState::REST).opacity(0.3),
];
/// Small dot drifting up and down.
pub(crate) const FLOAT: Ambient =
    Ambient::new("float-dot", FLOAT_FRAMES, 3000).eased(Easing::EaseInOut);

/// `h2` with the shimmer loop, keyed `"title"` in the section's stage.
pub(crate) fn heading(stage: &Stage, text: &str) -> Markup {
    html! {
        h2 class=(stage.class("title", &["section-title"])) style=[stage.style("title")] {
            span class={ "gradient-text " (HEADING_SHIMMER.class()) } data-ambient { (text) }
        }
    }
}

/// Decorative layer behind a section: the gradient drift and `dots`
/// floating dots, each a second out of phase with the previous.
pub(crate) fn backdrop(dots: usize) -> Markup {
    html! {
        div.section-backdrop aria-hidden="true" {
            (ambient_span(&BACKDROP, "backdrop-glow", 0))
            @for i in 0..dots {
                (ambient_span(&FLOAT, "float-dot", i as u32 * 1000))
            }
        }
    }
}

/// External link attributes shared by profile and project links.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Whether a link leaves the page in a new tab (`mailto:` does not).
pub fn opens_new_tab(href: &str) -> bool {
    !href.starts_with("mailto:") && !href.starts_with('#')
}
