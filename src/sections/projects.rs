//! Projects: a card per entry in `projects.json` with its skill tags and
//! demo/source links, then a "view more" link to the GitHub profile.

use crate::content::Portfolio;
use crate::motion::{Adjustment, Ambient, Easing, Group, Interaction, Stagger, Variant, VisualState};
use crate::naming::item_key;
use crate::sections::{
    BACKDROP, EXTERNAL_REL, FLOAT, HEADING, HEADING_SHIMMER, RenderContext, SectionKind, Stage,
    backdrop, heading, hover_class, image, opens_new_tab,
};
use crate::types::ProjectEntry;
use maud::{Markup, html};

const CONTENT: Variant = Variant::new("projects-content", VisualState::TRANSPARENT, 600);
const SUBTITLE: Variant = HEADING.renamed("projects-subtitle").delayed(200);
const CARD: Variant = Variant::new(
    "project-card",
    VisualState::TRANSPARENT.offset(0.0, 50.0).scaled(0.9),
    600,
);
const TAG: Variant = Variant::new("project-tag", VisualState::TRANSPARENT.scaled(0.8), 300);
const LINKS: Variant =
    Variant::new("project-links", VisualState::TRANSPARENT.offset(0.0, 10.0), 400).delayed(300);
const VIEW_MORE: Variant =
    Variant::new("view-more", VisualState::TRANSPARENT.offset(0.0, 20.0), 600).delayed(500);

const CARD_HOVER: Interaction = Interaction::new("project-card")
    .on_hover(
        Adjustment::transform(VisualState::REST.offset(0.0, -10.0).scaled(1.05))
            .shadow("0 25px 50px rgba(59, 130, 246, 0.2)"),
    )
    .on_press(Adjustment::scale(0.98))
    .timed(500, Easing::EaseOut);
const IMAGE_ZOOM: Interaction = Interaction::new("project-image")
    .on_hover(Adjustment::scale(1.1))
    .timed(400, Easing::EaseOut);
const TAG_HOVER: Interaction = Interaction::new("project-tag")
    .on_hover(Adjustment::scale(1.05).background("rgba(59, 130, 246, 0.3)"))
    .on_press(Adjustment::scale(0.95));
const LINK_HOVER: Interaction = Interaction::new("project-link")
    .on_hover(Adjustment::scale(1.05))
    .on_press(Adjustment::scale(0.95));
const VIEW_MORE_HOVER: Interaction = Interaction::new("view-more")
    .on_hover(Adjustment::scale(1.05).shadow("0 25px 50px rgba(147, 51, 234, 0.3)"))
    .on_press(Adjustment::scale(0.95))
    .timed(300, Easing::EaseOut);

pub const INTERACTIONS: &[Interaction] =
    &[CARD_HOVER, IMAGE_ZOOM, TAG_HOVER, LINK_HOVER, VIEW_MORE_HOVER];
pub const AMBIENTS: &[Ambient] = &[HEADING_SHIMMER, BACKDROP, FLOAT];

fn card_key(index: usize) -> String {
    item_key("card", index)
}

fn tag_key(card: &str, index: usize) -> String {
    item_key(&format!("{card}-tag"), index)
}

fn links_key(card: &str) -> String {
    format!("{card}-links")
}

/// A card animates itself, then its tags 50 ms apart, then its links.
fn card_group(key: String, project: &ProjectEntry) -> Group {
    let mut group = Group::new(key.clone(), Stagger::every(50)).with_variant(CARD);
    for i in 0..project.skill_tags().len() {
        group = group.leaf(tag_key(&key, i), TAG);
    }
    group.leaf(links_key(&key), LINKS)
}

pub fn choreography(portfolio: &Portfolio) -> Group {
    let mut grid = Group::new("grid", Stagger::every(100).after(300));
    for (i, project) in portfolio.projects.iter().enumerate() {
        grid = grid.group(card_group(card_key(i), project));
    }

    Group::new("content", Stagger::every(100))
        .with_variant(CONTENT)
        .leaf("title", HEADING)
        .leaf("subtitle", SUBTITLE)
        .group(grid)
        .leaf("view-more", VIEW_MORE)
}

fn external_link(href: &str, label: &str, class: &str) -> Markup {
    let new_tab = opens_new_tab(href);
    html! {
        a class=(class) href=(href) target=[new_tab.then_some("_blank")] rel=[new_tab.then_some(EXTERNAL_REL)] {
            (label)
        }
    }
}

fn card(ctx: &RenderContext, stage: &Stage, index: usize, project: &ProjectEntry) -> Markup {
    let key = card_key(index);
    let links = links_key(&key);
    let card_hover = CARD_HOVER.class();
    let tag_hover = TAG_HOVER.class();
    let has_links = !project.demo.trim().is_empty() || !project.source.trim().is_empty();

    html! {
        li class=(stage.class(&key, &[card_hover.as_str(), "project-card"])) style=[stage.style(&key)] {
            div.project-media {
                div class=(hover_class(&IMAGE_ZOOM, &["project-image"])) {
                    (image(&ctx.images.resolve(&project.image_src), &format!("Image of {}", project.title), "cover"))
                }
                div.project-shade aria-hidden="true" {}
            }
            div.project-body {
                h3.project-title { (project.title) }
                p.project-description { (project.description) }
                ul.project-tags {
                    @for (i, label) in project.skill_tags().into_iter().enumerate() {
                        @let tag = tag_key(&key, i);
                        li class=(stage.class(&tag, &[tag_hover.as_str(), "tag"])) style=[stage.style(&tag)] {
                            (label)
                        }
                    }
                }
                @if has_links {
                    div class=(stage.class(&links, &["project-links"])) style=[stage.style(&links)] {
                        @if !project.demo.trim().is_empty() {
                            (external_link(&project.demo, "Live Demo", &hover_class(&LINK_HOVER, &["btn", "btn-demo"])))
                        }
                        @if !project.source.trim().is_empty() {
                            (external_link(&project.source, "Source Code", &hover_class(&LINK_HOVER, &["btn", "btn-source"])))
                        }
                    }
                }
            }
        }
    }
}

pub fn render(ctx: &RenderContext) -> Markup {
    let stage = ctx.stage(SectionKind::Projects);
    let github = ctx.portfolio.config.profile.github.trim();

    html! {
        section id=(SectionKind::Projects.id()) class="projects" data-reveal=(SectionKind::Projects.reveal_attr()) {
            (backdrop(3))
            div class=(stage.class("content", &["section-inner"])) style=[stage.style("content")] {
                (heading(&stage, "Projects"))
                p class=(stage.class("subtitle", &["section-subtitle"])) style=[stage.style("subtitle")] {
                    "Here are some of my recent projects that showcase my skills and experience in full-stack development"
                }
                ul.project-grid {
                    @for (i, project) in ctx.portfolio.projects.iter().enumerate() {
                        (card(ctx, &stage, i, project))
                    }
                }
                @if !github.is_empty() {
                    div class=(stage.class("view-more", &["view-more"])) style=[stage.style("view-more")] {
                        (external_link(github, "View More Projects", &hover_class(&VIEW_MORE_HOVER, &["btn", "btn-gradient"])))
                    }
                }
            }
        }
    }
}
