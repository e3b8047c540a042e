//! Experience: the skills grid beside the work history.
//!
//! Both columns are nested groups so skills cascade inside their column
//! while the history column trails it by 200 ms. Each history card is a
//! group of its own: its bullet points slide in after the card.

use crate::content::Portfolio;
use crate::motion::{Adjustment, Ambient, Easing, Frame, Group, Interaction, Stagger, Variant, VisualState};
use crate::naming::item_key;
use crate::sections::{
    BACKDROP, FLOAT, HEADING, HEADING_SHIMMER, RenderContext, SectionKind, ambient_span, backdrop,
    heading, hover_class, image,
};
use crate::types::HistoryEntry;
use maud::{Markup, html};

const CONTENT: Variant = Variant::new("exp-content", VisualState::TRANSPARENT, 600);
const COLUMN: Variant = Variant::new("exp-column", VisualState::TRANSPARENT.offset(-30.0, 0.0), 600);
const HISTORY_COLUMN: Variant = COLUMN.renamed("exp-history-column").delayed(200);
const SKILL: Variant = Variant::new(
    "exp-skill",
    VisualState::TRANSPARENT.offset(0.0, 20.0).scaled(0.9),
    500,
);
const HISTORY: Variant = Variant::new("exp-history", VisualState::TRANSPARENT.offset(30.0, 0.0), 600);
const ITEM: Variant = Variant::new("exp-item", VisualState::TRANSPARENT.offset(10.0, 0.0), 400);

const SKILL_HOVER: Interaction = Interaction::new("exp-skill")
    .on_hover(Adjustment::scale(1.05).shadow("0 20px 40px rgba(6, 182, 212, 0.2)"))
    .timed(300, Easing::EaseOut);
const SKILL_ICON: Interaction = Interaction::new("exp-skill-icon")
    .on_hover(Adjustment::transform(VisualState::REST.rotated(5.0).scaled(1.15)))
    .timed(300, Easing::Spring { stiffness: 300 });
const HISTORY_HOVER: Interaction = Interaction::new("exp-history")
    .on_hover(Adjustment::scale(1.02).shadow("0 20px 40px rgba(168, 85, 247, 0.2)"))
    .timed(300, Easing::EaseOut);
const HISTORY_ICON: Interaction = Interaction::new("exp-history-icon")
    .on_hover(Adjustment::transform(VisualState::REST.rotated(-5.0).scaled(1.15)))
    .timed(300, Easing::Spring { stiffness: 300 });
const ITEM_HOVER: Interaction =
    Interaction::new("exp-item").on_hover(Adjustment::transform(VisualState::REST.offset(5.0, 0.0)));

pub const INTERACTIONS: &[Interaction] =
    &[SKILL_HOVER, SKILL_ICON, HISTORY_HOVER, HISTORY_ICON, ITEM_HOVER];

const BULLET_FRAMES: &[Frame] = &[
    Frame::at(0).transform(VisualState::REST),
    Frame::at(50).transform(VisualState::REST.scaled(1.2)),
    Frame::at(100).transform(VisualState::REST),
];
const BULLET: Ambient = Ambient::new("bullet-pulse", BULLET_FRAMES, 2000);

const BAR_FRAMES: &[Frame] = &[
    Frame::at(0).props(&[("transform", "scaleY(1)")]),
    Frame::at(50).props(&[("transform", "scaleY(1.2)")]),
    Frame::at(100).props(&[("transform", "scaleY(1)")]),
];
const BAR: Ambient = Ambient::new("heading-bar", BAR_FRAMES, 2000).eased(Easing::EaseInOut);

pub const AMBIENTS: &[Ambient] = &[HEADING_SHIMMER, BACKDROP, FLOAT, BULLET, BAR];

fn skill_key(index: usize) -> String {
    item_key("skill", index)
}

fn history_key(index: usize) -> String {
    item_key("history", index)
}

fn bullet_key(history: &str, index: usize) -> String {
    item_key(&format!("{history}-item"), index)
}

fn history_group(key: String, entry: &HistoryEntry) -> Group {
    let mut group = Group::new(key.clone(), Stagger::every(100).after(300)).with_variant(HISTORY);
    for j in 0..entry.experiences.len() {
        group = group.leaf(bullet_key(&key, j), ITEM);
    }
    group
}

pub fn choreography(portfolio: &Portfolio) -> Group {
    let mut skills = Group::new("skills", Stagger::every(100)).with_variant(COLUMN);
    for i in 0..portfolio.skills.len() {
        skills = skills.leaf(skill_key(i), SKILL);
    }

    let mut history = Group::new("history", Stagger::every(100)).with_variant(HISTORY_COLUMN);
    for (i, entry) in portfolio.history.iter().enumerate() {
        history = history.group(history_group(history_key(i), entry));
    }

    Group::new("content", Stagger::every(100))
        .with_variant(CONTENT)
        .leaf("title", HEADING)
        .group(skills)
        .group(history)
}

fn column_heading(text: &str, bar_offset_ms: u32, tone: &str) -> Markup {
    html! {
        h3.column-heading {
            (ambient_span(&BAR, &format!("heading-bar {tone}"), bar_offset_ms))
            (text)
        }
    }
}

pub fn render(ctx: &RenderContext) -> Markup {
    let stage = ctx.stage(SectionKind::Experience);
    let portfolio = ctx.portfolio;
    let skill_hover = SKILL_HOVER.class();
    let history_hover = HISTORY_HOVER.class();
    let item_hover = ITEM_HOVER.class();

    html! {
        section id=(SectionKind::Experience.id()) class="experience" data-reveal=(SectionKind::Experience.reveal_attr()) {
            (backdrop(3))
            div class=(stage.class("content", &["section-inner"])) style=[stage.style("content")] {
                (heading(&stage, "Experience"))
                div.experience-columns {
                    div class=(stage.class("skills", &["skills-column"])) style=[stage.style("skills")] {
                        (column_heading("Technical Skills", 0, "tone-cyan"))
                        ul.skills-grid {
                            @for (i, skill) in portfolio.skills.iter().enumerate() {
                                @let key = skill_key(i);
                                li class=(stage.class(&key, &[skill_hover.as_str(), "skill"])) style=[stage.style(&key)] {
                                    div class=(hover_class(&SKILL_ICON, &["skill-icon"])) {
                                        (image(&ctx.images.resolve(&skill.image_src), &skill.title, "icon"))
                                    }
                                    p.skill-title { (skill.title) }
                                }
                            }
                        }
                    }
                    div class=(stage.class("history", &["history-column"])) style=[stage.style("history")] {
                        (column_heading("Work History", 500, "tone-purple"))
                        ul.history-list {
                            @for (i, entry) in portfolio.history.iter().enumerate() {
                                @let key = history_key(i);
                                li class=(stage.class(&key, &[history_hover.as_str(), "history-card"])) style=[stage.style(&key)] {
                                    div class=(hover_class(&HISTORY_ICON, &["history-icon"])) {
                                        (image(&ctx.images.resolve(&entry.image_src), &format!("{} logo", entry.organisation), "icon"))
                                    }
                                    div.history-body {
                                        h4.history-role { (entry.role) }
                                        p.history-org { (entry.organisation) }
                                        p.history-dates { (entry.date_range()) }
                                        ul.history-items {
                                            @for (j, experience) in entry.experiences.iter().enumerate() {
                                                @let item = bullet_key(&key, j);
                                                li class=(stage.class(&item, &[item_hover.as_str(), "exp-item"])) style=[stage.style(&item)] {
                                                    (ambient_span(&BULLET, "bullet", j as u32 * 200))
                                                    span { (experience) }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
