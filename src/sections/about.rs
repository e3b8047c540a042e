//! About: one card per role in `about.json`, in file order.

use crate::content::Portfolio;
use crate::motion::{Adjustment, Ambient, Easing, Group, Interaction, Stagger, Variant, VisualState};
use crate::naming::item_key;
use crate::sections::{
    BACKDROP, FLOAT, HEADING, HEADING_SHIMMER, RenderContext, SectionKind, backdrop, heading,
    hover_class, image,
};
use maud::{Markup, html};

const CONTENT: Variant = Variant::new("about-content", VisualState::TRANSPARENT, 600);
const CARD: Variant = Variant::new("about-card", VisualState::TRANSPARENT.offset(50.0, 20.0), 600);

const CARD_HOVER: Interaction = Interaction::new("about-card")
    .on_hover(
        Adjustment::transform(VisualState::REST.offset(0.0, -5.0).scaled(1.02))
            .shadow("0 20px 40px rgba(59, 130, 246, 0.15)"),
    )
    .timed(300, Easing::EaseOut);
const ICON_HOVER: Interaction = Interaction::new("about-icon")
    .on_hover(Adjustment::transform(VisualState::REST.rotated(10.0).scaled(1.15)))
    .timed(300, Easing::Spring { stiffness: 300 });

pub const INTERACTIONS: &[Interaction] = &[CARD_HOVER, ICON_HOVER];
pub const AMBIENTS: &[Ambient] = &[HEADING_SHIMMER, BACKDROP, FLOAT];

/// Accent colors cycled across cards.
const ACCENTS: [&str; 3] = ["accent-blue", "accent-purple", "accent-green"];

/// Heading, then cards 150 ms apart.
pub fn choreography(portfolio: &Portfolio) -> Group {
    let mut group = Group::new("content", Stagger::every(150))
        .with_variant(CONTENT)
        .leaf("title", HEADING);
    for i in 0..portfolio.about.len() {
        group = group.leaf(item_key("card", i), CARD);
    }
    group
}

pub fn render(ctx: &RenderContext) -> Markup {
    let stage = ctx.stage(SectionKind::About);
    let card_hover = CARD_HOVER.class();

    html! {
        section id=(SectionKind::About.id()) class="about" data-reveal=(SectionKind::About.reveal_attr()) {
            (backdrop(3))
            div class=(stage.class("content", &["section-inner"])) style=[stage.style("content")] {
                (heading(&stage, "About"))
                ul.about-cards {
                    @for (i, entry) in ctx.portfolio.about.iter().enumerate() {
                        @let key = item_key("card", i);
                        li class=(stage.class(&key, &[card_hover.as_str(), "about-card", ACCENTS[i % ACCENTS.len()]]))
                            style=[stage.style(&key)] {
                            div class=(hover_class(&ICON_HOVER, &["about-icon"])) {
                                (image(&ctx.images.resolve(&entry.image_src), &entry.title, "icon"))
                            }
                            div.about-text {
                                h3 { (entry.title) }
                                p { (entry.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}
