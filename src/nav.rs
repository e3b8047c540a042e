//! Navigation bar: menu state machine, scroll flag and markup.
//!
//! On desktop the links sit inline and the menu machinery is inert. On
//! mobile a toggle opens a slide-in panel over a click-to-close overlay;
//! following a link or clicking the overlay closes it again.
//!
//! ```text
//!            Toggle                    Toggle / LinkActivated / OverlayClicked
//!  Closed ──────────▶ Open ───────────────────────────────────────────▶ Closed
//! ```
//!
//! The scroll flag is independent of the menu: every scroll event sets it
//! to `y > threshold`.
//!
//! The browser runtime (`static/motion.js`) mirrors this machine on the
//! `data-menu` attribute of the header.

use crate::motion::{
    Adjustment, Ambient, Easing, Frame, Group, Interaction, Stagger, Variant, VisualState,
};
use crate::naming::anchor_href;
use crate::sections::{RenderContext, SectionKind, hover_class};
use maud::{Markup, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkActivated,
    OverlayClicked,
}

/// Ephemeral UI state owned by the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    layout: Layout,
    menu: MenuState,
    scrolled: bool,
    scroll_threshold_px: u32,
}

impl NavState {
    pub fn new(layout: Layout, scroll_threshold_px: u32) -> Self {
        Self {
            layout,
            menu: MenuState::Closed,
            scrolled: false,
            scroll_threshold_px,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuState {
        if self.layout == Layout::Desktop {
            return self.menu;
        }
        self.menu = match (event, self.menu) {
            (MenuEvent::Toggle, MenuState::Closed) => MenuState::Open,
            (MenuEvent::Toggle, MenuState::Open) => MenuState::Closed,
            (MenuEvent::LinkActivated | MenuEvent::OverlayClicked, _) => MenuState::Closed,
        };
        self.menu
    }

    /// Record a scroll position; returns the new flag.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        self.scrolled = y > f64::from(self.scroll_threshold_px);
        self.scrolled
    }

    /// Viewport crossed the breakpoint. Leaving mobile closes the menu.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        if layout == Layout::Desktop {
            self.menu = MenuState::Closed;
        }
    }

    pub fn menu_visible(&self) -> bool {
        self.layout == Layout::Mobile && self.menu == MenuState::Open
    }

    pub fn overlay_visible(&self) -> bool {
        self.menu_visible()
    }

    /// Links render inline in the bar (desktop) rather than in the panel.
    pub fn links_inline(&self) -> bool {
        self.layout == Layout::Desktop
    }
}

/// Section links, in bar order. The contact call to action follows them.
pub const LINKS: [SectionKind; 3] = [
    SectionKind::About,
    SectionKind::Experience,
    SectionKind::Projects,
];

pub fn label(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Nav | SectionKind::Hero => "Home",
        SectionKind::About => "About",
        SectionKind::Experience => "Experience",
        SectionKind::Projects => "Projects",
        SectionKind::Contact => "Contact",
    }
}

// ============================================================================
// Motion
// ============================================================================

const BAR: Variant = Variant::new("nav-bar", VisualState::TRANSPARENT.offset(0.0, -100.0), 600);
const ITEM: Variant = Variant::new("nav-item", VisualState::TRANSPARENT.offset(0.0, -20.0), 300);

const LINK: Interaction = Interaction::new("nav-link")
    .on_hover(Adjustment::transform(VisualState::REST.offset(0.0, -2.0)).color("var(--color-text)"));
const BRAND: Interaction = Interaction::new("nav-brand")
    .on_hover(Adjustment::scale(1.05))
    .on_press(Adjustment::scale(0.95));
const CTA: Interaction = Interaction::new("nav-cta")
    .on_hover(Adjustment::scale(1.05).shadow("0 10px 30px rgba(59, 130, 246, 0.3)"))
    .on_press(Adjustment::scale(0.95));
const TOGGLE: Interaction = Interaction::new("nav-toggle").on_press(Adjustment::scale(0.9));

pub const INTERACTIONS: &[Interaction] = &[LINK, BRAND, CTA, TOGGLE];

const SHIMMER_FRAMES: &[Frame] = &[
    Frame::at(0).props(&[("background-position", "0% 50%")]),
    Frame::at(50).props(&[("background-position", "100% 50%")]),
    Frame::at(100).props(&[("background-position", "0% 50%")]),
];
const SHIMMER: Ambient = Ambient::new("brand-shimmer", SHIMMER_FRAMES, 3000).eased(Easing::Linear);

pub const AMBIENTS: &[Ambient] = &[SHIMMER];

/// The bar drops in; links follow 100 ms apart after 300 ms.
pub fn choreography() -> Group {
    let mut group = Group::new("nav", Stagger::every(100).after(300)).with_variant(BAR);
    for kind in LINKS {
        group = group.leaf(link_key(kind), ITEM);
    }
    group.leaf("cta", ITEM)
}

fn link_key(kind: SectionKind) -> String {
    format!("link-{}", kind.id())
}

fn href(kind: SectionKind) -> String {
    anchor_href(kind.id())
}

// ============================================================================
// Markup
// ============================================================================

/// Render the bar in its initial state (top of page, menu closed).
pub fn render(ctx: &RenderContext) -> Markup {
    let motion = &ctx.portfolio.config.motion;
    render_state(ctx, &NavState::new(Layout::Desktop, motion.scroll_threshold_px))
}

/// Render the bar for a given state. The mobile panel and overlay are
/// always emitted so the runtime can open them; they carry `hidden` unless
/// the state shows them. Both follow the header rather than nest in it,
/// so the header's entrance and scrolled styles never become their
/// containing block.
pub fn render_state(ctx: &RenderContext, state: &NavState) -> Markup {
    let stage = ctx.stage(SectionKind::Nav);
    let site = &ctx.portfolio.config.site;
    let contact = href(SectionKind::Contact);
    let cta_class = CTA.class();
    let expanded = if state.menu_visible() { "true" } else { "false" };
    let header_class = stage.class("nav", &["site-nav", if state.scrolled() { "scrolled" } else { "" }]);

    html! {
        header id=(SectionKind::Nav.id())
            class=(header_class)
            style=[stage.style("nav")]
            data-reveal=(SectionKind::Nav.reveal_attr())
            data-menu=(state.menu().as_str())
            data-scroll-threshold=(state.scroll_threshold_px) {
            nav.nav-inner aria-label="Main" {
                a class=(hover_class(&BRAND, &["brand"])) href=(href(SectionKind::Hero)) {
                    span class={ "brand-text " (SHIMMER.class()) } data-ambient { (site.title) }
                }
                ul.nav-links {
                    @for kind in LINKS {
                        @let key = link_key(kind);
                        li class=(stage.class(&key, &[])) style=[stage.style(&key)] {
                            a class=(hover_class(&LINK, &["nav-link"])) href=(href(kind)) { (label(kind)) }
                        }
                    }
                }
                a class=(stage.class("cta", &[cta_class.as_str(), "nav-cta"])) style=[stage.style("cta")] href=(contact) {
                    (label(SectionKind::Contact))
                }
                button class=(hover_class(&TOGGLE, &["menu-toggle"]))
                    type="button"
                    aria-label="Toggle menu"
                    aria-controls="nav-menu"
                    aria-expanded=(expanded)
                    data-menu-toggle {
                    span.bar {}
                    span.bar {}
                    span.bar {}
                }
            }
        }
        div.nav-overlay data-menu-overlay hidden[!state.overlay_visible()] {}
        div.nav-menu id="nav-menu" data-menu-panel hidden[!state.menu_visible()] {
            ul {
                @for kind in LINKS {
                    li {
                        a.menu-link href=(href(kind)) data-menu-link { (label(kind)) }
                    }
                }
            }
            a.menu-cta href=(contact) data-menu-link { (label(SectionKind::Contact)) }
        }
    }
}
