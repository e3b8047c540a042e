//! Compiles the motion model to CSS.
//!
//! Three independent channels, so no rule overrides another:
//!
//! | Channel  | Properties                                   | Driven by             |
//! |----------|----------------------------------------------|-----------------------|
//! | reveal   | `opacity`, `translate`, `scale`, `rotate`    | `.is-visible` on the section |
//! | pointer  | `transform`, `box-shadow`, `color`, `background-color` | `:hover` / `:active` |
//! | ambient  | `animation` (keyframes write `transform`, `opacity`, raw props) | always on |
//!
//! Timing travels through custom properties on a shared `.fx` transition
//! list: variant classes set `--rt`/`--re`, each element's inline style
//! sets its dispatched delay `--rd`, interaction classes set `--ht`/`--he`.
//!
//! Pre-entrance rules are scoped under `.js`, a class the runtime adds to
//! the root element. Without JavaScript nothing is ever hidden.

use super::ambient::{Ambient, AmbientRegistry};
use super::hover::Interaction;
use super::stagger::{AnimationTarget, Group, Variant};
use super::visual::secs;
use crate::naming::css_ident;

const FX_BASE: &str = ".fx {
    transition:
        opacity var(--rt, 0s) var(--re, ease) var(--rd, 0s),
        translate var(--rt, 0s) var(--re, ease) var(--rd, 0s),
        scale var(--rt, 0s) var(--re, ease) var(--rd, 0s),
        rotate var(--rt, 0s) var(--re, ease) var(--rd, 0s),
        transform var(--ht, 0.2s) var(--he, ease-out),
        box-shadow var(--ht, 0.2s) var(--he, ease-out),
        color var(--ht, 0.2s) var(--he, ease-out),
        background-color var(--ht, 0.2s) var(--he, ease-out);
}";

const REDUCED_MOTION: &str = "@media (prefers-reduced-motion: reduce) {
    .fx { transition: none !important; }
    [data-ambient] { animation: none !important; }
}";

/// Class carrying a variant's timing and hidden/visible rules.
pub fn variant_class(name: &str) -> String {
    format!("v-{}", css_ident(name))
}

/// Inline style carrying one element's dispatched start delay.
pub fn delay_style(target: &AnimationTarget) -> String {
    format!("--rd: {};", secs(target.delay_ms))
}

/// Everything the page's motion needs, deduplicated by stable name.
#[derive(Debug, Clone, Default)]
pub struct MotionSheet {
    variants: Vec<Variant>,
    interactions: Vec<Interaction>,
    ambients: AmbientRegistry,
}

impl MotionSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_choreography(&mut self, root: &Group) {
        for variant in root.variants() {
            if !self.variants.iter().any(|v| v.name == variant.name) {
                self.variants.push(variant);
            }
        }
    }

    pub fn add_interactions(&mut self, interactions: impl IntoIterator<Item = Interaction>) {
        for interaction in interactions {
            if !self.interactions.iter().any(|i| i.name == interaction.name) {
                self.interactions.push(interaction);
            }
        }
    }

    pub fn add_ambients(&mut self, ambients: impl IntoIterator<Item = Ambient>) {
        self.ambients.extend(ambients);
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    pub fn ambient_count(&self) -> usize {
        self.ambients.len()
    }

    /// Render the stylesheet. With `animate = false` only the pointer
    /// channel is emitted and every element renders at rest.
    pub fn to_css(&self, animate: bool, respect_reduced_motion: bool) -> String {
        let mut blocks = vec![FX_BASE.to_string()];

        if animate {
            for variant in &self.variants {
                blocks.push(variant_css(variant));
            }
        }

        for interaction in &self.interactions {
            blocks.push(interaction_css(interaction));
        }

        if animate {
            for ambient in self.ambients.iter() {
                blocks.push(ambient.keyframes_css());
                blocks.push(format!(
                    ".{} {{ animation: {}; }}",
                    ambient.class(),
                    ambient.animation_css()
                ));
            }
        }

        if respect_reduced_motion {
            blocks.push(REDUCED_MOTION.to_string());
        }

        blocks.join("\n\n")
    }
}

fn variant_css(variant: &Variant) -> String {
    let class = variant_class(variant.name);
    format!(
        ".{class} {{ --rt: {duration}; --re: {easing}; }}
.js [data-reveal] .{class}, .js [data-reveal].{class} {{ {hidden} }}
.js [data-reveal].is-visible .{class}, .js [data-reveal].is-visible.{class} {{ {visible} }}",
        duration = secs(variant.duration_ms),
        easing = variant.easing.to_css(),
        hidden = variant.hidden.reveal_declarations(),
        visible = variant.visible.reveal_declarations(),
    )
}

fn interaction_css(interaction: &Interaction) -> String {
    let class = interaction.class();
    let mut css = format!(
        ".{class} {{ --ht: {}; --he: {}; }}",
        secs(interaction.duration_ms),
        interaction.easing.to_css()
    );
    if let Some(hover) = &interaction.hover {
        css.push_str(&format!(
            "\n.{class}:hover, .{class}:focus-visible {{ {} }}",
            hover.declarations()
        ));
    }
    if let Some(press) = &interaction.press {
        css.push_str(&format!("\n.{class}:active {{ {} }}", press.declarations()));
    }
    css
}
