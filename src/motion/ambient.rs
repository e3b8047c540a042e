//! Continuous ambient animations: pulses, floats, spins, gradient cycles.
//!
//! Ambient loops start when the element mounts and repeat until it goes
//! away. They are never gated by the reveal latch. Each loop is keyed by a
//! stable identity and compiled to exactly one `@keyframes` block, so
//! rendering the same loop for many elements (or re-rendering) neither
//! duplicates definitions nor resets phase.

use super::easing::Easing;
use super::visual::{VisualState, num, secs};
use crate::naming::css_ident;
use std::collections::BTreeMap;

/// One keyframe of an ambient loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Position in the cycle, percent.
    pub at: u8,
    pub transform: Option<VisualState>,
    pub opacity: Option<f32>,
    /// Extra raw declarations (`background-position`, gradients...).
    pub props: &'static [(&'static str, &'static str)],
}

impl Frame {
    pub const fn at(at: u8) -> Self {
        Self {
            at,
            transform: None,
            opacity: None,
            props: &[],
        }
    }

    pub const fn transform(self, state: VisualState) -> Self {
        Self {
            transform: Some(state),
            ..self
        }
    }

    pub const fn opacity(self, opacity: f32) -> Self {
        Self {
            opacity: Some(opacity),
            ..self
        }
    }

    pub const fn props(self, props: &'static [(&'static str, &'static str)]) -> Self {
        Self { props, ..self }
    }

    fn declarations(&self) -> String {
        let mut decls = Vec::new();
        if let Some(state) = self.transform {
            decls.push(format!("transform: {};", state.transform_css()));
        }
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {};", num(opacity)));
        }
        for (property, value) in self.props {
            decls.push(format!("{property}: {value};"));
        }
        decls.join(" ")
    }
}

/// An indefinitely repeating animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ambient {
    /// Stable identity; two loops with the same key are the same loop.
    pub key: &'static str,
    pub frames: &'static [Frame],
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Ambient {
    pub const fn new(key: &'static str, frames: &'static [Frame], duration_ms: u32) -> Self {
        Self {
            key,
            frames,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseInOut,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn eased(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// `@keyframes` name.
    pub fn keyframes_name(&self) -> String {
        format!("amb-{}", css_ident(self.key))
    }

    /// Class that attaches the loop to an element.
    pub fn class(&self) -> String {
        format!("a-{}", css_ident(self.key))
    }

    pub fn keyframes_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.keyframes_name());
        for frame in self.frames {
            css.push_str(&format!("    {}% {{ {} }}\n", frame.at, frame.declarations()));
        }
        css.push('}');
        css
    }

    /// `animation` shorthand value.
    pub fn animation_css(&self) -> String {
        format!(
            "{} {} {} {} infinite",
            self.keyframes_name(),
            secs(self.duration_ms),
            self.easing.to_css(),
            secs(self.delay_ms)
        )
    }

    /// Inline override shifting one element's phase, e.g. the n-th bullet
    /// of a list pulsing `n × 200ms` after the first.
    pub fn phase_style(&self, extra_delay_ms: u32) -> String {
        format!("animation-delay: {};", secs(self.delay_ms + extra_delay_ms))
    }
}

/// Deduplicating collection of ambient loops, keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct AmbientRegistry {
    loops: BTreeMap<&'static str, Ambient>,
}

impl AmbientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loop. Returns `false` when the key is already known; the
    /// first definition is kept.
    pub fn register(&mut self, ambient: Ambient) -> bool {
        if self.loops.contains_key(ambient.key) {
            return false;
        }
        self.loops.insert(ambient.key, ambient);
        true
    }

    pub fn extend(&mut self, ambients: impl IntoIterator<Item = Ambient>) {
        for ambient in ambients {
            self.register(ambient);
        }
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ambient> {
        self.loops.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PULSE_FRAMES: &[Frame] = &[
        Frame::at(0).transform(VisualState::REST).opacity(0.7),
        Frame::at(50).transform(VisualState::REST.scaled(1.2)).opacity(1.0),
        Frame::at(100).transform(VisualState::REST).opacity(0.7),
    ];
    const PULSE: Ambient = Ambient::new("status-dot", PULSE_FRAMES, 2000);

    const SHIMMER_FRAMES: &[Frame] = &[
        Frame::at(0).props(&[("background-position", "0% 50%")]),
        Frame::at(50).props(&[("background-position", "100% 50%")]),
        Frame::at(100).props(&[("background-position", "0% 50%")]),
    ];
    const SHIMMER: Ambient = Ambient::new("title-shimmer", SHIMMER_FRAMES, 4000).eased(Easing::Linear);

    #[test]
    fn keyframes_cover_all_frames() {
        let css = PULSE.keyframes_css();
        assert!(css.starts_with("@keyframes amb-status-dot {"));
        assert!(css.contains("0% { transform: none; opacity: 0.7; }"));
        assert!(css.contains("50% { transform: scale(1.2); opacity: 1; }"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn raw_props_emitted() {
        let css = SHIMMER.keyframes_css();
        assert!(css.contains("100% { background-position: 0% 50%; }"));
    }

    #[test]
    fn animation_shorthand_is_infinite() {
        assert_eq!(
            PULSE.delayed(500).animation_css(),
            "amb-status-dot 2s ease-in-out 0.5s infinite"
        );
        assert_eq!(
            SHIMMER.animation_css(),
            "amb-title-shimmer 4s linear 0s infinite"
        );
    }

    #[test]
    fn registry_keeps_first_definition() {
        let mut registry = AmbientRegistry::new();
        assert!(registry.register(PULSE));
        assert!(!registry.register(PULSE.delayed(900)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().next().unwrap().delay_ms, 0);
    }

    #[test]
    fn registry_extend_does_not_accumulate() {
        let mut registry = AmbientRegistry::new();
        for _ in 0..5 {
            registry.extend([PULSE, SHIMMER]);
        }
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn phase_style_offsets_delay() {
        assert_eq!(
            PULSE.delayed(100).phase_style(400),
            "animation-delay: 0.5s;"
        );
    }

    #[test]
    fn class_and_keyframes_share_ident() {
        assert_eq!(PULSE.class(), "a-status-dot");
        assert_eq!(PULSE.keyframes_name(), "amb-status-dot");
    }
}
