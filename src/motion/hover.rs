//! Hover and press micro-interactions.
//!
//! Pointer responses are pure functions of the current [`PointerState`];
//! nothing is persisted and nothing touches the reveal latch. In the
//! generated page they compile to `:hover` / `:active` rules on the
//! `transform` channel, which the reveal channel never writes.

use super::easing::Easing;
use super::visual::VisualState;
use crate::naming::css_ident;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
}

impl PointerState {
    /// Pointer state after `event`.
    ///
    /// A press without a preceding enter (touch) counts as pressed; release
    /// returns to hovered; leaving always reverts to idle.
    pub fn next(self, event: PointerEvent) -> PointerState {
        match (self, event) {
            (_, PointerEvent::Leave) => PointerState::Idle,
            (_, PointerEvent::Down) => PointerState::Pressed,
            (PointerState::Pressed, PointerEvent::Up) => PointerState::Hovered,
            (PointerState::Idle, PointerEvent::Enter) => PointerState::Hovered,
            (state, _) => state,
        }
    }
}

/// Transient visual adjustment applied while the pointer interacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub transform: VisualState,
    pub shadow: Option<&'static str>,
    pub color: Option<&'static str>,
    pub background: Option<&'static str>,
}

impl Adjustment {
    pub const fn transform(transform: VisualState) -> Self {
        Self {
            transform,
            shadow: None,
            color: None,
            background: None,
        }
    }

    /// Uniform scale, the common case (`1.05` on hover, `0.95` on press).
    pub const fn scale(scale: f32) -> Self {
        Self::transform(VisualState::REST.scaled(scale))
    }

    pub const fn shadow(self, shadow: &'static str) -> Self {
        Self {
            shadow: Some(shadow),
            ..self
        }
    }

    pub const fn color(self, color: &'static str) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub const fn background(self, background: &'static str) -> Self {
        Self {
            background: Some(background),
            ..self
        }
    }

    pub fn declarations(&self) -> String {
        let mut decls = Vec::new();
        if !self.transform.is_untransformed() {
            decls.push(format!("transform: {};", self.transform.transform_css()));
        }
        if let Some(shadow) = self.shadow {
            decls.push(format!("box-shadow: {shadow};"));
        }
        if let Some(color) = self.color {
            decls.push(format!("color: {color};"));
        }
        if let Some(background) = self.background {
            decls.push(format!("background-color: {background};"));
        }
        decls.join(" ")
    }
}

/// Per-element pointer response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    /// Stable name, used as the CSS class suffix (`hx-{name}`).
    pub name: &'static str,
    pub hover: Option<Adjustment>,
    pub press: Option<Adjustment>,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Interaction {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            hover: None,
            press: None,
            duration_ms: 200,
            easing: Easing::EaseOut,
        }
    }

    pub const fn on_hover(self, adjustment: Adjustment) -> Self {
        Self {
            hover: Some(adjustment),
            ..self
        }
    }

    pub const fn on_press(self, adjustment: Adjustment) -> Self {
        Self {
            press: Some(adjustment),
            ..self
        }
    }

    pub const fn timed(self, duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            ..self
        }
    }

    pub fn class(&self) -> String {
        format!("hx-{}", css_ident(self.name))
    }

    /// Adjustment to apply in `pointer` state, `None` meaning "at rest".
    ///
    /// Pressing falls back to the hover adjustment when no distinct press
    /// adjustment exists.
    pub fn resolve(&self, pointer: PointerState) -> Option<&Adjustment> {
        match pointer {
            PointerState::Idle => None,
            PointerState::Hovered => self.hover.as_ref(),
            PointerState::Pressed => self.press.as_ref().or(self.hover.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Interaction = Interaction::new("card")
        .on_hover(
            Adjustment::transform(VisualState::REST.offset(0.0, -5.0).scaled(1.02))
                .shadow("0 20px 40px rgba(59, 130, 246, 0.15)"),
        )
        .on_press(Adjustment::scale(0.98));

    const CHIP: Interaction = Interaction::new("chip").on_hover(Adjustment::scale(1.05));

    #[test]
    fn idle_resolves_to_rest() {
        assert_eq!(CARD.resolve(PointerState::Idle), None);
    }

    #[test]
    fn hover_and_press_are_distinct() {
        let hover = CARD.resolve(PointerState::Hovered).unwrap();
        let press = CARD.resolve(PointerState::Pressed).unwrap();
        assert_eq!(hover.transform.scale, 1.02);
        assert_eq!(press.transform.scale, 0.98);
    }

    #[test]
    fn press_falls_back_to_hover() {
        let press = CHIP.resolve(PointerState::Pressed).unwrap();
        assert_eq!(press.transform.scale, 1.05);
    }

    #[test]
    fn pointer_sequence() {
        let mut state = PointerState::Idle;
        state = state.next(PointerEvent::Enter);
        assert_eq!(state, PointerState::Hovered);
        state = state.next(PointerEvent::Down);
        assert_eq!(state, PointerState::Pressed);
        state = state.next(PointerEvent::Up);
        assert_eq!(state, PointerState::Hovered);
        state = state.next(PointerEvent::Leave);
        assert_eq!(state, PointerState::Idle);
    }

    #[test]
    fn leave_while_pressed_reverts() {
        let state = PointerState::Pressed.next(PointerEvent::Leave);
        assert_eq!(CARD.resolve(state), None);
    }

    #[test]
    fn touch_press_without_enter() {
        assert_eq!(
            PointerState::Idle.next(PointerEvent::Down),
            PointerState::Pressed
        );
    }

    #[test]
    fn declarations_include_shadow_and_transform() {
        let decls = CARD.hover.unwrap().declarations();
        assert!(decls.contains("transform: translate(0px, -5px) scale(1.02);"));
        assert!(decls.contains("box-shadow: 0 20px 40px rgba(59, 130, 246, 0.15);"));
    }

    #[test]
    fn color_only_adjustment_has_no_transform() {
        let adj = Adjustment::scale(1.0).color("#60a5fa");
        assert_eq!(adj.declarations(), "color: #60a5fa;");
    }

    #[test]
    fn class_name() {
        assert_eq!(CARD.class(), "hx-card");
    }
}
