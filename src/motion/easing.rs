//! Timing functions for transitions and ambient loops.

use super::visual::num;

/// Timing function of a transition or keyframe animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Spring-like overshoot. CSS has no spring primitive, so this is
    /// approximated with an overshooting cubic bezier whose peak grows
    /// with stiffness (capped at 500).
    Spring { stiffness: u16 },
    /// Discrete jumps, used by the typewriter loop.
    Steps(u16),
}

impl Easing {
    /// CSS `<easing-function>` value.
    pub fn to_css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::Ease => "ease".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::Spring { stiffness } => {
                let overshoot = 1.0 + f32::from((*stiffness).min(500)) / 500.0 * 0.8;
                format!("cubic-bezier(0.34, {}, 0.64, 1)", num(overshoot))
            }
            Easing::Steps(n) => format!("steps({}, end)", (*n).max(1)),
        }
    }

    /// Short label for CLI output.
    pub fn label(&self) -> String {
        match self {
            Easing::Spring { stiffness } => format!("spring({stiffness})"),
            Easing::Steps(n) => format!("steps({n})"),
            other => other.to_css(),
        }
    }
}
