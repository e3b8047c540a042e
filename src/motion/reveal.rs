//! Per-section reveal state machine: `Hidden → Visible`, exactly once.

/// Reveal state of one section instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealState::Hidden => "hidden",
            RevealState::Visible => "visible",
        }
    }
}

/// Outcome of feeding a visibility signal to a [`RevealMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The single `Hidden → Visible` edge was taken.
    Revealed,
    Unchanged,
}

/// One-shot latch over [`RevealState`].
///
/// `Visible` is terminal: nothing moves the machine back, so entrance
/// animations never replay when the visitor scrolls up.
#[derive(Debug, Clone, Default)]
pub struct RevealMachine {
    state: RevealState,
}

impl RevealMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Apply the observer's current signal.
    pub fn on_signal(&mut self, entered_viewport: bool) -> Transition {
        match (self.state, entered_viewport) {
            (RevealState::Hidden, true) => {
                self.state = RevealState::Visible;
                Transition::Revealed
            }
            _ => Transition::Unchanged,
        }
    }

    /// Force the reveal (sections revealed on mount, reduced motion).
    pub fn reveal(&mut self) -> Transition {
        self.on_signal(true)
    }
}
