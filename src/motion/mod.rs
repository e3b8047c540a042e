//! Declarative motion: the model behind every animation on the page.
//!
//! | Module        | Concern                                                      |
//! |---------------|--------------------------------------------------------------|
//! | [`visual`]    | Opacity + transform snapshot of an element                   |
//! | [`easing`]    | Timing functions                                             |
//! | [`observer`]  | Viewport visibility signal with once-latch                   |
//! | [`reveal`]    | Hidden → Visible state machine per section                   |
//! | [`stagger`]   | Variants, choreography trees, stagger dispatch               |
//! | [`hover`]     | Pointer micro-interactions                                   |
//! | [`ambient`]   | Infinite loops, deduplicated by identity                     |
//! | [`lifecycle`] | Mount / reveal / unmount of one section                      |
//! | [`css`]       | Compilation of all of the above to a stylesheet             |
//!
//! Everything here is plain data and pure functions. The browser runtime
//! (`static/motion.js`) only flips classes; all timing is computed at
//! build time and written into the page.

pub mod ambient;
pub mod css;
pub mod easing;
pub mod hover;
pub mod lifecycle;
pub mod observer;
pub mod reveal;
pub mod stagger;
pub mod visual;

pub use ambient::{Ambient, AmbientRegistry, Frame};
pub use css::{MotionSheet, delay_style, variant_class};
pub use easing::Easing;
pub use hover::{Adjustment, Interaction, PointerEvent, PointerState};
pub use lifecycle::{RevealTrigger, SectionInstance};
pub use observer::{ObserverConfig, VisibilityObserver};
pub use reveal::{RevealMachine, RevealState, Transition};
pub use stagger::{AnimationTarget, Group, Node, Stagger, Timeline, Variant, dispatch};
pub use visual::VisualState;
