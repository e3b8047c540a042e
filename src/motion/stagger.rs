//! Staggered animation dispatch.
//!
//! A section's entrance is described as a [`Group`] tree (its
//! *choreography*). Each node carries a [`Variant`]: a plain configuration
//! struct with the pre-entrance (`hidden`) and resting (`visible`) visual
//! states, a duration, an own delay and an easing. Groups add a
//! [`Stagger`] that offsets their children in sequence.
//!
//! [`dispatch`] resolves the tree against the section's [`RevealState`]:
//!
//! ```text
//! start(child i) = start(parent) + delay_children + i × interval + own delay
//! ```
//!
//! so a deeply nested element's delay is the sum of every ancestor offset
//! plus its own index offset inside its immediate parent. Siblings never
//! overtake each other: each child starts at least one interval after the
//! previous one, even when an earlier sibling carries a larger own delay.

use super::easing::Easing;
use super::reveal::RevealState;
use super::visual::VisualState;
use std::collections::BTreeMap;

/// Entrance animation of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    /// Stable name, used as the CSS class suffix (`v-{name}`).
    pub name: &'static str,
    pub hidden: VisualState,
    pub visible: VisualState,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Variant {
    /// Variant animating from `hidden` to rest, ease-out, no own delay.
    pub const fn new(name: &'static str, hidden: VisualState, duration_ms: u32) -> Self {
        Self {
            name,
            hidden,
            visible: VisualState::REST,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn eased(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// Same animation under another name, for variants that differ only
    /// in their own delay and so need their own CSS class.
    pub const fn renamed(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    pub fn target(&self, state: RevealState) -> VisualState {
        match state {
            RevealState::Hidden => self.hidden,
            RevealState::Visible => self.visible,
        }
    }
}

/// Sequencing of a group's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stagger {
    /// Offset between consecutive children.
    pub interval_ms: u32,
    /// Offset before the first child.
    pub delay_children_ms: u32,
}

impl Stagger {
    pub const NONE: Self = Self {
        interval_ms: 0,
        delay_children_ms: 0,
    };

    pub const fn every(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            delay_children_ms: 0,
        }
    }

    pub const fn after(self, delay_children_ms: u32) -> Self {
        Self {
            delay_children_ms,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf { key: String, variant: Variant },
    Group(Group),
}

impl Node {
    fn own_delay(&self) -> u32 {
        match self {
            Node::Leaf { variant, .. } => variant.delay_ms,
            Node::Group(group) => group.variant.map(|v| v.delay_ms).unwrap_or(0),
        }
    }
}

/// A staggered container.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: String,
    /// The container's own entrance, if it animates itself.
    pub variant: Option<Variant>,
    pub stagger: Stagger,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(key: impl Into<String>, stagger: Stagger) -> Self {
        Self {
            key: key.into(),
            variant: None,
            stagger,
            children: Vec::new(),
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn leaf(mut self, key: impl Into<String>, variant: Variant) -> Self {
        self.children.push(Node::Leaf {
            key: key.into(),
            variant,
        });
        self
    }

    pub fn group(mut self, group: Group) -> Self {
        self.children.push(Node::Group(group));
        self
    }

    /// Every distinct variant in the tree, first occurrence wins.
    pub fn variants(&self) -> Vec<Variant> {
        let mut found: Vec<Variant> = Vec::new();
        collect_variants(self, &mut found);
        found
    }
}

fn collect_variants(group: &Group, found: &mut Vec<Variant>) {
    if let Some(variant) = group.variant {
        push_unique(found, variant);
    }
    for child in &group.children {
        match child {
            Node::Leaf { variant, .. } => push_unique(found, *variant),
            Node::Group(inner) => collect_variants(inner, found),
        }
    }
}

fn push_unique(found: &mut Vec<Variant>, variant: Variant) {
    if !found.iter().any(|v| v.name == variant.name) {
        found.push(variant);
    }
}

/// Resolved animation of one keyed element.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTarget {
    pub key: String,
    pub variant: &'static str,
    /// State the element animates towards.
    pub state: VisualState,
    /// Start offset from the section's reveal.
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
    /// Nesting depth below the section root.
    pub depth: usize,
}

impl AnimationTarget {
    pub fn end_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }
}

/// Resolve a choreography against a reveal state, in document order.
///
/// While hidden, every element sits at its pre-entrance state with no
/// delay and no duration. Once visible, elements animate to rest on the
/// staggered schedule.
pub fn dispatch(root: &Group, state: RevealState) -> Vec<AnimationTarget> {
    let mut out = Vec::new();
    let root_start = match state {
        RevealState::Hidden => 0,
        RevealState::Visible => root.variant.map(|v| v.delay_ms).unwrap_or(0),
    };
    walk(root, root_start, 0, state, &mut out);
    out
}

fn walk(
    group: &Group,
    start: u32,
    depth: usize,
    state: RevealState,
    out: &mut Vec<AnimationTarget>,
) {
    if let Some(variant) = group.variant {
        out.push(target(&group.key, &variant, start, depth, state));
    }

    let interval = group.stagger.interval_ms;
    let mut previous: Option<u32> = None;
    for (index, child) in group.children.iter().enumerate() {
        let child_start = match state {
            RevealState::Hidden => 0,
            RevealState::Visible => {
                let natural = start
                    + group.stagger.delay_children_ms
                    + index as u32 * interval
                    + child.own_delay();
                match previous {
                    Some(prev) => natural.max(prev + interval),
                    None => natural,
                }
            }
        };
        previous = Some(child_start);

        match child {
            Node::Leaf { key, variant } => {
                out.push(target(key, variant, child_start, depth + 1, state));
            }
            Node::Group(inner) => walk(inner, child_start, depth + 1, state, out),
        }
    }
}

fn target(
    key: &str,
    variant: &Variant,
    start: u32,
    depth: usize,
    state: RevealState,
) -> AnimationTarget {
    let duration_ms = match state {
        RevealState::Hidden => 0,
        RevealState::Visible => variant.duration_ms,
    };
    AnimationTarget {
        key: key.to_string(),
        variant: variant.name,
        state: variant.target(state),
        delay_ms: start,
        duration_ms,
        easing: variant.easing,
        depth,
    }
}

/// Dispatched targets indexed by element key, for renderers.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    targets: BTreeMap<String, AnimationTarget>,
    order: Vec<String>,
}

impl Timeline {
    pub fn new(targets: Vec<AnimationTarget>) -> Self {
        let mut timeline = Self::default();
        for target in targets {
            if !timeline.targets.contains_key(&target.key) {
                timeline.order.push(target.key.clone());
            }
            timeline.targets.insert(target.key.clone(), target);
        }
        timeline
    }

    /// The visible-state schedule of a choreography.
    pub fn visible(root: &Group) -> Self {
        Self::new(dispatch(root, RevealState::Visible))
    }

    pub fn get(&self, key: &str) -> Option<&AnimationTarget> {
        self.targets.get(key)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets sorted by start offset; ties keep document order.
    pub fn by_start(&self) -> Vec<&AnimationTarget> {
        let mut ordered: Vec<&AnimationTarget> =
            self.order.iter().filter_map(|k| self.targets.get(k)).collect();
        ordered.sort_by_key(|t| t.delay_ms);
        ordered
    }

    /// When the last entrance animation finishes.
    pub fn total_ms(&self) -> u32 {
        self.targets.values().map(|t| t.end_ms()).max().unwrap_or(0)
    }
}
