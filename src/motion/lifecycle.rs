//! Mount-to-unmount lifecycle of one animated section.
//!
//! A [`SectionInstance`] owns everything a section needs at runtime: its
//! observer, its reveal machine and the queue of per-element start events
//! produced by the dispatcher when it reveals. Instances share nothing, so
//! sections reveal independently of each other. Unmounting cancels every
//! pending start and disposes the observer; nothing fires afterwards.

use super::observer::{ObserverConfig, VisibilityObserver};
use super::reveal::{RevealMachine, RevealState, Transition};
use super::stagger::{Group, dispatch};
use std::collections::VecDeque;

/// What reveals a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealTrigger {
    /// Revealed as soon as it mounts (hero, navigation bar).
    Mount,
    /// Revealed when it scrolls into view.
    Viewport(ObserverConfig),
}

impl RevealTrigger {
    pub fn threshold(&self) -> Option<f32> {
        match self {
            RevealTrigger::Mount => None,
            RevealTrigger::Viewport(config) => Some(config.threshold),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingStart {
    key: String,
    at_ms: u32,
}

#[derive(Debug)]
pub struct SectionInstance {
    id: String,
    choreography: Group,
    observer: Option<VisibilityObserver>,
    reveal: RevealMachine,
    pending: VecDeque<PendingStart>,
    clock_ms: u32,
    mounted: bool,
}

impl SectionInstance {
    /// Mount a section. Mount-triggered sections reveal immediately.
    pub fn mount(id: impl Into<String>, choreography: Group, trigger: RevealTrigger) -> Self {
        let observer = match trigger {
            RevealTrigger::Mount => None,
            RevealTrigger::Viewport(config) => Some(VisibilityObserver::new(config)),
        };
        let mut instance = Self {
            id: id.into(),
            choreography,
            observer,
            reveal: RevealMachine::new(),
            pending: VecDeque::new(),
            clock_ms: 0,
            mounted: true,
        };
        if trigger == RevealTrigger::Mount {
            instance.apply_signal(true);
        }
        instance
    }

    /// Mount on a host that cannot observe the viewport: fail open and
    /// reveal right away.
    pub fn mount_unobserved(id: impl Into<String>, choreography: Group, config: ObserverConfig) -> Self {
        let mut instance = Self::mount(id, choreography, RevealTrigger::Viewport(config));
        let observer = VisibilityObserver::unsupported(config);
        let signal = observer.signal();
        instance.observer = Some(observer);
        instance.apply_signal(signal);
        instance
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> RevealState {
        self.reveal.state()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the viewport subscription is still live.
    pub fn is_observing(&self) -> bool {
        self.observer.as_ref().is_some_and(|o| o.is_observing())
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Feed an intersection ratio from the host.
    pub fn report_intersection(&mut self, ratio: f32) -> Transition {
        if !self.mounted {
            return Transition::Unchanged;
        }
        let signal = match self.observer.as_mut() {
            Some(observer) => observer.report(ratio),
            None => return Transition::Unchanged,
        };
        self.apply_signal(signal)
    }

    fn apply_signal(&mut self, signal: bool) -> Transition {
        let transition = self.reveal.on_signal(signal);
        if transition == Transition::Revealed {
            let mut starts: Vec<PendingStart> = dispatch(&self.choreography, RevealState::Visible)
                .into_iter()
                .map(|target| PendingStart {
                    key: target.key,
                    at_ms: self.clock_ms.saturating_add(target.delay_ms),
                })
                .collect();
            starts.sort_by_key(|s| s.at_ms);
            self.pending = starts.into();
        }
        transition
    }

    /// Advance the section clock and return the keys whose entrance
    /// animation starts within the elapsed window, in start order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<String> {
        if !self.mounted {
            return Vec::new();
        }
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);
        let mut started = Vec::new();
        while self.pending.front().is_some_and(|s| s.at_ms <= self.clock_ms) {
            if let Some(start) = self.pending.pop_front() {
                started.push(start.key);
            }
        }
        started
    }

    /// Tear the section down. Returns how many pending starts were
    /// cancelled.
    pub fn unmount(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        if let Some(observer) = self.observer.as_mut() {
            observer.dispose();
        }
        self.mounted = false;
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::stagger::{Stagger, Variant};
    use crate::motion::visual::VisualState;

    const FADE: Variant = Variant::new("fade", VisualState::TRANSPARENT, 600);

    fn choreography() -> Group {
        Group::new("about", Stagger::every(150))
            .leaf("title", FADE)
            .leaf("card-1", FADE)
            .leaf("card-2", FADE)
    }

    fn viewport(threshold: f32) -> RevealTrigger {
        RevealTrigger::Viewport(ObserverConfig::once(threshold))
    }

    #[test]
    fn viewport_section_starts_hidden() {
        let section = SectionInstance::mount("about", choreography(), viewport(0.2));
        assert_eq!(section.state(), RevealState::Hidden);
        assert_eq!(section.pending(), 0);
        assert!(section.is_observing());
    }

    #[test]
    fn mount_trigger_reveals_immediately() {
        let section = SectionInstance::mount("hero", choreography(), RevealTrigger::Mount);
        assert_eq!(section.state(), RevealState::Visible);
        assert_eq!(section.pending(), 3);
    }

    #[test]
    fn scrolled_in_then_out_stays_visible() {
        let mut section = SectionInstance::mount("about", choreography(), viewport(0.2));
        assert_eq!(section.report_intersection(0.3), Transition::Revealed);
        assert_eq!(section.report_intersection(0.0), Transition::Unchanged);
        assert_eq!(section.state(), RevealState::Visible);
        assert!(!section.is_observing());
    }

    #[test]
    fn starts_fire_in_stagger_order() {
        let mut section = SectionInstance::mount("about", choreography(), viewport(0.2));
        section.report_intersection(0.5);
        assert_eq!(section.advance(0), vec!["title"]);
        assert_eq!(section.advance(100), Vec::<String>::new());
        assert_eq!(section.advance(50), vec!["card-1"]);
        assert_eq!(section.advance(1000), vec!["card-2"]);
        assert_eq!(section.pending(), 0);
    }

    #[test]
    fn reveal_schedules_relative_to_reveal_time() {
        let mut section = SectionInstance::mount("about", choreography(), viewport(0.2));
        section.advance(5000);
        section.report_intersection(0.5);
        assert_eq!(section.advance(0), vec!["title"]);
        assert_eq!(section.advance(150), vec!["card-1"]);
    }

    #[test]
    fn unmount_cancels_pending_starts() {
        let mut section = SectionInstance::mount("about", choreography(), viewport(0.2));
        section.report_intersection(0.5);
        section.advance(0);
        assert_eq!(section.unmount(), 2);
        assert!(section.advance(10_000).is_empty());
        assert!(!section.is_mounted());
        assert!(!section.is_observing());
    }

    #[test]
    fn reports_after_unmount_ignored() {
        let mut section = SectionInstance::mount("about", choreography(), viewport(0.2));
        section.unmount();
        assert_eq!(section.report_intersection(1.0), Transition::Unchanged);
        assert_eq!(section.state(), RevealState::Hidden);
    }

    #[test]
    fn unobserved_host_fails_open() {
        let section =
            SectionInstance::mount_unobserved("about", choreography(), ObserverConfig::once(0.2));
        assert_eq!(section.state(), RevealState::Visible);
        assert_eq!(section.pending(), 3);
    }

    #[test]
    fn sections_are_independent() {
        let mut a = SectionInstance::mount("about", choreography(), viewport(0.2));
        let b = SectionInstance::mount("projects", choreography(), viewport(0.1));
        a.report_intersection(0.9);
        assert_eq!(a.state(), RevealState::Visible);
        assert_eq!(b.state(), RevealState::Hidden);
    }

    #[test]
    fn trigger_threshold() {
        assert_eq!(RevealTrigger::Mount.threshold(), None);
        assert_eq!(viewport(0.1).threshold(), Some(0.1));
    }

    #[test]
    fn huge_elapsed_saturates_clock() {
        let mut section = SectionInstance::mount("about", choreography(), viewport(0.2));
        section.advance(u32::MAX);
        section.report_intersection(1.0);
        assert_eq!(section.advance(u32::MAX).len(), 3);
        assert_eq!(section.pending(), 0);
    }
}
