//! Viewport visibility observation with a one-shot latch.
//!
//! A [`VisibilityObserver`] turns a stream of intersection ratios (the
//! fraction of the element's area currently on screen) into a boolean
//! "has entered the viewport" signal. In `once` mode the signal latches on
//! the first qualifying report and the subscription is disposed right
//! away, so nothing keeps observing a section that can no longer change.
//!
//! The browser runtime (`static/motion.js`) implements the same contract
//! with `IntersectionObserver` and calls `unobserve()` on first trigger.

/// Observation parameters for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the element that must be on screen, in `[0, 1]`.
    pub threshold: f32,
    /// Latch the signal on first trigger.
    pub once: bool,
}

impl ObserverConfig {
    /// One-shot observation at the given threshold (clamped to `[0, 1]`).
    pub fn once(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            once: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subscription {
    Active,
    Disposed,
    /// The host cannot observe the viewport at all.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    config: ObserverConfig,
    subscription: Subscription,
    signal: bool,
}

impl VisibilityObserver {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            subscription: Subscription::Active,
            signal: false,
        }
    }

    /// Observer for a host without viewport observation support.
    ///
    /// Fails open: the signal is true from the start so content is never
    /// held back by a missing capability.
    pub fn unsupported(config: ObserverConfig) -> Self {
        Self {
            config,
            subscription: Subscription::Unavailable,
            signal: true,
        }
    }

    pub fn config(&self) -> ObserverConfig {
        self.config
    }

    /// Current signal value.
    pub fn signal(&self) -> bool {
        self.signal
    }

    /// True once a one-shot observer has triggered and released its
    /// subscription, or after [`dispose`](Self::dispose).
    pub fn is_disposed(&self) -> bool {
        self.subscription == Subscription::Disposed
    }

    pub fn is_observing(&self) -> bool {
        self.subscription == Subscription::Active
    }

    /// Feed the latest intersection ratio and return the resulting signal.
    ///
    /// Reports after disposal are ignored.
    pub fn report(&mut self, intersection_ratio: f32) -> bool {
        if self.subscription != Subscription::Active {
            return self.signal;
        }
        let on_screen = intersection_ratio > 0.0 && intersection_ratio >= self.config.threshold;
        if self.config.once {
            if on_screen {
                self.signal = true;
                self.subscription = Subscription::Disposed;
            }
        } else {
            self.signal = on_screen;
        }
        self.signal
    }

    /// Release the subscription (section unmounted). The signal keeps its
    /// last value.
    pub fn dispose(&mut self) {
        if self.subscription == Subscription::Active {
            self.subscription = Subscription::Disposed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_false_and_observing() {
        let observer = VisibilityObserver::new(ObserverConfig::once(0.2));
        assert!(!observer.signal());
        assert!(observer.is_observing());
    }

    #[test]
    fn below_threshold_does_not_trigger() {
        let mut observer = VisibilityObserver::new(ObserverConfig::once(0.2));
        assert!(!observer.report(0.1));
        assert!(observer.is_observing());
    }

    #[test]
    fn once_latches_and_disposes() {
        let mut observer = VisibilityObserver::new(ObserverConfig::once(0.2));
        assert!(observer.report(0.25));
        assert!(observer.is_disposed());
        // Scrolled back out of view
        assert!(observer.report(0.0));
        assert!(observer.signal());
    }

    #[test]
    fn continuous_mode_follows_reports() {
        let mut observer = VisibilityObserver::new(ObserverConfig {
            threshold: 0.5,
            once: false,
        });
        assert!(observer.report(0.6));
        assert!(!observer.report(0.1));
        assert!(observer.is_observing());
    }

    #[test]
    fn zero_threshold_needs_some_intersection() {
        let mut observer = VisibilityObserver::new(ObserverConfig::once(0.0));
        assert!(!observer.report(0.0));
        assert!(observer.report(0.01));
    }

    #[test]
    fn unsupported_fails_open() {
        let mut observer = VisibilityObserver::unsupported(ObserverConfig::once(0.2));
        assert!(observer.signal());
        assert!(!observer.is_observing());
        assert!(observer.report(0.0));
    }

    #[test]
    fn dispose_stops_observation() {
        let mut observer = VisibilityObserver::new(ObserverConfig::once(0.2));
        observer.dispose();
        assert!(observer.is_disposed());
        assert!(!observer.report(1.0));
    }

    #[test]
    fn threshold_clamped() {
        assert_eq!(ObserverConfig::once(1.5).threshold, 1.0);
        assert_eq!(ObserverConfig::once(-0.3).threshold, 0.0);
    }
}
