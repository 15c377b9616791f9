/// Lifecycle of the one-shot activation gate. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    /// Not watching yet
    Pending,
    /// Watching the container's visibility
    Observing,
    /// Bodies released; observer detached for good
    Fired,
}

impl TriggerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerState::Pending => "pending",
            TriggerState::Observing => "observing",
            TriggerState::Fired => "fired",
        }
    }
}

/// Releases the tracked bodies the first time enough of the container is visible
pub struct ActivationTrigger {
    state: TriggerState,
    /// Visible area ratio in [0, 1]
    threshold: f64,
}

impl ActivationTrigger {
    pub fn new(threshold: f64) -> Self {
        Self { state: TriggerState::Pending, threshold }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn has_fired(&self) -> bool {
        self.state == TriggerState::Fired
    }

    /// `Pending -> Observing`
    pub fn arm(&mut self) -> bool {
        if self.state != TriggerState::Pending {
            return false;
        }
        self.state = TriggerState::Observing;
        true
    }

    /// `Observing -> Fired` once `ratio` reaches the threshold.
    /// Signals in any other state are ignored.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state != TriggerState::Observing || !(ratio >= self.threshold) {
            return false;
        }
        self.state = TriggerState::Fired;
        true
    }

    /// Fallback when visibility cannot be observed: fire without a signal.
    pub fn fire_now(&mut self) -> bool {
        if self.state == TriggerState::Fired {
            return false;
        }
        self.state = TriggerState::Fired;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_before_arming_are_ignored() {
        let mut t = ActivationTrigger::new(0.1);
        assert!(!t.observe(1.0));
        assert_eq!(t.state(), TriggerState::Pending);
    }

    #[test]
    fn fires_once_at_threshold() {
        let mut t = ActivationTrigger::new(0.1);
        assert!(t.arm());
        assert!(!t.arm());
        assert!(!t.observe(0.05));
        assert_eq!(t.state(), TriggerState::Observing);
        assert!(t.observe(0.1));
        assert_eq!(t.state(), TriggerState::Fired);
        assert!(!t.observe(1.0));
        assert!(!t.fire_now());
        assert!(!t.arm());
        assert_eq!(t.state(), TriggerState::Fired);
    }

    #[test]
    fn nan_ratio_never_fires() {
        let mut t = ActivationTrigger::new(0.0);
        t.arm();
        assert!(!t.observe(f64::NAN));
        assert!(t.observe(0.0));
    }

    #[test]
    fn fallback_fires_from_pending() {
        let mut t = ActivationTrigger::new(0.1);
        assert!(t.fire_now());
        assert!(t.has_fired());
    }
}
