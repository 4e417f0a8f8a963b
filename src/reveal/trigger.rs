//! Viewport-threshold trigger state machine.
//!
//! The scroll listener reduces each trigger to one boolean per observation:
//! is the reference element's top edge above its activation line right now.
//! [`TriggerGate`] turns that stream into discrete crossings, guaranteeing
//! at most one `Enter` per downward crossing and, for replayable gates only,
//! a `LeaveBack` when the element scrolls back out upward.

/// Discrete transition produced by a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The activation line was crossed scrolling down.
    Enter,
    /// The activation line was recrossed scrolling up, on a replayable gate.
    LeaveBack,
}

/// Activation line expressed as a fraction of viewport height, parsed from
/// the GSAP-style `"top 85%"` notation the sections declare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartOffset {
    viewport_frac: f64,
}

impl StartOffset {
    /// Parse `"top 85%"` (or just `"85%"`). Returns `None` for anything
    /// malformed; callers fall back to [`StartOffset::default`].
    pub fn parse(s: &str) -> Option<Self> {
        let pct = s.trim().strip_prefix("top").unwrap_or(s).trim().strip_suffix('%')?;
        let value: f64 = pct.trim().parse().ok()?;
        if !(0.0..=200.0).contains(&value) {
            return None;
        }
        Some(Self { viewport_frac: value / 100.0 })
    }

    /// True when an element whose top edge sits `top_px` below the viewport
    /// top has crossed the activation line.
    pub fn crossed(self, top_px: f64, viewport_height: f64) -> bool {
        top_px <= viewport_height * self.viewport_frac
    }
}

impl Default for StartOffset {
    /// `"top 85%"`, the most common entrance threshold in the sections.
    fn default() -> Self {
        Self { viewport_frac: 0.85 }
    }
}

/// Direction-aware one-shot latch for a single trigger.
#[derive(Debug, Clone)]
pub struct TriggerGate {
    replay: bool,
    fired: bool,
}

impl TriggerGate {
    /// `replay: false` latches permanently after the first `Enter` (content
    /// stays revealed); `replay: true` re-arms on `LeaveBack` (metric
    /// panels that reset and refill).
    pub fn new(replay: bool) -> Self {
        Self { replay, fired: false }
    }

    /// Feed one observation of the crossed/not-crossed state. Repeated
    /// observations on the same side of the line never produce duplicate
    /// crossings, so scroll jitter around the threshold is absorbed here.
    pub fn observe(&mut self, past_line: bool) -> Option<Crossing> {
        if past_line {
            if self.fired {
                return None;
            }
            self.fired = true;
            Some(Crossing::Enter)
        } else if self.fired && self.replay {
            self.fired = false;
            Some(Crossing::LeaveBack)
        } else {
            None
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_gsap_notation() {
        assert_eq!(StartOffset::parse("top 85%"), Some(StartOffset { viewport_frac: 0.85 }));
        assert_eq!(StartOffset::parse("top 50%"), Some(StartOffset { viewport_frac: 0.5 }));
        assert_eq!(StartOffset::parse("90%"), Some(StartOffset { viewport_frac: 0.9 }));
        assert_eq!(StartOffset::parse("top"), None);
        assert_eq!(StartOffset::parse("bottom 85"), None);
        assert_eq!(StartOffset::parse(""), None);
    }

    #[test]
    fn crossed_compares_against_viewport_fraction() {
        let start = StartOffset::parse("top 80%").unwrap();
        // Viewport 1000px tall: line sits at 800px.
        assert!(start.crossed(799.0, 1000.0));
        assert!(start.crossed(800.0, 1000.0));
        assert!(!start.crossed(801.0, 1000.0));
    }

    #[test]
    fn enter_fires_exactly_once_per_crossing() {
        let mut gate = TriggerGate::new(false);
        assert_eq!(gate.observe(false), None);
        assert_eq!(gate.observe(true), Some(Crossing::Enter));
        // Jitter around the line within following frames.
        assert_eq!(gate.observe(true), None);
        assert_eq!(gate.observe(true), None);
    }

    #[test]
    fn non_replayable_gate_latches_forever() {
        let mut gate = TriggerGate::new(false);
        gate.observe(true);
        assert_eq!(gate.observe(false), None, "no leave-back without replay");
        assert_eq!(gate.observe(true), None, "revealed content never replays");
        assert!(gate.has_fired());
    }

    #[test]
    fn replayable_gate_rearms_on_leave_back() {
        let mut gate = TriggerGate::new(true);
        assert_eq!(gate.observe(true), Some(Crossing::Enter));
        assert_eq!(gate.observe(false), Some(Crossing::LeaveBack));
        assert_eq!(gate.observe(false), None, "leave-back fires once");
        assert_eq!(gate.observe(true), Some(Crossing::Enter));
    }

    #[test]
    fn leave_back_requires_prior_enter() {
        let mut gate = TriggerGate::new(true);
        assert_eq!(gate.observe(false), None);
        assert_eq!(gate.observe(false), None);
    }
}
