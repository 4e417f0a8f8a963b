//! Replayable percentage counters with matching progress bars.
//!
//! The partner-results panel counts each metric up from zero whenever it
//! scrolls into view and snaps everything back to zero when it scrolls back
//! out above the threshold, so the count-up replays on every visit.

use std::cell::RefCell;
use std::rc::Rc;

use super::ease::Ease;
use super::timeline::{Timeline, Tween, TweenId};

/// Count-up time for every metric, in milliseconds.
pub const COUNT_DURATION: f64 = 2_000.0;
/// Extra delay per metric index, so the columns fill one after another.
pub const COUNT_STAGGER: f64 = 300.0;

/// One frame of a metric's visual state.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDisplay {
    /// Rounded integer readout, always of the form `"42%"`.
    pub text: String,
    /// Bar fill as a fraction of the full track, in `[0, 1]`.
    pub bar_frac: f64,
}

impl MetricDisplay {
    fn at(value: f64) -> Self {
        Self {
            text: format!("{}%", value.round() as i64),
            bar_frac: (value / 100.0).clamp(0.0, 1.0),
        }
    }

    fn zero() -> Self {
        Self::at(0.0)
    }
}

/// Receives display updates for one metric.
pub type MetricSink = Rc<RefCell<dyn FnMut(&MetricDisplay)>>;

pub fn metric_sink(f: impl FnMut(&MetricDisplay) + 'static) -> MetricSink {
    Rc::new(RefCell::new(f))
}

/// One percentage metric bound to its sink.
pub struct Metric {
    /// Final percentage, e.g. `85.0` renders as `"85%"`.
    pub target: f64,
    pub sink: MetricSink,
}

/// A replayable group of metrics sharing one trigger.
pub struct MetricPanel {
    metrics: Vec<Metric>,
    tweens: Vec<TweenId>,
    played: bool,
}

impl MetricPanel {
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self { metrics, tweens: Vec::new(), played: false }
    }

    /// Show every metric at zero. Called at mount and by [`reset`].
    ///
    /// [`reset`]: MetricPanel::reset
    pub fn prime(&mut self) {
        let zero = MetricDisplay::zero();
        for metric in &self.metrics {
            (metric.sink.borrow_mut())(&zero);
        }
    }

    /// Start the count-up. A no-op while already counting or settled; the
    /// panel re-arms only through [`reset`].
    ///
    /// [`reset`]: MetricPanel::reset
    pub fn play(&mut self, timeline: &mut Timeline) {
        if self.played {
            return;
        }
        self.played = true;
        for (index, metric) in self.metrics.iter().enumerate() {
            let sink = metric.sink.clone();
            let target = metric.target;
            let id = timeline.add(
                Tween::new(COUNT_DURATION, Ease::PowerOut(2), move |t| {
                    // Eased progress stays in [0, 1], so the value never
                    // exceeds its target.
                    (sink.borrow_mut())(&MetricDisplay::at(target * t));
                })
                .delay(index as f64 * COUNT_STAGGER),
            );
            self.tweens.push(id);
        }
    }

    /// Abandon any in-flight count and snap every metric back to zero in
    /// the same frame. The panel can play again afterwards.
    pub fn reset(&mut self, timeline: &mut Timeline) {
        for id in self.tweens.drain(..) {
            timeline.cancel(id);
        }
        self.prime();
        self.played = false;
    }

    pub fn is_played(&self) -> bool {
        self.played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_metric(target: f64) -> (Rc<RefCell<Vec<MetricDisplay>>>, Metric) {
        let log: Rc<RefCell<Vec<MetricDisplay>>> = Rc::new(RefCell::new(Vec::new()));
        let writer = log.clone();
        let sink = metric_sink(move |d: &MetricDisplay| writer.borrow_mut().push(d.clone()));
        (log, Metric { target, sink })
    }

    fn run(tl: &mut Timeline, from: f64, to: f64) {
        let mut now = from;
        while now <= to {
            tl.tick(now);
            now += 16.0;
        }
    }

    #[test]
    fn counts_land_exactly_on_target() {
        let (a, ma) = recording_metric(85.0);
        let (b, mb) = recording_metric(92.0);
        let (c, mc) = recording_metric(78.0);
        let mut panel = MetricPanel::new(vec![ma, mb, mc]);
        let mut tl = Timeline::new();
        panel.play(&mut tl);
        run(&mut tl, 0.0, COUNT_DURATION + 2.0 * COUNT_STAGGER + 100.0);

        assert_eq!(a.borrow().last().unwrap().text, "85%");
        assert_eq!(b.borrow().last().unwrap().text, "92%");
        assert_eq!(c.borrow().last().unwrap().text, "78%");
        assert!((a.borrow().last().unwrap().bar_frac - 0.85).abs() < 1e-9);
        assert!(tl.is_idle());
    }

    #[test]
    fn readout_is_integer_rounded_every_frame() {
        let (log, metric) = recording_metric(85.0);
        let mut panel = MetricPanel::new(vec![metric]);
        let mut tl = Timeline::new();
        panel.play(&mut tl);
        run(&mut tl, 0.0, COUNT_DURATION);

        for frame in log.borrow().iter() {
            let digits = frame.text.strip_suffix('%').unwrap();
            let value: i64 = digits.parse().expect("readout is a whole number");
            assert!((0..=85).contains(&value));
        }
        assert!(log.borrow().len() > 10, "counter ticks continuously");
    }

    #[test]
    fn later_metrics_start_after_their_stagger() {
        let (first, ma) = recording_metric(50.0);
        let (second, mb) = recording_metric(50.0);
        let mut panel = MetricPanel::new(vec![ma, mb]);
        let mut tl = Timeline::new();
        panel.play(&mut tl);

        tl.tick(0.0);
        tl.tick(200.0);
        assert!(!first.borrow().is_empty());
        assert!(second.borrow().is_empty(), "second column waits 300ms");
        tl.tick(320.0);
        assert!(!second.borrow().is_empty());
    }

    #[test]
    fn play_is_idempotent_until_reset() {
        let (_, metric) = recording_metric(85.0);
        let mut panel = MetricPanel::new(vec![metric]);
        let mut tl = Timeline::new();
        panel.play(&mut tl);
        let scheduled = tl.len();
        panel.play(&mut tl);
        panel.play(&mut tl);
        assert_eq!(tl.len(), scheduled);
    }

    #[test]
    fn reset_mid_flight_snaps_to_zero_and_rearms() {
        let (log, metric) = recording_metric(85.0);
        let mut panel = MetricPanel::new(vec![metric]);
        let mut tl = Timeline::new();
        panel.play(&mut tl);
        tl.tick(0.0);
        tl.tick(500.0);
        assert_ne!(log.borrow().last().unwrap().text, "0%");

        panel.reset(&mut tl);
        assert_eq!(log.borrow().last().unwrap().text, "0%");
        assert_eq!(log.borrow().last().unwrap().bar_frac, 0.0);
        assert!(tl.is_idle(), "cancelled counts never resume");

        panel.play(&mut tl);
        run(&mut tl, 1_000.0, 1_000.0 + COUNT_DURATION + 100.0);
        assert_eq!(log.borrow().last().unwrap().text, "85%");
    }

    #[test]
    fn reset_before_play_is_harmless() {
        let (log, metric) = recording_metric(40.0);
        let mut panel = MetricPanel::new(vec![metric]);
        let mut tl = Timeline::new();
        panel.reset(&mut tl);
        assert_eq!(log.borrow().last().unwrap().text, "0%");
        assert!(!panel.is_played());
    }
}
