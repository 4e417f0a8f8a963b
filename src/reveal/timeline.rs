//! Frame-driven tween scheduler.
//!
//! A [`Timeline`] owns the set of in-flight tweens for one mounted group and
//! advances them from explicit `tick(now_ms)` calls. In the browser the
//! binding layer feeds `requestAnimationFrame` timestamps; tests feed a
//! synthetic clock. There is no interior threading: everything runs on the
//! single frame loop, so callbacks must not re-enter the timeline they were
//! scheduled on.

use super::ease::Ease;

/// Identifier of a scheduled tween, unique within its [`Timeline`].
pub type TweenId = u64;

/// How a tween behaves after its first pass completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repeat {
    /// Run once, invoke the completion callback, retire.
    Once,
    /// Ping-pong between 0 and 1 forever (idle floating loops). Never
    /// completes on its own; it lives until cancelled or finished.
    YoyoLoop,
}

/// A single value-over-time animation.
///
/// The update callback receives eased progress in `[0, 1]` (above 1 only for
/// overshooting curves); mapping progress onto opacity, transforms, or
/// counter text is the caller's business.
pub struct Tween {
    delay: f64,
    duration: f64,
    ease: Ease,
    repeat: Repeat,
    on_update: Box<dyn FnMut(f64)>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl Tween {
    pub fn new(duration: f64, ease: Ease, on_update: impl FnMut(f64) + 'static) -> Self {
        Self {
            delay: 0.0,
            duration,
            ease,
            repeat: Repeat::Once,
            on_update: Box::new(on_update),
            on_complete: None,
        }
    }

    /// Delay in milliseconds before the first update fires.
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn yoyo_loop(mut self) -> Self {
        self.repeat = Repeat::YoyoLoop;
        self
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

struct Active {
    id: TweenId,
    tween: Tween,
    /// Clock value the delay counts from. Resolved on the first tick after
    /// scheduling when the tween was added before the clock ever ran.
    base: Option<f64>,
}

/// Scheduler for one group's tweens.
#[derive(Default)]
pub struct Timeline {
    active: Vec<Active>,
    next_id: TweenId,
    now: Option<f64>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tween. Its delay counts from the current clock value, or
    /// from the first subsequent tick if the clock has not run yet.
    pub fn add(&mut self, tween: Tween) -> TweenId {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Active { id, tween, base: self.now });
        id
    }

    /// Advance the clock and every active tween.
    ///
    /// `now` is an absolute timestamp in milliseconds; ticks with a
    /// non-increasing timestamp are still applied (progress is computed from
    /// elapsed time, never from tick count).
    pub fn tick(&mut self, now: f64) {
        self.now = Some(now);
        let mut survivors = Vec::with_capacity(self.active.len());
        for mut entry in std::mem::take(&mut self.active) {
            let base = *entry.base.get_or_insert(now);
            let elapsed = now - base - entry.tween.delay;
            if elapsed < 0.0 {
                survivors.push(entry);
                continue;
            }
            match entry.tween.repeat {
                Repeat::Once => {
                    let raw = if entry.tween.duration <= 0.0 {
                        1.0
                    } else {
                        (elapsed / entry.tween.duration).min(1.0)
                    };
                    (entry.tween.on_update)(entry.tween.ease.apply(raw));
                    if raw >= 1.0 {
                        if let Some(done) = entry.tween.on_complete.take() {
                            done();
                        }
                    } else {
                        survivors.push(entry);
                    }
                }
                Repeat::YoyoLoop => {
                    let duration = entry.tween.duration.max(1.0);
                    let phase = (elapsed / duration) % 2.0;
                    let raw = if phase <= 1.0 { phase } else { 2.0 - phase };
                    (entry.tween.on_update)(entry.tween.ease.apply(raw));
                    survivors.push(entry);
                }
            }
        }
        // Tweens added by update callbacks would be lost by a plain
        // assignment; none of the callers do that, but keep them anyway.
        survivors.append(&mut self.active);
        self.active = survivors;
    }

    /// Drop a tween without invoking any of its callbacks.
    pub fn cancel(&mut self, id: TweenId) {
        self.active.retain(|entry| entry.id != id);
    }

    /// Snap a tween to its terminal state and retire it: one-shot tweens get
    /// a final `update(1.0)` plus their completion callback, yoyo loops are
    /// returned to their rest pose (`update(0.0)`).
    pub fn finish(&mut self, id: TweenId) {
        if let Some(pos) = self.active.iter().position(|entry| entry.id == id) {
            let mut entry = self.active.swap_remove(pos);
            match entry.tween.repeat {
                Repeat::Once => {
                    (entry.tween.on_update)(1.0);
                    if let Some(done) = entry.tween.on_complete.take() {
                        done();
                    }
                }
                Repeat::YoyoLoop => (entry.tween.on_update)(0.0),
            }
        }
    }

    /// Drop every tween without callbacks. Used by teardown: after this,
    /// further ticks mutate nothing.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// True when no tween is scheduled; the frame loop stops on idle.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |v| sink.borrow_mut().push(v))
    }

    #[test]
    fn linear_tween_reaches_end_and_completes() {
        let mut tl = Timeline::new();
        let (log, update) = recorder();
        let done = Rc::new(RefCell::new(false));
        let done_flag = done.clone();
        tl.add(
            Tween::new(100.0, Ease::Linear, update)
                .on_complete(move || *done_flag.borrow_mut() = true),
        );

        tl.tick(0.0);
        tl.tick(50.0);
        tl.tick(100.0);
        tl.tick(150.0);

        let log = log.borrow();
        assert_eq!(log.as_slice(), &[0.0, 0.5, 1.0]);
        assert!(*done.borrow());
        assert!(tl.is_idle());
    }

    #[test]
    fn delay_defers_first_update() {
        let mut tl = Timeline::new();
        let (log, update) = recorder();
        tl.add(Tween::new(100.0, Ease::Linear, update).delay(200.0));

        tl.tick(0.0);
        tl.tick(100.0);
        assert!(log.borrow().is_empty());
        tl.tick(250.0);
        assert_eq!(log.borrow().as_slice(), &[0.5]);
    }

    #[test]
    fn delay_counts_from_schedule_time_mid_run() {
        let mut tl = Timeline::new();
        tl.tick(1_000.0);
        let (log, update) = recorder();
        tl.add(Tween::new(100.0, Ease::Linear, update).delay(50.0));
        tl.tick(1_040.0);
        assert!(log.borrow().is_empty());
        tl.tick(1_100.0);
        assert_eq!(log.borrow().as_slice(), &[0.5]);
    }

    #[test]
    fn cancel_silences_tween() {
        let mut tl = Timeline::new();
        let (log, update) = recorder();
        let done = Rc::new(RefCell::new(false));
        let done_flag = done.clone();
        let id = tl.add(
            Tween::new(100.0, Ease::Linear, update)
                .on_complete(move || *done_flag.borrow_mut() = true),
        );

        tl.tick(0.0);
        tl.cancel(id);
        tl.tick(500.0);

        assert_eq!(log.borrow().as_slice(), &[0.0]);
        assert!(!*done.borrow(), "cancel must not run completion");
        assert!(tl.is_idle());
    }

    #[test]
    fn finish_snaps_to_end_state() {
        let mut tl = Timeline::new();
        let (log, update) = recorder();
        let id = tl.add(Tween::new(1_000.0, Ease::Linear, update));
        tl.tick(0.0);
        tl.finish(id);
        assert_eq!(*log.borrow().last().unwrap(), 1.0);
        assert!(tl.is_idle());
    }

    #[test]
    fn finish_returns_loop_to_rest() {
        let mut tl = Timeline::new();
        let (log, update) = recorder();
        let id = tl.add(Tween::new(100.0, Ease::Linear, update).yoyo_loop());
        tl.tick(0.0);
        tl.tick(50.0);
        tl.finish(id);
        assert_eq!(*log.borrow().last().unwrap(), 0.0);
    }

    #[test]
    fn yoyo_loop_ping_pongs_forever() {
        let mut tl = Timeline::new();
        let (log, update) = recorder();
        tl.add(Tween::new(100.0, Ease::Linear, update).yoyo_loop());

        for now in [0.0, 50.0, 100.0, 150.0, 200.0, 250.0] {
            tl.tick(now);
        }
        assert_eq!(log.borrow().as_slice(), &[0.0, 0.5, 1.0, 0.5, 0.0, 0.5]);
        assert_eq!(tl.len(), 1, "loop never retires on its own");
    }

    #[test]
    fn clear_stops_all_mutation() {
        let mut tl = Timeline::new();
        let (log, update) = recorder();
        tl.add(Tween::new(100.0, Ease::Linear, update));
        tl.tick(0.0);
        let seen = log.borrow().len();
        tl.clear();
        tl.tick(50.0);
        tl.tick(100.0);
        assert_eq!(log.borrow().len(), seen);
        assert!(tl.is_idle());
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tl = Timeline::new();
        let (log, update) = recorder();
        tl.add(Tween::new(0.0, Ease::PowerOut(2), update));
        tl.tick(42.0);
        assert_eq!(log.borrow().as_slice(), &[1.0]);
        assert!(tl.is_idle());
    }

    #[test]
    fn ids_are_unique() {
        let mut tl = Timeline::new();
        let a = tl.add(Tween::new(10.0, Ease::Linear, |_| {}));
        let b = tl.add(Tween::new(10.0, Ease::Linear, |_| {}));
        tl.tick(100.0);
        let c = tl.add(Tween::new(10.0, Ease::Linear, |_| {}));
        assert!(a != b && b != c && a != c);
    }
}
