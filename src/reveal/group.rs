//! Staggered reveal groups and idle floating loops.
//!
//! A group is an ordered set of visual targets sharing one trigger. On
//! `play` every member tweens from its hidden pose to the visible pose,
//! member `i` starting `i * stagger` after the group. Declaration order is
//! the stagger order; it never changes after construction.

use std::cell::RefCell;
use std::rc::Rc;

use super::ease::{lerp, Ease};
use super::timeline::{Timeline, Tween, TweenId};

/// Pose of one animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl VisualState {
    /// The resting, fully revealed pose.
    pub fn visible() -> Self {
        Self { x: 0.0, y: 0.0, opacity: 1.0, scale: 1.0, rotation: 0.0 }
    }

    /// Hidden entrance pose: pushed down by `y` pixels, faded out.
    pub fn offset_y(y: f64) -> Self {
        Self { y, opacity: 0.0, ..Self::visible() }
    }

    /// Hidden entrance pose pushed sideways (persona detail columns).
    pub fn offset_x(x: f64) -> Self {
        Self { x, opacity: 0.0, ..Self::visible() }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, deg: f64) -> Self {
        self.rotation = deg;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Interpolate between two poses at eased progress `t`.
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            opacity: lerp(self.opacity, to.opacity, t).clamp(0.0, 1.0),
            scale: lerp(self.scale, to.scale, t),
            rotation: lerp(self.rotation, to.rotation, t),
        }
    }
}

/// Receives pose updates for one member. The DOM layer writes style
/// properties; tests record.
pub type StateSink = Rc<RefCell<dyn FnMut(&VisualState)>>;

pub fn sink(f: impl FnMut(&VisualState) + 'static) -> StateSink {
    Rc::new(RefCell::new(f))
}

/// Reveal parameters shared by a group, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct RevealConfig {
    pub from: VisualState,
    pub duration: f64,
    pub stagger: f64,
    /// Delay before the whole group starts, on top of per-member stagger.
    pub delay: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            from: VisualState::offset_y(40.0),
            duration: 800.0,
            stagger: 100.0,
            delay: 0.0,
            ease: Ease::PowerOut(2),
        }
    }
}

/// Ordered set of targets revealed together.
pub struct RevealGroup {
    config: RevealConfig,
    members: Vec<StateSink>,
    tweens: Vec<TweenId>,
    played: bool,
}

impl RevealGroup {
    pub fn new(config: RevealConfig, members: Vec<StateSink>) -> Self {
        Self { config, members, tweens: Vec::new(), played: false }
    }

    /// Apply the hidden pose to every member. Called at mount so elements
    /// start invisible instead of flashing in before the first trigger.
    pub fn prime(&mut self) {
        for member in &self.members {
            (member.borrow_mut())(&self.config.from);
        }
    }

    /// Schedule the forward animation. A group plays forward at most once;
    /// repeat calls are no-ops until the group is re-armed by a new mount.
    pub fn play(&mut self, timeline: &mut Timeline) {
        if self.played {
            return;
        }
        self.played = true;
        let from = self.config.from;
        let to = VisualState::visible();
        for (index, member) in self.members.iter().enumerate() {
            let member = member.clone();
            let id = timeline.add(
                Tween::new(self.config.duration, self.config.ease, move |t| {
                    (member.borrow_mut())(&from.lerp(&to, t));
                })
                .delay(self.config.delay + index as f64 * self.config.stagger),
            );
            self.tweens.push(id);
        }
    }

    /// Snap every unfinished member straight to the visible pose. Used when
    /// the group is interrupted mid-flight so nothing is left half-revealed.
    pub fn interrupt(&mut self, timeline: &mut Timeline) {
        for id in self.tweens.drain(..) {
            timeline.finish(id);
        }
    }

    /// Cancel the group's tweens outright without touching member state.
    /// Teardown path: after this, ticking the timeline mutates nothing.
    pub fn release(&mut self, timeline: &mut Timeline) {
        for id in self.tweens.drain(..) {
            timeline.cancel(id);
        }
    }

    /// Allow another `play` after a leave-back has re-hidden the group.
    pub fn rearm(&mut self) {
        self.played = false;
    }
}

/// Fixed permutation of `0..count`, drawn once per activation from the
/// supplied random source (Fisher-Yates). The floating loops use it so
/// "random" stagger stays coherent across every repeat of the loop.
pub fn shuffled_order(count: usize, rng: &mut impl FnMut() -> f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..count).collect();
    for i in (1..count).rev() {
        let j = ((rng() * (i + 1) as f64) as usize).min(i);
        order.swap(i, j);
    }
    order
}

/// Idle floating parameters: a gentle yoyo bob, total stagger spread over
/// the whole group ("amount" semantics, random order).
#[derive(Debug, Clone, Copy)]
pub struct FloatConfig {
    /// Peak upward displacement in pixels.
    pub amplitude: f64,
    /// Half-cycle duration in milliseconds.
    pub duration: f64,
    /// Total delay spread distributed across members.
    pub spread: f64,
}

/// Receives the current vertical bob offset for one floating member. The
/// channel carries nothing but the offset, so a floating loop cannot touch
/// opacity, scale, or anything a reveal group owns.
pub type BobSink = Rc<RefCell<dyn FnMut(f64)>>;

pub fn bob_sink(f: impl FnMut(f64) + 'static) -> BobSink {
    Rc::new(RefCell::new(f))
}

/// Handle over a running set of floating loops.
pub struct FloatLoop {
    tweens: Vec<TweenId>,
}

impl FloatLoop {
    pub fn start(
        members: &[BobSink],
        config: FloatConfig,
        timeline: &mut Timeline,
        rng: &mut impl FnMut() -> f64,
    ) -> Self {
        let order = shuffled_order(members.len(), rng);
        let step = if members.len() > 1 {
            config.spread / (members.len() - 1) as f64
        } else {
            0.0
        };
        let mut tweens = Vec::with_capacity(members.len());
        for (slot, &index) in order.iter().enumerate() {
            let member = members[index].clone();
            let amplitude = config.amplitude;
            let id = timeline.add(
                Tween::new(config.duration, Ease::SineInOut, move |t| {
                    (member.borrow_mut())(-amplitude * t);
                })
                .delay(slot as f64 * step)
                .yoyo_loop(),
            );
            tweens.push(id);
        }
        Self { tweens }
    }

    /// Cancel the loops; members keep whatever pose they were last given.
    pub fn stop(&mut self, timeline: &mut Timeline) {
        for id in self.tweens.drain(..) {
            timeline.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_member() -> (Rc<RefCell<Vec<VisualState>>>, StateSink) {
        let log: Rc<RefCell<Vec<VisualState>>> = Rc::new(RefCell::new(Vec::new()));
        let writer = log.clone();
        (log, sink(move |state: &VisualState| writer.borrow_mut().push(*state)))
    }

    fn group_of(n: usize, config: RevealConfig) -> (Vec<Rc<RefCell<Vec<VisualState>>>>, RevealGroup) {
        let mut logs = Vec::new();
        let mut sinks = Vec::new();
        for _ in 0..n {
            let (log, s) = recording_member();
            logs.push(log);
            sinks.push(s);
        }
        (logs, RevealGroup::new(config, sinks))
    }

    #[test]
    fn prime_applies_hidden_pose() {
        let config = RevealConfig::default();
        let (logs, mut group) = group_of(2, config);
        group.prime();
        for log in &logs {
            let state = *log.borrow().last().unwrap();
            assert_eq!(state.opacity, 0.0);
            assert_eq!(state.y, 40.0);
        }
    }

    #[test]
    fn members_end_fully_visible_after_duration() {
        let config = RevealConfig { duration: 800.0, stagger: 100.0, ..Default::default() };
        let (logs, mut group) = group_of(3, config);
        let mut tl = Timeline::new();
        group.play(&mut tl);

        let mut now = 0.0;
        while now <= 1_100.0 {
            tl.tick(now);
            now += 16.0;
        }

        for log in &logs {
            let state = *log.borrow().last().unwrap();
            assert!((state.opacity - 1.0).abs() < 1e-9);
            assert!(state.y.abs() < 1e-9);
            assert!(state.x.abs() < 1e-9);
        }
        assert!(tl.is_idle(), "all reveal tweens retire");
    }

    #[test]
    fn stagger_order_matches_declaration_order() {
        let config = RevealConfig { duration: 800.0, stagger: 100.0, ..Default::default() };
        let (logs, mut group) = group_of(3, config);
        let mut tl = Timeline::new();
        group.play(&mut tl);

        tl.tick(0.0);
        tl.tick(50.0);
        // 50ms in: only member 0 has moved past its initial pose.
        assert!(logs[0].borrow().len() >= 2);
        assert!(logs[1].borrow().is_empty());
        assert!(logs[2].borrow().is_empty());

        tl.tick(120.0);
        assert!(!logs[1].borrow().is_empty(), "member 1 starts after 100ms");
        assert!(logs[2].borrow().is_empty(), "member 2 waits for 200ms");

        tl.tick(210.0);
        assert!(!logs[2].borrow().is_empty());
    }

    #[test]
    fn play_is_one_shot() {
        let config = RevealConfig::default();
        let (_, mut group) = group_of(2, config);
        let mut tl = Timeline::new();
        group.play(&mut tl);
        let scheduled = tl.len();
        group.play(&mut tl);
        assert_eq!(tl.len(), scheduled, "second play schedules nothing");
    }

    #[test]
    fn rearm_allows_a_second_play() {
        let config = RevealConfig::default();
        let (_, mut group) = group_of(2, config);
        let mut tl = Timeline::new();
        group.play(&mut tl);
        group.release(&mut tl);
        group.rearm();
        group.play(&mut tl);
        assert_eq!(tl.len(), 2, "re-armed group schedules again");
    }

    #[test]
    fn interrupt_snaps_everyone_to_final_pose() {
        let config = RevealConfig { duration: 800.0, stagger: 200.0, ..Default::default() };
        let (logs, mut group) = group_of(3, config);
        let mut tl = Timeline::new();
        group.play(&mut tl);
        tl.tick(0.0);
        tl.tick(100.0);

        group.interrupt(&mut tl);

        for log in &logs {
            let state = *log.borrow().last().unwrap();
            assert!((state.opacity - 1.0).abs() < 1e-9, "no member left half-revealed");
            assert!(state.y.abs() < 1e-9);
        }
        assert!(tl.is_idle());
    }

    #[test]
    fn release_stops_future_mutation() {
        let config = RevealConfig::default();
        let (logs, mut group) = group_of(2, config);
        let mut tl = Timeline::new();
        group.play(&mut tl);
        tl.tick(0.0);
        let counts: Vec<usize> = logs.iter().map(|l| l.borrow().len()).collect();

        group.release(&mut tl);
        tl.tick(400.0);
        tl.tick(800.0);

        for (log, before) in logs.iter().zip(counts) {
            assert_eq!(log.borrow().len(), before, "no updates after release");
        }
    }

    #[test]
    fn shuffled_order_is_a_permutation() {
        let mut rng = {
            let mut state = 0.123_f64;
            move || {
                state = (state * 9_301.0 + 49_297.0) % 233_280.0 / 233_280.0;
                state
            }
        };
        let order = shuffled_order(8, &mut rng);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn shuffled_order_is_stable_for_a_fixed_source() {
        let fixed = || {
            let mut vals = [0.9, 0.1, 0.5, 0.3, 0.7].into_iter().cycle();
            move || vals.next().unwrap()
        };
        let (mut a, mut b) = (fixed(), fixed());
        assert_eq!(shuffled_order(5, &mut a), shuffled_order(5, &mut b));
    }

    fn recording_bob() -> (Rc<RefCell<Vec<f64>>>, BobSink) {
        let log: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
        let writer = log.clone();
        (log, bob_sink(move |y| writer.borrow_mut().push(y)))
    }

    #[test]
    fn float_loop_bobs_and_stops_cleanly() {
        let (log, member) = recording_bob();
        let mut tl = Timeline::new();
        let mut rng = || 0.0;
        let config = FloatConfig { amplitude: 3.0, duration: 100.0, spread: 0.0 };
        let mut float = FloatLoop::start(&[member], config, &mut tl, &mut rng);

        tl.tick(0.0);
        tl.tick(100.0);
        let peak = *log.borrow().last().unwrap();
        assert!((peak + 3.0).abs() < 1e-9, "rises to -amplitude at half cycle");

        float.stop(&mut tl);
        let seen = log.borrow().len();
        tl.tick(200.0);
        assert_eq!(log.borrow().len(), seen);
        assert!(tl.is_idle());
    }

    #[test]
    fn float_loop_leaves_primed_reveal_members_hidden() {
        // A section floats decorations on the shared timeline while its
        // reveal group is still primed hidden; the bob channel must not be
        // able to reveal anything.
        let (member_log, mut group) = group_of(1, RevealConfig::default());
        group.prime();
        let primed = *member_log[0].borrow().last().unwrap();
        assert_eq!(primed.opacity, 0.0);

        let (bob_log, bob) = recording_bob();
        let mut tl = Timeline::new();
        let mut rng = || 0.0;
        let config = FloatConfig { amplitude: 3.0, duration: 100.0, spread: 0.0 };
        let _float = FloatLoop::start(&[bob], config, &mut tl, &mut rng);
        tl.tick(0.0);
        tl.tick(50.0);

        assert_eq!(member_log[0].borrow().len(), 1, "float wrote nothing to the member");
        assert_eq!(*member_log[0].borrow().last().unwrap(), primed);
        for y in bob_log.borrow().iter() {
            assert!((-3.0..=0.0).contains(y), "bob stays within amplitude, got {y}");
        }
    }
}
