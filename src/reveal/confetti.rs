//! One-shot confetti burst for the draft-sent vignette.
//!
//! Particles are created, flung outward on randomized trajectories while
//! fading, then destroyed. All randomness is drawn once at creation; the
//! flight itself is deterministic.

use super::ease::{lerp, Ease};
use super::timeline::{Timeline, Tween, TweenId};

/// Particle palette, in spawn rotation order.
pub const COLORS: [&str; 4] = ["#6699FF", "#22C55E", "#FACC15", "#EF4444"];

/// Flight time of one particle, in milliseconds.
pub const FLIGHT_DURATION: f64 = 2_000.0;
/// Launch delay between consecutive particles.
pub const LAUNCH_STAGGER: f64 = 50.0;
/// Spread of the random trajectory endpoints, in pixels.
const SCATTER: f64 = 200.0;

/// Immutable trajectory of one particle, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal displacement at the end of flight.
    pub dx: f64,
    /// Vertical displacement at the end of flight.
    pub dy: f64,
    /// Total rotation over the flight, in degrees.
    pub rotation: f64,
    /// Launch delay from the burst start, in milliseconds.
    pub delay: f64,
    pub color: &'static str,
}

/// Momentary pose of a particle along its flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl ParticleSpec {
    /// Pose at eased flight progress `t` in `[0, 1]`.
    pub fn frame(&self, t: f64) -> ParticleFrame {
        ParticleFrame {
            x: lerp(0.0, self.dx, t),
            y: lerp(0.0, self.dy, t),
            rotation: lerp(0.0, self.rotation, t),
            opacity: (1.0 - t).clamp(0.0, 1.0),
        }
    }
}

/// Draw `count` trajectories from the random source. Endpoints scatter
/// within a centered square of `SCATTER` pixels per axis.
pub fn burst_specs(count: usize, rng: &mut impl FnMut() -> f64) -> Vec<ParticleSpec> {
    (0..count)
        .map(|i| ParticleSpec {
            dx: (rng() - 0.5) * SCATTER,
            dy: (rng() - 0.5) * SCATTER,
            rotation: rng() * 360.0,
            delay: i as f64 * LAUNCH_STAGGER,
            color: COLORS[i % COLORS.len()],
        })
        .collect()
}

/// Schedule one particle's flight. `sink` receives every frame; `on_done`
/// fires once when the flight ends, so the caller can destroy the node.
pub fn schedule_particle(
    spec: ParticleSpec,
    timeline: &mut Timeline,
    mut sink: impl FnMut(&ParticleFrame) + 'static,
    on_done: impl FnOnce() + 'static,
) -> TweenId {
    timeline.add(
        Tween::new(FLIGHT_DURATION, Ease::PowerOut(2), move |t| sink(&spec.frame(t)))
            .delay(spec.delay)
            .on_complete(on_done),
    )
}

/// Duration of the bridge line-draw sweep that precedes its burst.
pub const DRAW_DURATION: f64 = 2_500.0;

/// Sweep a dashed stroke of `length` into view: the sink receives the
/// remaining dash offset, from `length` (nothing drawn) down to exactly 0.0.
pub fn schedule_line_draw(
    length: f64,
    timeline: &mut Timeline,
    mut sink: impl FnMut(f64) + 'static,
) -> TweenId {
    timeline.add(Tween::new(DRAW_DURATION, Ease::PowerInOut(2), move |t| {
        sink(length * (1.0 - t));
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_rng() -> impl FnMut() -> f64 {
        let mut state = 0.37_f64;
        move || {
            state = (state * 9_301.0 + 49_297.0) % 233_280.0 / 233_280.0;
            state
        }
    }

    #[test]
    fn burst_has_exact_count_and_staggered_delays() {
        let mut rng = counting_rng();
        let specs = burst_specs(15, &mut rng);
        assert_eq!(specs.len(), 15);
        for (i, spec) in specs.iter().enumerate() {
            assert_eq!(spec.delay, i as f64 * LAUNCH_STAGGER);
            assert!(spec.dx.abs() <= 100.0 && spec.dy.abs() <= 100.0);
            assert!((0.0..360.0).contains(&spec.rotation));
            assert!(COLORS.contains(&spec.color));
        }
    }

    #[test]
    fn randomness_is_fixed_at_creation() {
        let mut rng = counting_rng();
        let spec = burst_specs(1, &mut rng)[0];
        let early = spec.frame(0.25);
        assert_eq!(spec.frame(0.25), early, "same progress, same pose");
        let end = spec.frame(1.0);
        assert!((end.x - spec.dx).abs() < 1e-9);
        assert!((end.y - spec.dy).abs() < 1e-9);
        assert!(end.opacity.abs() < 1e-9, "fully faded at flight end");
    }

    #[test]
    fn every_particle_is_destroyed_after_the_burst() {
        let mut rng = counting_rng();
        let specs = burst_specs(15, &mut rng);
        let total = specs.len();
        let mut tl = Timeline::new();
        let destroyed = Rc::new(RefCell::new(0usize));
        for spec in specs {
            let destroyed = destroyed.clone();
            schedule_particle(spec, &mut tl, |_| {}, move || *destroyed.borrow_mut() += 1);
        }

        let full = FLIGHT_DURATION + (total - 1) as f64 * LAUNCH_STAGGER;
        let mut now = 0.0;
        while now <= full + 100.0 {
            tl.tick(now);
            now += 16.0;
        }

        assert_eq!(*destroyed.borrow(), total);
        assert!(tl.is_idle(), "no particles outlive the burst");
    }

    #[test]
    fn line_draw_sweeps_to_a_fully_drawn_stroke() {
        let mut tl = Timeline::new();
        let offsets: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
        let log = offsets.clone();
        schedule_line_draw(210.0, &mut tl, move |o| log.borrow_mut().push(o));

        let mut now = 0.0;
        while now <= DRAW_DURATION + 50.0 {
            tl.tick(now);
            now += 25.0;
        }

        let offsets = offsets.borrow();
        assert_eq!(*offsets.first().unwrap(), 210.0, "starts fully dashed out");
        assert_eq!(*offsets.last().unwrap(), 0.0, "ends fully drawn");
        for pair in offsets.windows(2) {
            assert!(pair[1] <= pair[0], "offset only ever shrinks");
        }
        assert!(tl.is_idle(), "the sweep retires");
    }

    #[test]
    fn particles_stay_put_until_their_launch_delay() {
        let mut rng = counting_rng();
        let spec = burst_specs(3, &mut rng)[2];
        let mut tl = Timeline::new();
        let frames: Rc<RefCell<Vec<ParticleFrame>>> = Rc::new(RefCell::new(Vec::new()));
        let log = frames.clone();
        schedule_particle(spec, &mut tl, move |f| log.borrow_mut().push(*f), || {});

        tl.tick(0.0);
        tl.tick(60.0);
        assert!(frames.borrow().is_empty(), "third particle launches at 100ms");
        tl.tick(110.0);
        assert!(!frames.borrow().is_empty());
    }
}
