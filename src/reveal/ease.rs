//! Easing curves for reveal animations.
//!
//! Maps linear progress in `[0, 1]` to eased progress. The set mirrors the
//! curves the sections actually request: power-out ramps for entrances,
//! sine in-out for idle floating loops, back-out for the draft popup.

/// Easing curve applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    /// Fast start, decelerating: `1 - (1-t)^n`. `PowerOut(2)` is the
    /// workhorse entrance curve, `PowerOut(3)` a slightly snappier one.
    PowerOut(u32),
    /// Slow start and end, fast middle.
    PowerInOut(u32),
    /// Sinusoidal in-out, used by the yoyo floating loops.
    SineInOut,
    /// Overshoots the end value and settles back. `overshoot` controls the
    /// amplitude; the popup uses 1.7.
    BackOut { overshoot: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Ease::PowerOut(2)
    }
}

impl Ease {
    /// Evaluate the curve at progress `t`, clamped to `[0, 1]` on input.
    ///
    /// `BackOut` may return values above 1.0 mid-curve; every curve returns
    /// exactly 0.0 at `t = 0` and 1.0 at `t = 1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n.max(1) as i32),
            Ease::PowerInOut(n) => {
                let n = n.max(1) as i32;
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(n)
                } else {
                    1.0 - 0.5 * (2.0 - 2.0 * t).powi(n)
                }
            }
            Ease::SineInOut => 0.5 - 0.5 * (std::f64::consts::PI * t).cos(),
            Ease::BackOut { overshoot } => {
                let inv = t - 1.0;
                1.0 + inv * inv * ((overshoot + 1.0) * inv + overshoot)
            }
        }
    }
}

/// Linear interpolation between two values.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Ease; 5] = [
        Ease::Linear,
        Ease::PowerOut(2),
        Ease::PowerInOut(2),
        Ease::SineInOut,
        Ease::BackOut { overshoot: 1.7 },
    ];

    #[test]
    fn endpoints_are_exact() {
        for ease in CURVES {
            assert!((ease.apply(0.0)).abs() < 1e-9, "{ease:?} at t=0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at t=1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for ease in CURVES {
            assert!((ease.apply(-2.0)).abs() < 1e-9);
            assert!((ease.apply(3.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn power_out_is_monotonic() {
        for n in [2, 3] {
            let ease = Ease::PowerOut(n);
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = ease.apply(i as f64 / 20.0);
                assert!(v >= prev, "PowerOut({n}) not monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn back_out_overshoots() {
        let ease = Ease::BackOut { overshoot: 1.7 };
        let peak = (1..20).map(|i| ease.apply(i as f64 / 20.0)).fold(0.0, f64::max);
        assert!(peak > 1.0, "expected overshoot above 1.0, got {peak}");
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp(-40.0, 0.0, 1.0), 0.0);
    }
}
