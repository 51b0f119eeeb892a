// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duration-bounded damped spring.
//!
//! Unlike a free-running spring that settles whenever physics says so, this spring is tuned to
//! settle within a fixed duration. The natural frequency is picked so the oscillation envelope
//! has decayed to 0.1% of the travel distance at the end of the duration, where
//! the value snaps to the target.
//!
//! Displacement from the target, as a fraction `d(t)` of the travel distance, follows the
//! classical damped oscillator with `d(0) = 1` and `d'(0) = -v0`:
//!
//! - underdamped (`ζ < 1`): `e^(-ζω t) (cos(ω_d t) + (ζω - v0) / ω_d · sin(ω_d t))`
//! - critically damped (`ζ ≥ 1`): `e^(-ω t) (1 + (ω - v0) t)`
//!
//! `v0` is relative: `1.0` means the value initially moves one full travel distance per second.

use core::time::Duration;

use crate::math::{cos, exp, sin, sqrt};

/// `-ln(1e-3)`: envelope decay needed to settle within 0.1% of the travel distance.
const SETTLE_DECAY: f64 = 6.907_755_278_982_137;

/// Smallest damping ratio accepted; lower values are clamped.
const MIN_DAMPING_RATIO: f64 = 0.05;

/// Spring tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringParams {
    /// Time until the spring settles on its target.
    pub duration: Duration,
    /// Damping ratio `ζ`. Below `1.0` overshoots; `1.0` and above never do.
    pub damping_ratio: f64,
    /// Initial velocity relative to the travel distance, per second.
    pub initial_velocity: f64,
}

impl Default for SpringParams {
    /// The snap-back spring: 0.25 s, damping ratio 0.7, initial velocity 1.
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(250),
            damping_ratio: 0.7,
            initial_velocity: 1.0,
        }
    }
}

/// A spring moving a single value toward a target.
///
/// Construct it from whatever value is currently displayed so an interrupted motion continues
/// smoothly from where it was.
///
/// ```
/// use core::time::Duration;
/// use understory_sheet_motion::{SpringAnimation, SpringParams};
///
/// let mut spring = SpringAnimation::new(120.0, 100.0, SpringParams::default());
/// assert_eq!(spring.value(), 120.0);
/// assert!(spring.advance(Duration::from_millis(300)));
/// assert_eq!(spring.value(), 100.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringAnimation {
    from: f64,
    to: f64,
    params: SpringParams,
    omega: f64,
    elapsed: Duration,
}

impl SpringAnimation {
    /// Start moving from `from` to `to`.
    pub fn new(from: f64, to: f64, params: SpringParams) -> Self {
        let zeta = params.damping_ratio.max(MIN_DAMPING_RATIO);
        let secs = params.duration.as_secs_f64();
        let omega = if secs > 0.0 {
            SETTLE_DECAY / (zeta.min(1.0) * secs)
        } else {
            0.0
        };
        Self {
            from,
            to,
            params: SpringParams {
                damping_ratio: zeta,
                ..params
            },
            omega,
            elapsed: Duration::ZERO,
        }
    }

    /// Start value.
    pub fn start(&self) -> f64 {
        self.from
    }

    /// Target value.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Parameters in use (damping ratio after clamping).
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// True once the duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.params.duration
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.to + (self.from - self.to) * self.displacement(self.elapsed.as_secs_f64())
    }

    /// Advance by `dt`. Returns `true` once finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.params.duration);
        self.is_finished()
    }

    /// Jump to the target.
    pub fn finish(&mut self) {
        self.elapsed = self.params.duration;
    }

    fn displacement(&self, t: f64) -> f64 {
        let zeta = self.params.damping_ratio;
        let w = self.omega;
        let v0 = self.params.initial_velocity;
        if zeta < 1.0 {
            let wd = w * sqrt(1.0 - zeta * zeta);
            exp(-zeta * w * t) * (cos(wd * t) + (zeta * w - v0) / wd * sin(wd * t))
        } else {
            exp(-w * t) * (1.0 + (w - v0) * t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::abs;

    const MS_16: Duration = Duration::from_millis(16);

    fn run(spring: &mut SpringAnimation, frames: usize) -> f64 {
        let mut peak = spring.value();
        for _ in 0..frames {
            spring.advance(MS_16);
            peak = peak.min(spring.value());
        }
        peak
    }

    #[test]
    fn starts_at_current_value() {
        let spring = SpringAnimation::new(180.0, 100.0, SpringParams::default());
        assert_eq!(spring.value(), 180.0);
        assert!(!spring.is_finished());
    }

    #[test]
    fn settles_on_target_after_duration() {
        let mut spring = SpringAnimation::new(180.0, 100.0, SpringParams::default());
        run(&mut spring, 16);
        assert!(spring.is_finished());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn underdamped_overshoots() {
        let mut spring = SpringAnimation::new(200.0, 100.0, SpringParams::default());
        let lowest = run(&mut spring, 15);
        assert!(lowest < 100.0, "expected overshoot below target, got {lowest}");
        assert!(lowest > 90.0, "overshoot should be modest, got {lowest}");
    }

    #[test]
    fn critically_damped_does_not_overshoot() {
        let params = SpringParams {
            damping_ratio: 1.0,
            initial_velocity: 0.0,
            ..SpringParams::default()
        };
        let mut spring = SpringAnimation::new(200.0, 100.0, params);
        let lowest = run(&mut spring, 20);
        assert!(lowest >= 100.0 - 1e-9);
    }

    #[test]
    fn is_close_to_target_just_before_the_end() {
        let mut spring = SpringAnimation::new(200.0, 100.0, SpringParams::default());
        spring.advance(Duration::from_millis(240));
        assert!(abs(spring.value() - 100.0) < 1.0);
    }

    #[test]
    fn zero_duration_is_immediate() {
        let params = SpringParams {
            duration: Duration::ZERO,
            ..SpringParams::default()
        };
        let spring = SpringAnimation::new(5.0, 1.0, params);
        assert!(spring.is_finished());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn damping_is_clamped() {
        let params = SpringParams {
            damping_ratio: -2.0,
            ..SpringParams::default()
        };
        let spring = SpringAnimation::new(0.0, 1.0, params);
        assert_eq!(spring.params().damping_ratio, MIN_DAMPING_RATIO);
    }
}
