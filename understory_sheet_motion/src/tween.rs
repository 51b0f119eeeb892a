// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration eased interpolation between two values.

use core::time::Duration;

use crate::easing::Easing;

/// Interpolates from one value to another over a fixed duration.
///
/// ```
/// use core::time::Duration;
/// use understory_sheet_motion::{Easing, Tween};
///
/// let mut t = Tween::new(0.0, 10.0, Duration::from_millis(100), Easing::Linear);
/// assert!(!t.advance(Duration::from_millis(50)));
/// assert_eq!(t.value(), 5.0);
/// assert!(t.advance(Duration::from_millis(80)));
/// assert_eq!(t.value(), 10.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    /// Start a tween from `from` to `to`.
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// A finished tween resting at `value`.
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, Duration::ZERO, Easing::Linear)
    }

    /// Start a new tween toward `to` from wherever this one currently is.
    #[must_use]
    pub fn retarget(&self, to: f64, duration: Duration, easing: Easing) -> Self {
        Self::new(self.value(), to, duration, easing)
    }

    /// Start value.
    pub fn start(&self) -> f64 {
        self.from
    }

    /// End value.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    /// True once the full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt`. Returns `true` once finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.is_finished()
    }

    /// Jump to the end.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }
}
