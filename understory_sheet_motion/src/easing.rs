// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing curves.

use crate::math::abs;

/// A timing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow finish.
    EaseOut,
    /// Slow start and finish.
    EaseInOut,
    /// CSS-style cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// `x1` and `x2` must lie in `[0, 1]`.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Easing {
    /// The curve used for sheet presentation, dismissal, and layout changes.
    ///
    /// A fast start with a long, soft landing, matching the system keyboard animation.
    pub const SHEET: Self = Self::CubicBezier {
        x1: 0.380,
        y1: 0.700,
        x2: 0.125,
        y2: 1.000,
    };

    /// Map linear progress `t` to eased progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 || t >= 1.0 {
            return t;
        }
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::SHEET
    }
}

const EPSILON: f64 = 1e-7;

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let (ax, bx, cx) = coefficients(x1, x2);
    let (ay, by, cy) = coefficients(y1, y2);
    let sample_x = |s: f64| ((ax * s + bx) * s + cx) * s;
    let slope_x = |s: f64| (3.0 * ax * s + 2.0 * bx) * s + cx;
    let sample_y = |s: f64| ((ay * s + by) * s + cy) * s;

    // Newton's method first; it converges in a few steps for well-behaved curves.
    let mut s = x;
    for _ in 0..8 {
        let err = sample_x(s) - x;
        if abs(err) < EPSILON {
            return sample_y(s);
        }
        let d = slope_x(s);
        if abs(d) < 1e-6 {
            break;
        }
        s -= err / d;
    }

    // Fall back to bisection, which always converges because x(s) is monotonic on [0, 1].
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = x;
    for _ in 0..64 {
        let value = sample_x(s);
        if abs(value - x) < EPSILON {
            break;
        }
        if x > value {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    sample_y(s)
}

fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}
