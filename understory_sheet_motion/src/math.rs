// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that `core` does not provide, backed by `std` or `libm`.

#[cfg(feature = "std")]
mod imp {
    pub(crate) fn exp(x: f64) -> f64 {
        x.exp()
    }
    pub(crate) fn sin(x: f64) -> f64 {
        x.sin()
    }
    pub(crate) fn cos(x: f64) -> f64 {
        x.cos()
    }
    pub(crate) fn tanh(x: f64) -> f64 {
        x.tanh()
    }
    pub(crate) fn sqrt(x: f64) -> f64 {
        x.sqrt()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod imp {
    pub(crate) fn exp(x: f64) -> f64 {
        libm::exp(x)
    }
    pub(crate) fn sin(x: f64) -> f64 {
        libm::sin(x)
    }
    pub(crate) fn cos(x: f64) -> f64 {
        libm::cos(x)
    }
    pub(crate) fn tanh(x: f64) -> f64 {
        libm::tanh(x)
    }
    pub(crate) fn sqrt(x: f64) -> f64 {
        libm::sqrt(x)
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
pub(crate) use imp::{cos, exp, sin, sqrt, tanh};

pub(crate) fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}
