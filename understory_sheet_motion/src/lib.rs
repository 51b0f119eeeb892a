// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet_motion --heading-base-level=0

//! Understory Sheet Motion: present, dismiss, and drag-to-dismiss for modal surfaces.
//!
//! ## Overview
//!
//! A modal surface (action sheet or alert) slides in over a fading cover, can be dragged with
//! rubber-band resistance, and leaves either because the host asked or because the user flicked
//! it away. This crate owns that lifecycle without owning any views or clocks.
//!
//! - [`TransitionMachine`]: `Idle → Presenting → Presented → Dismissing → Dismissed`.
//!   Each transition runs a fixed-length eased animation of the cover opacity and the slide
//!   offset. The state only changes when that animation completes.
//! - [`GestureDismissCoordinator`]: consumes pan samples, applies rubber-band resistance, and on
//!   release either snaps back with a spring or commits a dismissal.
//! - [`Tween`], [`SpringAnimation`], and [`Easing`]: the animation primitives both use.
//!
//! ## Time
//!
//! Nothing here blocks or spawns. Calls like [`TransitionMachine::present`] return immediately and
//! the host drives time by calling `advance(dt)` once per frame (or
//! [`TransitionMachine::finish`] when its own animation engine reports completion). Completions
//! are returned as [`TransitionEvent`]s from those calls.
//!
//! ## Guards
//!
//! - `present` only acts from `Idle`; `dismiss` only acts from `Presented`. Anything else is a
//!   silent no-op, so racing dismissals produce exactly one completion.
//! - While a size transition (rotation) is in flight, keyboard-driven layout animations and all
//!   gesture input are suppressed until [`TransitionMachine::end_size_transition`].
//! - A transition whose source or destination surface cannot be resolved is abandoned with a
//!   [`TransitionEvent::Aborted`] and no state change.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Rect;
//! use understory_sheet_motion::{
//!     SurfaceHandle, TransitionContext, TransitionEvent, TransitionMachine, TransitionState,
//! };
//!
//! let ctx = TransitionContext::new(
//!     Some(SurfaceHandle(1)),
//!     Some(SurfaceHandle(2)),
//!     Rect::new(0.0, 0.0, 375.0, 812.0),
//! );
//! let mut machine = TransitionMachine::default();
//! machine.present(&ctx);
//! assert_eq!(machine.state(), TransitionState::Presenting);
//!
//! let events = machine.advance(Duration::from_millis(400));
//! assert_eq!(machine.state(), TransitionState::Presented);
//! assert!(events.iter().any(|e| e.completion() == Some(true)));
//!
//! machine.dismiss(true, &ctx);
//! machine.dismiss(true, &ctx); // ignored
//! let events = machine.advance(Duration::from_millis(400));
//! assert!(events.contains(&TransitionEvent::Dismissed { programmatic: true }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_sheet_motion requires either the `std` or `libm` feature");

mod easing;
mod gesture;
mod math;
mod spring;
mod transition;
mod tween;

pub use easing::Easing;
pub use gesture::{
    GestureConfig, GestureDismissCoordinator, GestureOutcome, PanPhase, PanSample,
    rubber_band,
};
pub use spring::{SpringAnimation, SpringParams};
pub use transition::{
    LayoutCause, SurfaceFrame, SurfaceHandle, TransitionConfig, TransitionContext,
    TransitionError, TransitionEvent, TransitionKind, TransitionMachine, TransitionState,
};
pub use tween::Tween;
