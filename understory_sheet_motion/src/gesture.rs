// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-dismiss.
//!
//! A pan session starts on [`PanPhase::Began`] by anchoring at the surface's resting position.
//! While the pan changes, the surface follows the vertical translation: freely when it sits
//! below the anchor (toward dismissal), and through [`rubber_band`] resistance when it sits at
//! or above the anchor. On release the vertical velocity decides:
//!
//! - below [`GestureConfig::commit_velocity`]: spring back to the anchor, starting from wherever
//!   the surface is now;
//! - at or above it: commit, and the caller dismisses the surface.
//!
//! A pan that is cancelled or fails also commits.
//!
//! Samples are ignored unless the [`TransitionMachine`] accepts gestures, which means the
//! surface is presented and no size transition is in flight. A pan that is cut off this way
//! springs back to the resting position.

use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::math::tanh;
use crate::spring::{SpringAnimation, SpringParams};
use crate::transition::{TransitionContext, TransitionEvent, TransitionMachine};

/// Recognizer phase of a pan sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanPhase {
    /// The pan was recognized.
    Began,
    /// The finger moved.
    Changed,
    /// The finger lifted.
    Ended,
    /// The system cancelled the pan.
    Cancelled,
    /// Recognition failed.
    Failed,
}

/// One pan update, in the surface's coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanSample {
    /// Recognizer phase.
    pub phase: PanPhase,
    /// Total translation since the pan began.
    pub translation: Vec2,
    /// Current velocity, in points per second.
    pub velocity: Vec2,
}

impl PanSample {
    /// Create a sample.
    pub fn new(phase: PanPhase, translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }

    /// A `Began` sample with no translation.
    pub fn began() -> Self {
        Self::new(PanPhase::Began, Vec2::ZERO, Vec2::ZERO)
    }

    /// A `Changed` sample.
    pub fn changed(translation: Vec2) -> Self {
        Self::new(PanPhase::Changed, translation, Vec2::ZERO)
    }

    /// An `Ended` sample.
    pub fn ended(translation: Vec2, velocity: Vec2) -> Self {
        Self::new(PanPhase::Ended, translation, velocity)
    }
}

/// Tuning for [`GestureDismissCoordinator`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Upper bound of resisted displacement (`K`). Default 80.
    pub resistance_extent: f64,
    /// Translation over which resistance builds up (`D`). Default 150.
    pub resistance_distance: f64,
    /// Release velocity at or above which the pan commits a dismissal.
    pub commit_velocity: f64,
    /// Spring used to return to the anchor.
    pub snap_back: SpringParams,
}

impl GestureConfig {
    /// Action sheet tuning: commits at a downward velocity of 100.
    pub fn sheet() -> Self {
        Self {
            resistance_extent: 80.0,
            resistance_distance: 150.0,
            commit_velocity: 100.0,
            snap_back: SpringParams::default(),
        }
    }

    /// Alert tuning: commits on any non-upward release.
    pub fn alert() -> Self {
        Self {
            commit_velocity: 0.0,
            ..Self::sheet()
        }
    }

    /// Set the commit velocity.
    #[must_use]
    pub fn with_commit_velocity(mut self, velocity: f64) -> Self {
        self.commit_velocity = velocity;
        self
    }

    /// Set the snap-back spring.
    #[must_use]
    pub fn with_snap_back(mut self, snap_back: SpringParams) -> Self {
        self.snap_back = snap_back;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::sheet()
    }
}

/// Bounded resistance: `extent * tanh(translation / distance)`.
///
/// The result never exceeds `extent` in magnitude and grows ever more slowly with `translation`.
/// A non-positive `distance` pins the result to zero.
///
/// ```
/// use understory_sheet_motion::rubber_band;
///
/// assert_eq!(rubber_band(0.0, 80.0, 150.0), 0.0);
/// assert!(rubber_band(-1000.0, 80.0, 150.0) > -80.0);
/// ```
pub fn rubber_band(translation: f64, extent: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    extent * tanh(translation / distance)
}

/// What a pan sample did to the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Nothing: gestures are suppressed or no session is active.
    Ignored,
    /// A session began anchored at this point.
    Anchored(Point),
    /// The surface moved here.
    Moved(Point),
    /// The surface springs back from `from` to `to`.
    SnapBack {
        /// Position at release.
        from: Point,
        /// Anchor being returned to.
        to: Point,
    },
    /// The pan commits a dismissal.
    Commit,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct GestureSession {
    anchor: Point,
}

/// Turns pan samples into surface positions and dismiss decisions.
#[derive(Clone, Debug)]
pub struct GestureDismissCoordinator {
    config: GestureConfig,
    resting: Point,
    position: Point,
    session: Option<GestureSession>,
    snap: Option<SpringAnimation>,
}

impl GestureDismissCoordinator {
    /// Create a coordinator for a surface resting at `resting`.
    pub fn new(config: GestureConfig, resting: Point) -> Self {
        Self {
            config,
            resting,
            position: resting,
            session: None,
            snap: None,
        }
    }

    /// Tuning in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Resting position.
    pub fn resting(&self) -> Point {
        self.resting
    }

    /// Move the resting position, e.g. after a layout pass.
    ///
    /// An idle surface moves with it; a dragged or snapping one keeps its current position.
    pub fn set_resting(&mut self, resting: Point) {
        self.resting = resting;
        if self.session.is_none() && self.snap.is_none() {
            self.position = resting;
        }
    }

    /// Current surface position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Vertical offset of the surface from its resting position.
    pub fn displacement(&self) -> f64 {
        self.position.y - self.resting.y
    }

    /// True while a pan session is active.
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// True while a snap-back spring is running.
    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    /// Feed one pan sample.
    pub fn handle(&mut self, sample: PanSample, machine: &TransitionMachine) -> GestureOutcome {
        if !machine.accepts_gestures() {
            #[cfg(feature = "tracing")]
            tracing::trace!(phase = ?sample.phase, "pan suppressed");
            if self.session.take().is_some() {
                // A cut-off drag returns to wherever the surface rests now.
                self.snap = Some(SpringAnimation::new(
                    self.position.y,
                    self.resting.y,
                    self.config.snap_back,
                ));
            }
            return GestureOutcome::Ignored;
        }
        match sample.phase {
            PanPhase::Began => {
                self.snap = None;
                let anchor = self.resting;
                self.session = Some(GestureSession { anchor });
                GestureOutcome::Anchored(anchor)
            }
            PanPhase::Changed => {
                let Some(GestureSession { anchor }) = self.session else {
                    return GestureOutcome::Ignored;
                };
                let raw = sample.translation.y;
                let ty = if self.position.y <= anchor.y {
                    rubber_band(
                        raw,
                        self.config.resistance_extent,
                        self.config.resistance_distance,
                    )
                } else {
                    raw
                };
                self.position = Point::new(anchor.x, anchor.y + ty);
                GestureOutcome::Moved(self.position)
            }
            PanPhase::Ended => {
                let Some(GestureSession { anchor }) = self.session.take() else {
                    return GestureOutcome::Ignored;
                };
                if sample.velocity.y < self.config.commit_velocity {
                    let from = self.position;
                    self.snap = Some(SpringAnimation::new(
                        from.y,
                        anchor.y,
                        self.config.snap_back,
                    ));
                    #[cfg(feature = "tracing")]
                    tracing::debug!(velocity = sample.velocity.y, "pan snaps back");
                    GestureOutcome::SnapBack { from, to: anchor }
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(velocity = sample.velocity.y, "pan commits dismissal");
                    GestureOutcome::Commit
                }
            }
            PanPhase::Cancelled | PanPhase::Failed => {
                self.session = None;
                #[cfg(feature = "tracing")]
                tracing::debug!(phase = ?sample.phase, "pan interrupted, committing dismissal");
                GestureOutcome::Commit
            }
        }
    }

    /// Feed one pan sample and dismiss through `machine` on commit.
    ///
    /// Dismissals started here are user-driven (`programmatic == false`).
    pub fn drive(
        &mut self,
        sample: PanSample,
        machine: &mut TransitionMachine,
        ctx: &TransitionContext,
    ) -> (GestureOutcome, Option<TransitionEvent>) {
        let outcome = self.handle(sample, machine);
        let event = match outcome {
            GestureOutcome::Commit => machine.dismiss(false, ctx),
            _ => None,
        };
        (outcome, event)
    }

    /// Advance the snap-back spring. Returns `true` when it settles during this call.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(spring) = self.snap.as_mut() else {
            return false;
        };
        let done = spring.advance(dt);
        self.position.y = spring.value();
        if done {
            self.snap = None;
            self.position = self.resting;
        }
        done
    }
}
