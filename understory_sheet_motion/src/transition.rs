// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation lifecycle of a modal surface.
//!
//! ```text
//! Idle --present--> Presenting --complete--> Presented --dismiss--> Dismissing --complete--> Dismissed
//! ```
//!
//! Every transition animates two effects together: the cover opacity (`0 ↔ 1`) and the slide
//! offset of the surface below its resting position (`container height ↔ 0`). Both use the same
//! [`Tween`] duration and curve, so they land in the same [`TransitionMachine::advance`] call
//! that flips the state.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Rect;

use crate::easing::Easing;
use crate::tween::Tween;

/// Lifecycle state of a surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionState {
    /// Not yet presented.
    #[default]
    Idle,
    /// Present animation in flight.
    Presenting,
    /// On screen and interactive.
    Presented,
    /// Dismiss animation in flight.
    Dismissing,
    /// Gone. Terminal.
    Dismissed,
}

impl TransitionState {
    /// True while a present or dismiss animation is in flight.
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Presenting | Self::Dismissing)
    }
}

/// Direction of a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Bringing the surface on screen.
    Present,
    /// Taking it away.
    Dismiss,
}

/// Why a transition was abandoned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TransitionError {
    /// The surface being transitioned to could not be resolved.
    #[error("transition destination surface could not be resolved")]
    MissingDestination,
    /// The surface being transitioned from could not be resolved.
    #[error("transition source surface could not be resolved")]
    MissingSource,
}

/// Opaque host handle for a surface taking part in a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

/// What the host could resolve for a transition attempt.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionContext {
    /// Surface the transition starts from (the presenting host for `present`).
    pub from: Option<SurfaceHandle>,
    /// Surface the transition ends on (the sheet for `present`).
    pub to: Option<SurfaceHandle>,
    /// Container the surface slides within. Its height is the off-screen slide distance.
    pub container: Rect,
}

impl TransitionContext {
    /// Create a context.
    pub fn new(from: Option<SurfaceHandle>, to: Option<SurfaceHandle>, container: Rect) -> Self {
        Self {
            from,
            to,
            container,
        }
    }

    fn validate(&self) -> Result<(), TransitionError> {
        if self.to.is_none() {
            return Err(TransitionError::MissingDestination);
        }
        if self.from.is_none() {
            return Err(TransitionError::MissingSource);
        }
        Ok(())
    }
}

/// Something the host must react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionEvent {
    /// An animation began.
    Started(TransitionKind),
    /// An animation ran to completion and the state flipped.
    Completed(TransitionKind),
    /// The attempt was abandoned before anything changed.
    Aborted {
        /// Which transition was attempted.
        kind: TransitionKind,
        /// Why.
        error: TransitionError,
    },
    /// The surface reached [`TransitionState::Dismissed`]. Emitted once per surface lifetime.
    Dismissed {
        /// `true` for host-initiated dismissals, `false` for user-driven ones.
        programmatic: bool,
    },
}

impl TransitionEvent {
    /// The completion value this event delivers, if it is a completion.
    ///
    /// Each `present`/`dismiss` attempt that starts or aborts yields exactly one completion:
    /// `Some(true)` on [`Completed`](Self::Completed), `Some(false)` on
    /// [`Aborted`](Self::Aborted).
    pub fn completion(&self) -> Option<bool> {
        match self {
            Self::Completed(_) => Some(true),
            Self::Aborted { .. } => Some(false),
            Self::Started(_) | Self::Dismissed { .. } => None,
        }
    }
}

/// Timing of present, dismiss, and layout animations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Length of every transition. Default 0.35 s.
    pub duration: Duration,
    /// Timing curve. Default [`Easing::SHEET`].
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(350),
            easing: Easing::SHEET,
        }
    }
}

impl TransitionConfig {
    /// Set the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Visual state of the surface for the current frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceFrame {
    /// Opacity of the full-screen cover behind the surface, `0..=1`.
    pub cover_opacity: f64,
    /// Downward offset of the surface from its resting position.
    pub slide_offset: f64,
}

/// What prompted a layout animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutCause {
    /// The item set or an item's height changed.
    Content,
    /// The viewport was resized.
    Viewport,
    /// The keyboard appeared or went away.
    Keyboard,
}

/// Drives the presentation lifecycle of one surface.
///
/// Calls return immediately; completions arrive from [`advance`](Self::advance) or
/// [`finish`](Self::finish).
#[derive(Clone, Debug)]
pub struct TransitionMachine {
    config: TransitionConfig,
    state: TransitionState,
    cover: Tween,
    slide: Tween,
    layout: Tween,
    programmatic: bool,
    in_size_transition: bool,
}

impl Default for TransitionMachine {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

impl TransitionMachine {
    /// Create an idle machine.
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            state: TransitionState::Idle,
            cover: Tween::settled(0.0),
            slide: Tween::settled(0.0),
            layout: Tween::settled(0.0),
            programmatic: true,
            in_size_transition: false,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Timing configuration.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Length of present and dismiss animations.
    pub fn transition_duration(&self) -> Duration {
        self.config.duration
    }

    /// Start presenting.
    ///
    /// Only acts from [`TransitionState::Idle`]; returns `None` otherwise. If the context cannot
    /// be resolved, returns [`TransitionEvent::Aborted`] and stays idle.
    pub fn present(&mut self, ctx: &TransitionContext) -> Option<TransitionEvent> {
        if self.state != TransitionState::Idle {
            #[cfg(feature = "tracing")]
            tracing::trace!(state = ?self.state, "present ignored");
            return None;
        }
        if let Err(error) = ctx.validate() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%error, "present aborted");
            return Some(TransitionEvent::Aborted {
                kind: TransitionKind::Present,
                error,
            });
        }
        let TransitionConfig { duration, easing } = self.config;
        self.cover = Tween::new(0.0, 1.0, duration, easing);
        self.slide = Tween::new(ctx.container.height(), 0.0, duration, easing);
        self.state = TransitionState::Presenting;
        #[cfg(feature = "tracing")]
        tracing::debug!("presenting");
        Some(TransitionEvent::Started(TransitionKind::Present))
    }

    /// Start dismissing.
    ///
    /// Only acts from [`TransitionState::Presented`]; calls while presenting, dismissing, or
    /// dismissed return `None`. `programmatic` is reported back in
    /// [`TransitionEvent::Dismissed`].
    pub fn dismiss(
        &mut self,
        programmatic: bool,
        ctx: &TransitionContext,
    ) -> Option<TransitionEvent> {
        if self.state != TransitionState::Presented {
            #[cfg(feature = "tracing")]
            tracing::trace!(state = ?self.state, programmatic, "dismiss ignored");
            return None;
        }
        if let Err(error) = ctx.validate() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%error, "dismiss aborted");
            return Some(TransitionEvent::Aborted {
                kind: TransitionKind::Dismiss,
                error,
            });
        }
        let TransitionConfig { duration, easing } = self.config;
        self.cover = self.cover.retarget(0.0, duration, easing);
        self.slide = self.slide.retarget(ctx.container.height(), duration, easing);
        self.programmatic = programmatic;
        self.state = TransitionState::Dismissing;
        #[cfg(feature = "tracing")]
        tracing::debug!(programmatic, "dismissing");
        Some(TransitionEvent::Started(TransitionKind::Dismiss))
    }

    /// Advance all animations by `dt` and return any completions.
    pub fn advance(&mut self, dt: Duration) -> Vec<TransitionEvent> {
        self.layout.advance(dt);
        let mut events = Vec::new();
        if self.state.is_animating() {
            let cover_done = self.cover.advance(dt);
            let slide_done = self.slide.advance(dt);
            if cover_done && slide_done {
                self.complete(&mut events);
            }
        }
        events
    }

    /// Jump every animation to its end and deliver any completions.
    pub fn finish(&mut self) -> Vec<TransitionEvent> {
        self.layout.finish();
        let mut events = Vec::new();
        if self.state.is_animating() {
            self.cover.finish();
            self.slide.finish();
            self.complete(&mut events);
        }
        events
    }

    fn complete(&mut self, events: &mut Vec<TransitionEvent>) {
        match self.state {
            TransitionState::Presenting => {
                self.state = TransitionState::Presented;
                events.push(TransitionEvent::Completed(TransitionKind::Present));
            }
            TransitionState::Dismissing => {
                self.state = TransitionState::Dismissed;
                events.push(TransitionEvent::Completed(TransitionKind::Dismiss));
                events.push(TransitionEvent::Dismissed {
                    programmatic: self.programmatic,
                });
            }
            TransitionState::Idle | TransitionState::Presented | TransitionState::Dismissed => {}
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(state = ?self.state, "transition complete");
    }

    /// Cover opacity and slide offset to render now.
    pub fn frame(&self) -> SurfaceFrame {
        SurfaceFrame {
            cover_opacity: self.cover.value(),
            slide_offset: self.slide.value(),
        }
    }

    /// Mark the start of a rotation or other size transition.
    pub fn begin_size_transition(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!("size transition began");
        self.in_size_transition = true;
    }

    /// Mark the end of a size transition, lifting its suppression.
    pub fn end_size_transition(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!("size transition ended");
        self.in_size_transition = false;
    }

    /// True between [`begin_size_transition`](Self::begin_size_transition) and
    /// [`end_size_transition`](Self::end_size_transition).
    pub fn in_size_transition(&self) -> bool {
        self.in_size_transition
    }

    /// True when a new drag gesture may move the surface.
    pub fn accepts_gestures(&self) -> bool {
        self.state == TransitionState::Presented && !self.in_size_transition
    }

    /// Animate the layout value toward `target`.
    ///
    /// Keyboard-driven layout is refused during a size transition and returns `false`. When the
    /// surface is not on screen the value jumps straight to `target`. Otherwise it eases from its
    /// current value with the transition timing.
    pub fn animate_layout(&mut self, cause: LayoutCause, target: f64) -> bool {
        if cause == LayoutCause::Keyboard && self.in_size_transition {
            #[cfg(feature = "tracing")]
            tracing::trace!(target, "keyboard layout suppressed during size transition");
            return false;
        }
        if matches!(self.state, TransitionState::Idle | TransitionState::Dismissed) {
            self.layout = Tween::settled(target);
        } else {
            let TransitionConfig { duration, easing } = self.config;
            self.layout = self.layout.retarget(target, duration, easing);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(?cause, target, "layout animation");
        true
    }

    /// Current layout value.
    pub fn layout_value(&self) -> f64 {
        self.layout.value()
    }

    /// Final layout value of the current layout animation.
    pub fn layout_target(&self) -> f64 {
        self.layout.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: Duration = Duration::from_millis(350);

    fn ctx() -> TransitionContext {
        TransitionContext::new(
            Some(SurfaceHandle(1)),
            Some(SurfaceHandle(2)),
            Rect::new(0.0, 0.0, 375.0, 800.0),
        )
    }

    fn presented() -> TransitionMachine {
        let mut m = TransitionMachine::default();
        m.present(&ctx());
        m.advance(FULL);
        assert_eq!(m.state(), TransitionState::Presented);
        m
    }

    #[test]
    fn present_runs_to_presented() {
        let mut m = TransitionMachine::default();
        assert_eq!(
            m.present(&ctx()),
            Some(TransitionEvent::Started(TransitionKind::Present))
        );
        assert_eq!(m.frame().slide_offset, 800.0);
        assert_eq!(m.frame().cover_opacity, 0.0);

        let events = m.advance(FULL);
        assert_eq!(events, [TransitionEvent::Completed(TransitionKind::Present)]);
        assert_eq!(
            m.frame(),
            SurfaceFrame {
                cover_opacity: 1.0,
                slide_offset: 0.0
            }
        );
    }

    #[test]
    fn state_does_not_flip_before_completion() {
        let mut m = TransitionMachine::default();
        m.present(&ctx());
        assert!(m.advance(Duration::from_millis(349)).is_empty());
        assert_eq!(m.state(), TransitionState::Presenting);
        let frame = m.frame();
        assert!(frame.cover_opacity > 0.9 && frame.cover_opacity < 1.0);
        assert!(frame.slide_offset > 0.0);
        assert_eq!(m.advance(Duration::from_millis(1)).len(), 1);
        assert_eq!(m.state(), TransitionState::Presented);
    }

    #[test]
    fn present_is_guarded() {
        let mut m = TransitionMachine::default();
        m.present(&ctx());
        assert_eq!(m.present(&ctx()), None);
        let mut m = presented();
        assert_eq!(m.present(&ctx()), None);
    }

    #[test]
    fn missing_destination_aborts_without_state_change() {
        let mut m = TransitionMachine::default();
        let bad = TransitionContext::new(Some(SurfaceHandle(1)), None, Rect::ZERO);
        let event = m.present(&bad);
        assert_eq!(
            event,
            Some(TransitionEvent::Aborted {
                kind: TransitionKind::Present,
                error: TransitionError::MissingDestination,
            })
        );
        assert_eq!(event.and_then(|e| e.completion()), Some(false));
        assert_eq!(m.state(), TransitionState::Idle);
        assert!(m.advance(FULL).is_empty());
    }

    #[test]
    fn missing_source_aborts_dismissal() {
        let mut m = presented();
        let bad = TransitionContext::new(None, Some(SurfaceHandle(2)), Rect::ZERO);
        assert!(matches!(
            m.dismiss(true, &bad),
            Some(TransitionEvent::Aborted {
                error: TransitionError::MissingSource,
                ..
            })
        ));
        assert_eq!(m.state(), TransitionState::Presented);
    }

    #[test]
    fn dismiss_while_presenting_is_ignored() {
        let mut m = TransitionMachine::default();
        m.present(&ctx());
        assert_eq!(m.dismiss(true, &ctx()), None);
        assert_eq!(m.state(), TransitionState::Presenting);
    }

    #[test]
    fn double_dismiss_fires_one_completion() {
        let mut m = presented();
        assert!(m.dismiss(true, &ctx()).is_some());
        assert_eq!(m.dismiss(false, &ctx()), None);
        assert_eq!(m.state(), TransitionState::Dismissing);

        let mut events = m.advance(FULL);
        events.extend(m.advance(FULL));
        assert_eq!(m.dismiss(true, &ctx()), None);
        assert_eq!(
            events,
            [
                TransitionEvent::Completed(TransitionKind::Dismiss),
                TransitionEvent::Dismissed { programmatic: true },
            ]
        );
        assert_eq!(m.state(), TransitionState::Dismissed);
        assert_eq!(m.frame().slide_offset, 800.0);
        assert_eq!(m.frame().cover_opacity, 0.0);
    }

    #[test]
    fn finish_delivers_completion_immediately() {
        let mut m = presented();
        m.dismiss(false, &ctx());
        let events = m.finish();
        assert!(events.contains(&TransitionEvent::Dismissed {
            programmatic: false
        }));
        assert!(m.finish().is_empty());
    }

    #[test]
    fn gestures_need_presented_and_no_size_transition() {
        let mut m = TransitionMachine::default();
        assert!(!m.accepts_gestures());
        m.present(&ctx());
        assert!(!m.accepts_gestures());
        m.advance(FULL);
        assert!(m.accepts_gestures());
        m.begin_size_transition();
        assert!(!m.accepts_gestures());
        m.end_size_transition();
        assert!(m.accepts_gestures());
    }

    #[test]
    fn keyboard_layout_is_suppressed_during_size_transition() {
        let mut m = presented();
        m.begin_size_transition();
        assert!(!m.animate_layout(LayoutCause::Keyboard, 300.0));
        assert_eq!(m.layout_target(), 0.0);
        assert!(m.animate_layout(LayoutCause::Viewport, 20.0));
        m.advance(FULL);
        m.end_size_transition();
        assert!(m.animate_layout(LayoutCause::Keyboard, 300.0));
        assert_eq!(m.layout_value(), 20.0);
        m.advance(FULL);
        assert_eq!(m.layout_value(), 300.0);
    }

    #[test]
    fn layout_jumps_while_off_screen() {
        let mut m = TransitionMachine::default();
        assert!(m.animate_layout(LayoutCause::Content, 42.0));
        assert_eq!(m.layout_value(), 42.0);
    }

    #[test]
    fn completion_values() {
        assert_eq!(
            TransitionEvent::Completed(TransitionKind::Present).completion(),
            Some(true)
        );
        assert_eq!(TransitionEvent::Started(TransitionKind::Present).completion(), None);
        assert_eq!(
            TransitionEvent::Dismissed { programmatic: true }.completion(),
            None
        );
    }
}
