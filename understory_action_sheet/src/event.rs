// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs from and outputs to the host.

use kurbo::{Rect, Vec2};
use understory_sheet_motion::TransitionEvent;

/// A keyboard frame change, in the host surface's coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyboardChange {
    /// Keyboard frame before the change.
    pub begin: Rect,
    /// Keyboard frame after the change.
    pub end: Rect,
}

impl KeyboardChange {
    /// Create a change.
    pub fn new(begin: Rect, end: Rect) -> Self {
        Self { begin, end }
    }

    /// True when the keyboard does not actually move.
    pub fn is_stationary(&self) -> bool {
        self.begin.origin() == self.end.origin()
    }
}

/// Something the host should react to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SheetEvent {
    /// A present or dismiss transition started, completed, aborted, or the sheet was dismissed.
    Transition(TransitionEvent),
    /// The item at this index became visible.
    ItemShown(usize),
    /// The item at this index was hidden.
    ItemHidden(usize),
    /// Required items alone exceed the budget by this much; the content must scroll.
    ///
    /// Reported on every layout pass where the amount differs from the previous pass.
    /// A pass that ends the overflow reports nothing; check
    /// [`Allocation::overflow`](understory_sheet_layout::Allocation::overflow) for that.
    Overflow(f64),
    /// A snap-back after a slow release settled at the resting position.
    SnapBackSettled,
}

impl SheetEvent {
    /// The `programmatic` flag if this event reports the final dismissal.
    pub fn dismissed(&self) -> Option<bool> {
        match self {
            Self::Transition(TransitionEvent::Dismissed { programmatic }) => Some(*programmatic),
            _ => None,
        }
    }
}

/// What to render this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetFrame {
    /// Opacity of the full-screen cover.
    pub cover_opacity: f64,
    /// Translation applied to the content panel and the cancel row. Combines the present/dismiss
    /// slide, the drag displacement, and any in-flight layout animation.
    pub offset: Vec2,
    /// Resting frame of the content panel.
    pub content: Rect,
    /// Resting frame of the cancel row, if shown.
    pub cancel: Option<Rect>,
    /// Scroll offset of the items within the content panel.
    pub scroll_offset: f64,
}
