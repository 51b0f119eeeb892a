// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use understory_sheet_layout::{SheetMetrics, SurfaceStyle};
use understory_sheet_motion::{GestureConfig, TransitionConfig};

/// Cancel row behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SheetOptions {
    /// Hide the cancel row while the keyboard is up. Default `true`.
    pub hide_cancel_on_keyboard: bool,
    /// Hide the cancel row in landscape. Default `false`.
    pub hide_cancel_in_landscape: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            hide_cancel_on_keyboard: true,
            hide_cancel_in_landscape: false,
        }
    }
}

/// Everything an [`ActionSheet`](crate::ActionSheet) needs besides its items.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetConfig {
    /// Sheet or alert.
    pub style: SurfaceStyle,
    /// Chrome dimensions.
    pub metrics: SheetMetrics,
    /// Cancel row behavior.
    pub options: SheetOptions,
    /// Present, dismiss, and layout animation timing.
    pub transition: TransitionConfig,
    /// Drag-to-dismiss tuning.
    pub gesture: GestureConfig,
}

impl SheetConfig {
    /// Bottom action sheet with a cancel row and the sheet commit velocity.
    pub fn sheet() -> Self {
        Self {
            style: SurfaceStyle::Sheet,
            metrics: SheetMetrics::default(),
            options: SheetOptions::default(),
            transition: TransitionConfig::default(),
            gesture: GestureConfig::sheet(),
        }
    }

    /// Centred alert with the alert commit velocity.
    pub fn alert() -> Self {
        Self {
            style: SurfaceStyle::Alert,
            gesture: GestureConfig::alert(),
            ..Self::sheet()
        }
    }

    /// Replace the metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: SheetMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the cancel row options.
    #[must_use]
    pub fn with_options(mut self, options: SheetOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the transition timing.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    /// Replace the gesture tuning.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::sheet()
    }
}
