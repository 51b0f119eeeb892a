// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface metrics and viewport geometry.
//!
//! Upstream code observes the window, safe areas, and keyboard, and hands the resolved values in
//! as a [`Viewport`]. [`sheet_geometry`] turns that into the margin frame the surface lives in,
//! the cancel row frame, and the height budget left for items.

use kurbo::{Insets, Rect, Size};

/// Which kind of surface is being laid out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfaceStyle {
    /// Centred alert without a cancel row.
    Alert,
    /// Bottom-anchored action sheet with a separate cancel row.
    #[default]
    Sheet,
}

/// Fixed chrome dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetMetrics {
    /// Gap around the surface and between the content and the cancel row.
    pub side_margin: f64,
    /// Gap above the surface, below the top safe area.
    pub top_margin: f64,
    /// Corner radius of the content and cancel panels.
    pub corner_radius: f64,
    /// Height of a regular action row, including the cancel row.
    pub item_height: f64,
    /// Height of a title row.
    pub title_item_height: f64,
}

impl Default for SheetMetrics {
    fn default() -> Self {
        Self {
            side_margin: 10.0,
            top_margin: 24.0,
            corner_radius: 10.0,
            item_height: 57.0,
            title_item_height: 33.0,
        }
    }
}

/// Resolved host viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Size of the host surface.
    pub size: Size,
    /// Safe-area insets of the host surface.
    pub safe_area: Insets,
    /// Height covered by the keyboard at the bottom edge. Zero when hidden.
    pub keyboard_inset: f64,
}

impl Viewport {
    /// A viewport with no safe area and no keyboard.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            safe_area: Insets::ZERO,
            keyboard_inset: 0.0,
        }
    }

    /// Set the safe-area insets.
    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Insets) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// Set the keyboard inset.
    #[must_use]
    pub fn with_keyboard_inset(mut self, inset: f64) -> Self {
        self.keyboard_inset = inset.max(0.0);
        self
    }

    /// True when wider than tall.
    pub fn is_landscape(&self) -> bool {
        self.size.width > self.size.height
    }
}

/// Frames and budget for one layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetGeometry {
    /// Style the geometry was computed for.
    pub style: SurfaceStyle,
    /// Frame holding the content panel (and the cancel row for sheets).
    pub margin: Rect,
    /// Cancel row frame, `None` for alerts or while the cancel row is hidden.
    pub cancel: Option<Rect>,
    /// Height available to items.
    pub content_budget: f64,
    /// Gap between content and cancel row.
    pub spacing: f64,
}

impl SheetGeometry {
    /// Frame of the content panel for `content_height`, clamped into the budget.
    ///
    /// Sheets sit on top of the cancel row (or the margin bottom when it is hidden);
    /// alerts are centred vertically in the margin frame.
    pub fn content_frame(&self, content_height: f64) -> Rect {
        let height = content_height.min(self.content_budget).max(0.0);
        let (x0, x1) = (self.margin.x0, self.margin.x1);
        match self.style {
            SurfaceStyle::Sheet => {
                let bottom = match self.cancel {
                    Some(cancel) => cancel.y0 - self.spacing,
                    None => self.margin.y1,
                };
                Rect::new(x0, bottom - height, x1, bottom)
            }
            SurfaceStyle::Alert => {
                let center = (self.margin.y0 + self.margin.y1) * 0.5;
                Rect::new(x0, center - height * 0.5, x1, center + height * 0.5)
            }
        }
    }
}

/// Compute the margin frame, cancel frame, and content budget.
///
/// - `full_landscape`: span the safe width instead of a centred column `min(w, h) - 2 * side` wide.
/// - `cancel_hidden`: reclaim the cancel row and its spacing for items.
pub fn sheet_geometry(
    viewport: &Viewport,
    metrics: &SheetMetrics,
    style: SurfaceStyle,
    full_landscape: bool,
    cancel_hidden: bool,
) -> SheetGeometry {
    let Size { width, height } = viewport.size;
    let safe = viewport.safe_area;
    let side = metrics.side_margin;

    // Raised above the keyboard, the bottom safe area only matters where it still shows.
    let bottom_inset = viewport.keyboard_inset.max(safe.y1);
    let y0 = safe.y0 + metrics.top_margin;
    let y1 = (height - bottom_inset - side).max(y0);

    let (x0, x1) = if full_landscape {
        let x0 = safe.x0 + side;
        (x0, (width - safe.x1 - side).max(x0))
    } else {
        let column = (width.min(height) - 2.0 * side).max(0.0);
        let x0 = (width - column) * 0.5;
        (x0, x0 + column)
    };
    let margin = Rect::new(x0, y0, x1, y1);

    let cancel = (style == SurfaceStyle::Sheet && !cancel_hidden)
        .then(|| Rect::new(x0, y1 - metrics.item_height, x1, y1));
    let reserved = if cancel.is_some() {
        metrics.item_height + side
    } else {
        0.0
    };

    SheetGeometry {
        style,
        margin,
        cancel,
        content_budget: (margin.height() - reserved).max(0.0),
        spacing: side,
    }
}

/// Clamp a scroll offset so the items never scroll past either end.
///
/// When the content is shorter than the visible height the only valid offset is zero.
pub fn clamp_scroll_offset(offset: f64, visible_height: f64, content_height: f64) -> f64 {
    let max = (content_height - visible_height).max(0.0);
    offset.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Viewport {
        Viewport::new(Size::new(375.0, 812.0)).with_safe_area(Insets::new(0.0, 44.0, 0.0, 34.0))
    }

    #[test]
    fn sheet_budget_reserves_cancel_row() {
        let g = sheet_geometry(
            &phone(),
            &SheetMetrics::default(),
            SurfaceStyle::Sheet,
            true,
            false,
        );
        // 812 - 34 - 10 = 768 bottom, 44 + 24 = 68 top.
        assert_eq!(g.margin, Rect::new(10.0, 68.0, 365.0, 768.0));
        assert_eq!(g.cancel, Some(Rect::new(10.0, 711.0, 365.0, 768.0)));
        assert_eq!(g.content_budget, 700.0 - 67.0);
    }

    #[test]
    fn hidden_cancel_returns_space() {
        let g = sheet_geometry(
            &phone(),
            &SheetMetrics::default(),
            SurfaceStyle::Sheet,
            true,
            true,
        );
        assert!(g.cancel.is_none());
        assert_eq!(g.content_budget, 700.0);
        assert_eq!(g.content_frame(100.0), Rect::new(10.0, 668.0, 365.0, 768.0));
    }

    #[test]
    fn alert_has_no_cancel_and_centres_content() {
        let g = sheet_geometry(
            &phone(),
            &SheetMetrics::default(),
            SurfaceStyle::Alert,
            true,
            false,
        );
        assert!(g.cancel.is_none());
        assert_eq!(g.content_budget, 700.0);
        let frame = g.content_frame(200.0);
        assert_eq!(frame.center().y, g.margin.center().y);
        assert_eq!(frame.height(), 200.0);
    }

    #[test]
    fn keyboard_replaces_bottom_safe_area() {
        let vp = phone().with_keyboard_inset(300.0);
        let g = sheet_geometry(&vp, &SheetMetrics::default(), SurfaceStyle::Sheet, true, true);
        assert_eq!(g.margin.y1, 812.0 - 300.0 - 10.0);
    }

    #[test]
    fn portrait_column_in_landscape() {
        let vp = Viewport::new(Size::new(800.0, 400.0));
        let g = sheet_geometry(&vp, &SheetMetrics::default(), SurfaceStyle::Sheet, false, false);
        assert_eq!(g.margin.width(), 380.0);
        assert_eq!(g.margin.center().x, 400.0);
        assert!(vp.is_landscape());
    }

    #[test]
    fn tiny_viewports_never_go_negative() {
        let vp = Viewport::new(Size::new(10.0, 20.0));
        let g = sheet_geometry(&vp, &SheetMetrics::default(), SurfaceStyle::Sheet, true, false);
        assert_eq!(g.content_budget, 0.0);
        assert!(g.margin.height() >= 0.0);
        assert!(g.margin.width() >= 0.0);
        assert_eq!(g.content_frame(50.0).height(), 0.0);
    }

    #[test]
    fn content_frame_clamps_to_budget() {
        let g = sheet_geometry(
            &phone(),
            &SheetMetrics::default(),
            SurfaceStyle::Sheet,
            true,
            false,
        );
        let frame = g.content_frame(10_000.0);
        assert_eq!(frame.height(), g.content_budget);
        assert_eq!(frame.y1, 711.0 - 10.0);
    }

    #[test]
    fn scroll_offset_is_clamped() {
        assert_eq!(clamp_scroll_offset(-5.0, 100.0, 300.0), 0.0);
        assert_eq!(clamp_scroll_offset(250.0, 100.0, 300.0), 200.0);
        assert_eq!(clamp_scroll_offset(120.0, 100.0, 300.0), 120.0);
        assert_eq!(clamp_scroll_offset(40.0, 100.0, 60.0), 0.0);
    }
}
