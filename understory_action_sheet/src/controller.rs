// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`ActionSheet`] controller.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use understory_sheet_layout::{
    Allocation, LayoutHooks, ModelRequest, NoHooks, SheetGeometry, SheetItem, SheetModel,
    Viewport, clamp_scroll_offset, sheet_geometry,
};
use understory_sheet_motion::{
    GestureDismissCoordinator, GestureOutcome, LayoutCause, PanSample, SurfaceHandle,
    TransitionContext, TransitionEvent, TransitionMachine, TransitionState,
};

use crate::config::SheetConfig;
use crate::event::{KeyboardChange, SheetEvent, SheetFrame};

/// One action sheet or alert: its items, layout, lifecycle, and drag-to-dismiss.
///
/// Host notifications go in through methods; everything the host must react to comes out as
/// [`SheetEvent`]s from [`advance`](Self::advance) or [`take_events`](Self::take_events).
pub struct ActionSheet<T, H = NoHooks> {
    config: SheetConfig,
    model: SheetModel<T, H>,
    viewport: Viewport,
    machine: TransitionMachine,
    gesture: GestureDismissCoordinator,
    surfaces: (Option<SurfaceHandle>, Option<SurfaceHandle>),
    geometry: SheetGeometry,
    allocation: Allocation,
    deferred_keyboard: Option<f64>,
    scroll_offset: f64,
    events: Vec<SheetEvent>,
}

impl<T: SheetItem, H: core::fmt::Debug> core::fmt::Debug for ActionSheet<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionSheet")
            .field("config", &self.config)
            .field("model", &self.model)
            .field("viewport", &self.viewport)
            .field("state", &self.machine.state())
            .field("geometry", &self.geometry)
            .field("allocation", &self.allocation)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl<T: SheetItem> ActionSheet<T, NoHooks> {
    /// An empty sheet with a default model.
    pub fn with_config(config: SheetConfig, viewport: Viewport) -> Self {
        Self::new(SheetModel::new(), config, viewport)
    }
}

impl<T: SheetItem, H: LayoutHooks<T>> ActionSheet<T, H> {
    /// Wrap `model` and run the first layout pass.
    ///
    /// Visibility changes from that pass are queued as events.
    pub fn new(model: SheetModel<T, H>, config: SheetConfig, viewport: Viewport) -> Self {
        let geometry = geometry_for(&config, &viewport, model.options().show_full_landscape);
        let mut sheet = Self {
            machine: TransitionMachine::new(config.transition),
            gesture: GestureDismissCoordinator::new(config.gesture, geometry.margin.center()),
            config,
            model,
            viewport,
            surfaces: (None, None),
            geometry,
            allocation: Allocation::default(),
            deferred_keyboard: None,
            scroll_offset: 0.0,
            events: Vec::new(),
        };
        sheet.relayout(LayoutCause::Content);
        sheet
    }

    /// Configuration.
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// The model.
    pub fn model(&self) -> &SheetModel<T, H> {
        &self.model
    }

    /// The model, mutably. Call [`reload`](Self::reload) after changing items.
    pub fn model_mut(&mut self) -> &mut SheetModel<T, H> {
        &mut self.model
    }

    /// Items in display order.
    pub fn items(&self) -> &[T] {
        self.model.items()
    }

    /// Append an item and re-run layout. Returns its index.
    pub fn add_item(&mut self, item: T) -> usize {
        let index = self.model.add_item(item);
        self.relayout(LayoutCause::Content);
        index
    }

    /// Re-run layout after the items changed.
    pub fn reload(&mut self) {
        self.relayout(LayoutCause::Content);
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Geometry from the last layout pass.
    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    /// Allocation from the last layout pass.
    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Lifecycle state.
    pub fn state(&self) -> TransitionState {
        self.machine.state()
    }

    /// The transition machine.
    pub fn machine(&self) -> &TransitionMachine {
        &self.machine
    }

    /// The drag-to-dismiss coordinator.
    pub fn gesture(&self) -> &GestureDismissCoordinator {
        &self.gesture
    }

    /// Present over the host surface `from`, showing the sheet surface `to`.
    ///
    /// Returns `true` if the present animation started. Missing handles abort the attempt with
    /// a [`TransitionEvent::Aborted`] event. The handles are kept for later dismissals only when
    /// the animation starts.
    pub fn present(&mut self, from: Option<SurfaceHandle>, to: Option<SurfaceHandle>) -> bool {
        let ctx = TransitionContext::new(from, to, self.container());
        let event = self.machine.present(&ctx);
        if matches!(event, Some(TransitionEvent::Started(_))) {
            self.surfaces = (from, to);
        }
        self.record(event)
    }

    /// Dismiss. Only acts while presented; returns `true` if the dismiss animation started.
    pub fn dismiss(&mut self, programmatic: bool) -> bool {
        let ctx = self.context();
        let event = self.machine.dismiss(programmatic, &ctx);
        self.record(event)
    }

    /// The user tapped the cover outside the sheet.
    pub fn tap_background(&mut self) -> bool {
        self.dismiss(false)
    }

    /// The user tapped the cancel row. Ignored while the row is hidden.
    pub fn tap_cancel(&mut self) -> bool {
        if self.geometry.cancel.is_none() {
            return false;
        }
        self.dismiss(false)
    }

    /// Feed a pan sample to drag-to-dismiss.
    pub fn handle_pan(&mut self, sample: PanSample) -> GestureOutcome {
        let ctx = self.context();
        let (outcome, event) = self.gesture.drive(sample, &mut self.machine, &ctx);
        self.record(event);
        outcome
    }

    /// The keyboard is about to appear or move.
    ///
    /// Ignored when the model ignores the keyboard or the keyboard does not move. Returns whether
    /// the change was taken into account. During a size transition the change is remembered and
    /// laid out when the transition ends.
    pub fn keyboard_will_show(&mut self, change: KeyboardChange) -> bool {
        if self.model.options().ignore_keyboard || change.is_stationary() {
            #[cfg(feature = "tracing")]
            tracing::trace!(?change, "keyboard show ignored");
            return false;
        }
        let inset = (self.viewport.size.height - change.end.y0).max(0.0);
        self.apply_keyboard(inset);
        true
    }

    /// The keyboard is about to go away.
    pub fn keyboard_will_hide(&mut self) -> bool {
        if self.model.options().ignore_keyboard {
            return false;
        }
        self.apply_keyboard(0.0);
        true
    }

    fn apply_keyboard(&mut self, inset: f64) {
        if self.machine.in_size_transition() {
            #[cfg(feature = "tracing")]
            tracing::debug!(inset, "keyboard layout deferred until size transition ends");
            self.deferred_keyboard = Some(inset);
            return;
        }
        self.viewport.keyboard_inset = inset;
        self.relayout(LayoutCause::Keyboard);
    }

    /// A rotation or other resize to `size` is starting.
    ///
    /// Lays out for the new size right away. Until
    /// [`end_size_transition`](Self::end_size_transition), pans are ignored and keyboard changes
    /// are held back.
    pub fn begin_size_transition(&mut self, size: Size) {
        self.machine.begin_size_transition();
        self.viewport.size = size;
        self.relayout(LayoutCause::Viewport);
    }

    /// The size transition finished. Applies any keyboard change that arrived meanwhile.
    pub fn end_size_transition(&mut self) {
        self.machine.end_size_transition();
        if let Some(inset) = self.deferred_keyboard.take() {
            self.apply_keyboard(inset);
        }
    }

    /// Replace the viewport, keyboard inset included, and re-run layout.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.relayout(LayoutCause::Viewport);
    }

    /// The application moved to the background. Returns whether a dismissal was requested.
    pub fn enter_background(&mut self) -> bool {
        let requested = self.model.enter_background();
        self.process_requests();
        requested
    }

    /// Act on requests queued by the model, in order.
    pub fn process_requests(&mut self) {
        for request in self.model.take_requests() {
            match request {
                ModelRequest::Reload => self.relayout(LayoutCause::Content),
                ModelRequest::Dismiss { programmatic } => {
                    self.dismiss(programmatic);
                }
            }
        }
    }

    /// Scroll the items, clamped to the scrollable range. Returns the applied offset.
    pub fn scroll_to(&mut self, offset: f64) -> f64 {
        self.scroll_offset = self.clamp_scroll(offset);
        self.scroll_offset
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn clamp_scroll(&self, offset: f64) -> f64 {
        let visible = self.geometry.content_frame(self.allocation.content_height).height();
        clamp_scroll_offset(offset, visible, self.allocation.content_height)
    }

    /// Process model requests, advance every animation by `dt`, and return pending events.
    pub fn advance(&mut self, dt: Duration) -> Vec<SheetEvent> {
        self.process_requests();
        for event in self.machine.advance(dt) {
            self.events.push(SheetEvent::Transition(event));
        }
        if self.gesture.advance(dt) {
            self.events.push(SheetEvent::SnapBackSettled);
        }
        self.take_events()
    }

    /// Drain pending events.
    pub fn take_events(&mut self) -> Vec<SheetEvent> {
        core::mem::take(&mut self.events)
    }

    /// What to render now.
    pub fn frame(&self) -> SheetFrame {
        let surface = self.machine.frame();
        let layout_lag = self.machine.layout_value() - self.machine.layout_target();
        SheetFrame {
            cover_opacity: surface.cover_opacity,
            offset: Vec2::new(
                0.0,
                surface.slide_offset + self.gesture.displacement() + layout_lag,
            ),
            content: self.geometry.content_frame(self.allocation.content_height),
            cancel: self.geometry.cancel,
            scroll_offset: self.scroll_offset,
        }
    }

    fn context(&self) -> TransitionContext {
        let (from, to) = self.surfaces;
        TransitionContext::new(from, to, self.container())
    }

    fn container(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.viewport.size)
    }

    fn record(&mut self, event: Option<TransitionEvent>) -> bool {
        let Some(event) = event else {
            return false;
        };
        self.events.push(SheetEvent::Transition(event));
        matches!(event, TransitionEvent::Started(_))
    }

    fn relayout(&mut self, cause: LayoutCause) {
        let geometry = geometry_for(
            &self.config,
            &self.viewport,
            self.model.options().show_full_landscape,
        );
        let allocation = self.model.update_items(geometry.content_budget);
        for change in &allocation.changes {
            self.events.push(if change.shown {
                SheetEvent::ItemShown(change.index)
            } else {
                SheetEvent::ItemHidden(change.index)
            });
        }
        if allocation.is_overflowing() && allocation.overflow != self.allocation.overflow {
            self.events.push(SheetEvent::Overflow(allocation.overflow));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            ?cause,
            budget = geometry.content_budget,
            content = allocation.content_height,
            "relayout"
        );

        self.machine.animate_layout(cause, geometry.margin.y1);
        self.gesture.set_resting(geometry.margin.center());
        self.geometry = geometry;
        self.allocation = allocation;
        self.scroll_offset = self.clamp_scroll(self.scroll_offset);
    }
}

fn geometry_for(config: &SheetConfig, viewport: &Viewport, full_landscape: bool) -> SheetGeometry {
    let options = config.options;
    let cancel_hidden = (options.hide_cancel_on_keyboard && viewport.keyboard_inset > 0.0)
        || (options.hide_cancel_in_landscape && viewport.is_landscape());
    sheet_geometry(
        viewport,
        &config.metrics,
        config.style,
        full_landscape,
        cancel_hidden,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Insets;
    use understory_sheet_layout::{Item, ItemTag};

    fn phone() -> Viewport {
        Viewport::new(Size::new(375.0, 812.0)).with_safe_area(Insets::new(0.0, 44.0, 0.0, 34.0))
    }

    fn sheet() -> ActionSheet<Item> {
        let mut sheet = ActionSheet::with_config(SheetConfig::sheet(), phone());
        sheet.add_item(Item::new(ItemTag(0), 57.0).required());
        sheet.add_item(Item::new(ItemTag(1), 57.0));
        sheet.take_events();
        sheet
    }

    #[test]
    fn first_layout_uses_the_geometry_budget() {
        let sheet = sheet();
        assert_eq!(sheet.allocation().budget, 633.0);
        assert_eq!(sheet.allocation().content_height, 114.0);
        let frame = sheet.frame();
        assert_eq!(frame.content, Rect::new(10.0, 587.0, 365.0, 701.0));
        assert_eq!(frame.cancel, Some(Rect::new(10.0, 711.0, 365.0, 768.0)));
    }

    #[test]
    fn cancel_tap_needs_a_cancel_row() {
        let mut alert: ActionSheet<Item> = ActionSheet::with_config(SheetConfig::alert(), phone());
        alert.present(Some(SurfaceHandle(1)), Some(SurfaceHandle(2)));
        alert.advance(Duration::from_secs(1));
        assert!(!alert.tap_cancel());
        assert!(alert.tap_background());
    }

    #[test]
    fn resting_position_follows_layout() {
        let sheet = sheet();
        assert_eq!(sheet.gesture().resting(), sheet.geometry().margin.center());
    }
}
