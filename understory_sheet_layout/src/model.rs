// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The alert model: ordered items, host hooks around allocation, and queued host requests.
//!
//! ## Requests instead of back-references
//!
//! A model never calls into the surface that shows it. When it wants the surface to re-run
//! layout or to go away, it queues a [`ModelRequest`]. The owner drains the queue with
//! [`SheetModel::take_requests`] on its next pass and acts on each request in order.
//!
//! ```
//! use understory_sheet_layout::{Item, ItemTag, ModelRequest, SheetModel};
//!
//! let mut model = SheetModel::new();
//! model.add_item(Item::new(ItemTag(1), 57.0));
//! model.request_reload();
//! model.request_dismiss(true);
//!
//! assert_eq!(
//!     model.take_requests(),
//!     vec![ModelRequest::Reload, ModelRequest::Dismiss { programmatic: true }],
//! );
//! assert!(model.take_requests().is_empty());
//! ```

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::allocate::{Allocation, allocate_by, by_priority};
use crate::item::SheetItem;

/// Host-level switches carried by a model.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModelOptions {
    /// Use the full width in landscape instead of a centred portrait-width column.
    pub show_full_landscape: bool,
    /// Ignore keyboard show/hide notifications entirely.
    pub ignore_keyboard: bool,
    /// Dismiss (programmatically) when the application enters the background.
    pub hide_in_background: bool,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            show_full_landscape: true,
            ignore_keyboard: true,
            hide_in_background: true,
        }
    }
}

/// Something the model asks its surface to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModelRequest {
    /// Re-run allocation and layout after an external change to the items.
    Reload,
    /// Dismiss the surface. `programmatic` is reported back through the dismiss callback.
    Dismiss {
        /// True for a programmatic dismissal, false for a user-driven one.
        programmatic: bool,
    },
}

/// Hooks run around every allocation pass.
///
/// Both hooks default to no-ops. Use them for bookkeeping such as toggling
/// [`ItemFlags::SUPPRESSED`](crate::ItemFlags::SUPPRESSED) based on the budget.
pub trait LayoutHooks<T> {
    /// Runs before allocation with the budget about to be applied.
    fn check_items(&mut self, items: &mut [T], budget: f64) {
        let _ = (items, budget);
    }

    /// Runs after allocation.
    fn items_updated(&mut self, items: &[T], allocation: &Allocation) {
        let _ = (items, allocation);
    }
}

/// Hooks that do nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHooks;

impl<T> LayoutHooks<T> for NoHooks {}

/// Ordered item storage with the allocation entry points a surface needs.
///
/// Display order is insertion order. The survival order defaults to
/// [`by_priority`] and can be replaced with [`SheetModel::with_order`].
pub struct SheetModel<T, H = NoHooks> {
    items: Vec<T>,
    hooks: H,
    options: ModelOptions,
    order: fn(&T, &T) -> Ordering,
    content_height: f64,
    requests: Vec<ModelRequest>,
}

impl<T: SheetItem, H: core::fmt::Debug> core::fmt::Debug for SheetModel<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SheetModel")
            .field("len", &self.items.len())
            .field("hooks", &self.hooks)
            .field("options", &self.options)
            .field("content_height", &self.content_height)
            .field("requests", &self.requests)
            .finish_non_exhaustive()
    }
}

impl<T: SheetItem> SheetModel<T, NoHooks> {
    /// Create an empty model with default options and no hooks.
    pub fn new() -> Self {
        Self::with_hooks(NoHooks)
    }
}

impl<T: SheetItem> Default for SheetModel<T, NoHooks> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SheetItem, H: LayoutHooks<T>> SheetModel<T, H> {
    /// Create an empty model with the given hooks.
    pub fn with_hooks(hooks: H) -> Self {
        Self {
            items: Vec::new(),
            hooks,
            options: ModelOptions::default(),
            order: by_priority::<T>,
            content_height: 0.0,
            requests: Vec::new(),
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: ModelOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the survival order used for optional items.
    ///
    /// The function must be a total order; ties keep display order.
    #[must_use]
    pub fn with_order(mut self, order: fn(&T, &T) -> Ordering) -> Self {
        self.order = order;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ModelOptions {
        &self.options
    }

    /// Mutable access to the options.
    pub fn options_mut(&mut self) -> &mut ModelOptions {
        &mut self.options
    }

    /// The hooks.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the hooks.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Append an item and return its display index.
    pub fn add_item(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Remove and return the item at `index`, or `None` if out of range.
    pub fn remove_item(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Items in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable items in display order. Call [`SheetModel::request_reload`] after changing them.
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Index of the first item matching `pred`.
    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Budget used by the most recent pass.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Run the hooks and the allocator for `budget`, remembering the budget.
    pub fn update_items(&mut self, budget: f64) -> Allocation {
        self.content_height = budget;
        self.hooks.check_items(&mut self.items, budget);
        let allocation = allocate_by(&mut self.items, budget, self.order);
        self.hooks.items_updated(&self.items, &allocation);
        allocation
    }

    /// Re-run [`SheetModel::update_items`] with the last budget.
    pub fn refresh(&mut self) -> Allocation {
        self.update_items(self.content_height)
    }

    /// Ask the surface to re-run layout.
    pub fn request_reload(&mut self) {
        self.requests.push(ModelRequest::Reload);
    }

    /// Ask the surface to dismiss.
    pub fn request_dismiss(&mut self, programmatic: bool) {
        self.requests.push(ModelRequest::Dismiss { programmatic });
    }

    /// Notify the model that the application moved to the background.
    ///
    /// Queues a programmatic dismissal when [`ModelOptions::hide_in_background`] is set and
    /// returns whether it did.
    pub fn enter_background(&mut self) -> bool {
        if self.options.hide_in_background {
            self.request_dismiss(true);
        }
        self.options.hide_in_background
    }

    /// True if requests are waiting.
    pub fn has_requests(&self) -> bool {
        !self.requests.is_empty()
    }

    /// Drain queued requests in the order they were made.
    pub fn take_requests(&mut self) -> Vec<ModelRequest> {
        core::mem::take(&mut self.requests)
    }
}
