// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet_layout --heading-base-level=0

//! Understory Sheet Layout: fit an ordered list of rows into a height budget.
//!
//! Action sheets and alerts show a variable list of rows inside a viewport whose usable height
//! changes at runtime (rotation, keyboard, safe areas, a fixed cancel row). This crate decides,
//! for a given budget, which rows are shown, at what height, and which rows are sacrificed first.
//!
//! - [`SheetItem`]: the contract a row implements (flags, priority, height, shrink, shown state).
//! - [`Item`]: a ready-made row with a [`ResizePolicy`] and an optional payload.
//! - [`allocate`] / [`allocate_by`]: the height allocator. Returns an [`Allocation`] summary.
//! - [`SheetModel`]: an ordered item container with [`LayoutHooks`] and queued [`ModelRequest`]s.
//! - [`sheet_geometry`]: turns a [`Viewport`] and [`SheetMetrics`] into frames and a content budget.
//!
//! ## Allocation rules
//!
//! 1. Required items are walked in display order. An item that would overflow the budget is asked
//!    to shrink to what is left; whatever height results is kept and the item stays shown.
//! 2. If nothing is left, every optional item is hidden.
//! 3. Otherwise optional items are visited by priority (highest first, stable for ties). Each one
//!    is shown at full height if it fits, shown shrunk if it can shrink into what is left, and hidden
//!    otherwise. A hidden item does not stop a later, smaller item from fitting.
//!
//! Required items that cannot shrink enough are kept at their resulting height even though the sum
//! then exceeds the budget. This is reported through [`Allocation::overflow`] and never corrected.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_sheet_layout::{Item, ItemTag, SheetItem, allocate};
//!
//! let mut items = vec![
//!     Item::new(ItemTag(0), 50.0).required(),
//!     Item::new(ItemTag(1), 40.0).with_priority(1),
//!     Item::new(ItemTag(2), 40.0).with_priority(2),
//! ];
//!
//! let allocation = allocate(&mut items, 90.0);
//! assert!(items[0].is_shown());
//! assert!(!items[1].is_shown());
//! assert!(items[2].is_shown());
//! assert_eq!(allocation.content_height, 90.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod allocate;
mod item;
mod metrics;
mod model;

pub use allocate::{Allocation, VisibilityChange, allocate, allocate_by, by_priority};
pub use item::{Item, ItemFlags, ItemTag, ResizePolicy, SheetItem};
pub use metrics::{
    SheetGeometry, SheetMetrics, SurfaceStyle, Viewport, clamp_scroll_offset, sheet_geometry,
};
pub use model::{LayoutHooks, ModelOptions, ModelRequest, NoHooks, SheetModel};
