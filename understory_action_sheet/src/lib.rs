// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_action_sheet --heading-base-level=0

//! Understory Action Sheet: a headless controller for action sheets and alerts.
//!
//! [`ActionSheet`] wires [`understory_sheet_layout`] and [`understory_sheet_motion`] together the
//! way a toolkit integration drives them:
//!
//! - viewport, safe area, keyboard, and rotation changes recompute the content budget and re-run
//!   the height allocator;
//! - `present`, `dismiss`, background and cancel taps, and model requests go through the
//!   transition machine and its guards;
//! - pan samples go through the drag-to-dismiss coordinator.
//!
//! The host renders [`ActionSheet::frame`] each frame, calls [`ActionSheet::advance`] with the
//! frame time, and reacts to the returned [`SheetEvent`]s.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Insets, Size, Vec2};
//! use understory_action_sheet::{ActionSheet, SheetConfig, SheetEvent};
//! use understory_sheet_layout::{Item, ItemTag, Viewport};
//! use understory_sheet_motion::{PanSample, SurfaceHandle};
//!
//! let viewport = Viewport::new(Size::new(375.0, 812.0))
//!     .with_safe_area(Insets::new(0.0, 44.0, 0.0, 34.0));
//! let mut sheet = ActionSheet::with_config(SheetConfig::sheet(), viewport);
//! sheet.add_item(Item::new(ItemTag(0), 33.0).required());
//! sheet.add_item(Item::new(ItemTag(1), 57.0));
//!
//! sheet.present(Some(SurfaceHandle(1)), Some(SurfaceHandle(2)));
//! sheet.advance(Duration::from_millis(350));
//!
//! // A quick downward flick dismisses.
//! sheet.handle_pan(PanSample::began());
//! sheet.handle_pan(PanSample::changed(Vec2::new(0.0, 120.0)));
//! sheet.handle_pan(PanSample::ended(Vec2::new(0.0, 120.0), Vec2::new(0.0, 800.0)));
//! let events = sheet.advance(Duration::from_millis(350));
//! assert!(events.iter().any(|e| e.dismissed() == Some(false)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod event;

pub use config::{SheetConfig, SheetOptions};
pub use controller::ActionSheet;
pub use event::{KeyboardChange, SheetEvent, SheetFrame};
