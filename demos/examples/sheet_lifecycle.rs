// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action sheet lifecycle.
//!
//! Present a sheet, raise the keyboard, rotate while the keyboard changes, and dismiss from the
//! background, printing the events and frames a host would consume.
//!
//! Run:
//! - `cargo run -p understory_demos --example sheet_lifecycle`

use std::time::Duration;

use kurbo::{Insets, Rect, Size};
use understory_action_sheet::{ActionSheet, KeyboardChange, SheetConfig, SheetEvent};
use understory_sheet_layout::{Item, ItemTag, ModelOptions, SheetModel, Viewport};
use understory_sheet_motion::SurfaceHandle;

const FRAME: Duration = Duration::from_millis(50);

fn run(sheet: &mut ActionSheet<Item<&'static str>>, label: &str, frames: usize) {
    println!("-- {label}");
    for event in sheet.take_events() {
        print_event(sheet, &event);
    }
    for _ in 0..frames {
        for event in sheet.advance(FRAME) {
            print_event(sheet, &event);
        }
    }
    let frame = sheet.frame();
    println!(
        "   state {:?}, cover {:.2}, offset {:.1}, content {:?}, cancel {:?}",
        sheet.state(),
        frame.cover_opacity,
        frame.offset.y,
        frame.content,
        frame.cancel
    );
}

fn print_event(sheet: &ActionSheet<Item<&'static str>>, event: &SheetEvent) {
    match event {
        SheetEvent::ItemShown(i) => println!("   shown  {}", sheet.items()[*i].payload),
        SheetEvent::ItemHidden(i) => println!("   hidden {}", sheet.items()[*i].payload),
        other => println!("   {other:?}"),
    }
}

fn main() {
    let viewport = Viewport::new(Size::new(375.0, 812.0))
        .with_safe_area(Insets::new(0.0, 44.0, 0.0, 34.0));
    let model = SheetModel::new().with_options(ModelOptions {
        ignore_keyboard: false,
        ..ModelOptions::default()
    });
    let mut sheet = ActionSheet::new(model, SheetConfig::sheet(), viewport);
    sheet.add_item(Item::with_payload(ItemTag(0), 33.0, "Rename").required());
    sheet.add_item(Item::with_payload(ItemTag(1), 57.0, "Name field").required());
    for (tag, title) in ["Save", "Duplicate", "Move", "Archive", "Delete"]
        .into_iter()
        .enumerate()
    {
        let tag = tag as i32;
        sheet.add_item(Item::with_payload(ItemTag(tag + 2), 57.0, title).with_priority(5 - tag));
    }

    sheet.present(Some(SurfaceHandle(1)), Some(SurfaceHandle(2)));
    run(&mut sheet, "present", 8);

    sheet.keyboard_will_show(KeyboardChange::new(
        Rect::new(0.0, 812.0, 375.0, 1148.0),
        Rect::new(0.0, 476.0, 375.0, 812.0),
    ));
    run(&mut sheet, "keyboard up", 8);

    sheet.begin_size_transition(Size::new(812.0, 375.0));
    sheet.keyboard_will_show(KeyboardChange::new(
        Rect::new(0.0, 375.0, 812.0, 575.0),
        Rect::new(0.0, 175.0, 812.0, 375.0),
    ));
    run(&mut sheet, "rotating (keyboard change held back)", 2);
    sheet.end_size_transition();
    run(&mut sheet, "rotation done", 8);

    sheet.enter_background();
    run(&mut sheet, "background", 8);
}
