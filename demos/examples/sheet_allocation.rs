// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height allocation.
//!
//! Fit a title, a text field, and five actions into shrinking budgets and watch which rows
//! survive.
//!
//! Run:
//! - `cargo run -p understory_demos --example sheet_allocation`

use understory_sheet_layout::{Item, ItemTag, SheetItem, allocate};

fn main() {
    let mut items = vec![
        Item::with_payload(ItemTag(0), 33.0, "Title").required(),
        Item::with_payload(ItemTag(1), 120.0, "Message")
            .required()
            .shrinkable(57.0),
        Item::with_payload(ItemTag(2), 57.0, "Share").with_priority(5),
        Item::with_payload(ItemTag(3), 57.0, "Copy link").with_priority(4),
        Item::with_payload(ItemTag(4), 57.0, "Add to list").with_priority(2),
        Item::with_payload(ItemTag(5), 57.0, "Report").with_priority(1),
        Item::with_payload(ItemTag(6), 57.0, "Mute").with_priority(3),
    ];

    for budget in [500.0, 300.0, 200.0, 120.0, 60.0, 0.0] {
        let allocation = allocate(&mut items, budget);
        println!(
            "budget {budget:>5}: content {:>5}, overflow {:>4}",
            allocation.content_height, allocation.overflow
        );
        for item in &items {
            let mark = if item.is_shown() { "shown " } else { "hidden" };
            println!("  {mark} {:>5}  {}", item.height(), item.payload);
        }
        for change in &allocation.changes {
            let verb = if change.shown { "shows" } else { "hides" };
            println!("  -> row {} {verb}", change.index);
        }
    }
}
