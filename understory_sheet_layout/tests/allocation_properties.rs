// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the height allocator.

use proptest::prelude::*;
use understory_sheet_layout::{Item, ItemTag, SheetItem, allocate};

#[derive(Clone, Debug)]
struct Row {
    required: bool,
    priority: i32,
    height: f64,
    min_height: Option<f64>,
}

fn row() -> impl Strategy<Value = Row> {
    (
        any::<bool>(),
        0..4_i32,
        0.0..120.0_f64,
        proptest::option::of(0.0..1.0_f64),
    )
        .prop_map(|(required, priority, height, min)| Row {
            required,
            priority,
            height,
            min_height: min.map(|f| f * height),
        })
}

fn build(rows: &[Row]) -> Vec<Item> {
    rows.iter()
        .enumerate()
        .map(|(i, r)| {
            let mut item = Item::new(ItemTag(i as i32), r.height).with_priority(r.priority);
            if r.required {
                item = item.required();
            }
            if let Some(min) = r.min_height {
                item = item.shrinkable(min);
            }
            item
        })
        .collect()
}

fn shown_optional(items: &[Item]) -> Vec<bool> {
    items
        .iter()
        .filter(|i| !i.is_required())
        .map(SheetItem::is_shown)
        .collect()
}

proptest! {
    #[test]
    fn shown_heights_fit_unless_required_overflow(
        rows in proptest::collection::vec(row(), 0..12),
        budget in 0.0..600.0_f64,
    ) {
        let mut items = build(&rows);
        let a = allocate(&mut items, budget);
        let shown: f64 = items.iter().filter(|i| i.is_shown()).map(SheetItem::height).sum();
        if a.is_overflowing() {
            // Only required rows may be shown once they overflow.
            prop_assert!(items.iter().filter(|i| i.is_shown()).all(SheetItem::is_required));
        } else {
            prop_assert!(shown <= budget + 1e-9, "shown {shown} > budget {budget}");
        }
    }

    #[test]
    fn required_rows_always_shown(
        rows in proptest::collection::vec(row(), 0..12),
        budget in 0.0..600.0_f64,
    ) {
        let mut items = build(&rows);
        allocate(&mut items, budget);
        prop_assert!(items.iter().filter(|i| i.is_required()).all(SheetItem::is_shown));
    }

    #[test]
    fn allocation_is_idempotent(
        rows in proptest::collection::vec(row(), 0..12),
        budget in 0.0..600.0_f64,
    ) {
        let mut items = build(&rows);
        allocate(&mut items, budget);
        let first: Vec<(bool, f64)> = items.iter().map(|i| (i.is_shown(), i.height())).collect();
        allocate(&mut items, budget);
        let second: Vec<(bool, f64)> = items.iter().map(|i| (i.is_shown(), i.height())).collect();
        prop_assert_eq!(first, second);
    }

    // When higher-priority rows are never taller than lower-priority rows, the shown set is a
    // prefix of the survival order and can only grow with the budget.
    #[test]
    fn visibility_is_monotonic_in_budget(
        required in proptest::collection::vec(0.0..80.0_f64, 0..3),
        mut optional in proptest::collection::vec(1.0..80.0_f64, 0..10),
        small in 0.0..500.0_f64,
        extra in 0.0..300.0_f64,
    ) {
        optional.sort_by(f64::total_cmp);
        let mut rows: Vec<Row> = required
            .iter()
            .map(|&height| Row { required: true, priority: 0, height, min_height: None })
            .collect();
        let count = optional.len() as i32;
        rows.extend(optional.iter().enumerate().map(|(i, &height)| Row {
            required: false,
            priority: count - i as i32,
            height,
            min_height: None,
        }));

        let mut low = build(&rows);
        let mut high = build(&rows);
        allocate(&mut low, small);
        allocate(&mut high, small + extra);
        for (lo, hi) in shown_optional(&low).into_iter().zip(shown_optional(&high)) {
            prop_assert!(!lo || hi, "row shown at the smaller budget but hidden at the larger");
        }
    }

    #[test]
    fn equal_priorities_fill_in_display_order(
        count in 1..10_usize,
        budget in 0.0..300.0_f64,
    ) {
        let rows = vec![
            Row { required: false, priority: 0, height: 50.0, min_height: None };
            count
        ];
        let mut items = build(&rows);
        allocate(&mut items, budget);
        let shown = shown_optional(&items);
        let first_hidden = shown.iter().position(|s| !s).unwrap_or(shown.len());
        prop_assert!(shown[first_hidden..].iter().all(|s| !s));
        let expected = (0..=count).rev().find(|&k| k as f64 * 50.0 <= budget).unwrap_or(0);
        prop_assert_eq!(first_hidden, expected);
    }
}

#[test]
fn zero_budget_keeps_fixed_required_height() {
    let mut items = vec![
        Item::new(ItemTag(0), 57.0).required(),
        Item::new(ItemTag(1), 10.0),
    ];
    let a = allocate(&mut items, 0.0);
    assert!(items[0].is_shown());
    assert_eq!(items[0].height(), 57.0);
    assert!(!items[1].is_shown());
    assert_eq!(a.overflow, 57.0);
}
