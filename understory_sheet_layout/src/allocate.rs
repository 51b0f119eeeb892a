// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The height allocator.
//!
//! See the [crate docs](crate) for the rules. The allocator is synchronous and deterministic:
//! the same items, budget, and ordering always produce the same heights and shown states, so it
//! is safe to run on every layout pass.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::item::SheetItem;

/// An item whose shown state flipped during an allocation pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VisibilityChange {
    /// Index of the item in display order.
    pub index: usize,
    /// New shown state.
    pub shown: bool,
}

/// Summary of one allocation pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Allocation {
    /// Budget after clamping negatives (and NaN) to zero.
    pub budget: f64,
    /// Height consumed by required items.
    pub required_height: f64,
    /// Sum of the heights of every shown item.
    pub content_height: f64,
    /// Amount by which required items alone exceed the budget. Zero unless they overflow.
    pub overflow: f64,
    /// Items whose shown state changed, in display order.
    pub changes: Vec<VisibilityChange>,
}

impl Allocation {
    /// True when required items could not be squeezed into the budget.
    pub fn is_overflowing(&self) -> bool {
        self.overflow > 0.0
    }

    /// Budget left over after every shown item.
    pub fn remaining(&self) -> f64 {
        (self.budget - self.content_height).max(0.0)
    }
}

/// Default survival order: higher [`SheetItem::priority`] first.
pub fn by_priority<T: SheetItem>(a: &T, b: &T) -> Ordering {
    b.priority().cmp(&a.priority())
}

/// Allocate `budget` among `items` using [`by_priority`].
pub fn allocate<T: SheetItem>(items: &mut [T], budget: f64) -> Allocation {
    allocate_by(items, budget, by_priority)
}

/// Allocate `budget` among `items`, visiting optional items in the order given by `order`.
///
/// `order` must be a total order; items comparing [`Ordering::Less`] survive first. Ties keep
/// their display order.
pub fn allocate_by<T, F>(items: &mut [T], budget: f64, mut order: F) -> Allocation
where
    T: SheetItem,
    F: FnMut(&T, &T) -> Ordering,
{
    // Negative and NaN budgets become zero.
    let budget = if budget > 0.0 { budget } else { 0.0 };
    let before: Vec<bool> = items.iter().map(SheetItem::is_shown).collect();

    let mut required = Vec::new();
    let mut optional = Vec::new();
    for (index, item) in items.iter_mut().enumerate() {
        if item.is_suppressed() {
            item.set_shown(false);
            continue;
        }
        item.restore_height();
        if item.is_required() {
            required.push(index);
        } else {
            optional.push(index);
        }
    }

    let mut used = 0.0;
    for &index in &required {
        let item = &mut items[index];
        if used + item.height() > budget {
            // The result is kept either way; a failed shrink is the documented overflow.
            let _ = item.change_height((budget - used).max(0.0));
        }
        item.set_shown(true);
        used += item.height();
    }

    let mut remaining = budget - used;
    if remaining <= 0.0 {
        for &index in &optional {
            let item = &mut items[index];
            item.set_shown(false);
        }
    } else {
        // `sort_by` is stable, so equal priorities keep display order.
        optional.sort_by(|&a, &b| order(&items[a], &items[b]));
        for &index in &optional {
            let item = &mut items[index];
            let fits = remaining >= item.height()
                || (item.change_height(remaining) && item.height() <= remaining);
            if fits {
                remaining -= item.height();
                item.set_shown(true);
            } else {
                item.restore_height();
                item.set_shown(false);
            }
        }
    }

    let content_height: f64 = items
        .iter()
        .filter(|item| item.is_shown())
        .map(SheetItem::height)
        .sum();
    let changes = items
        .iter()
        .zip(before)
        .enumerate()
        .filter(|(_, (item, was_shown))| item.is_shown() != *was_shown)
        .map(|(index, (item, _))| VisibilityChange {
            index,
            shown: item.is_shown(),
        })
        .collect();

    Allocation {
        budget,
        required_height: used,
        content_height,
        overflow: (used - budget).max(0.0),
        changes,
    }
}
