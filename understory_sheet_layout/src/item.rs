// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Items: the rows a sheet lays out, their flags, and how they shrink.

bitflags::bitflags! {
    /// Per-item flags consulted by the allocator.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item stays shown whenever the allocator runs; it may shrink but is never hidden.
        const REQUIRED   = 0b0000_0001;
        /// Item is hidden by the host. The allocator skips it and reports it as not shown.
        const SUPPRESSED = 0b0000_0010;
    }
}

/// Opaque identifier of an item, unique within one sheet.
///
/// The host picks the values. Negative tags are conventionally used for chrome rows
/// such as the cancel row.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ItemTag(pub i32);

/// The contract between the allocator and a row.
///
/// The allocator owns the shown state and the allocated height of every item it visits.
/// Items only answer how tall they are and whether they can shrink into a given height.
pub trait SheetItem {
    /// Flags controlling how the allocator treats this item.
    fn flags(&self) -> ItemFlags;

    /// Survival priority for optional items. Higher survives longer under pressure.
    ///
    /// Only used by the default ordering ([`by_priority`](crate::by_priority)); display order is
    /// always the insertion order.
    fn priority(&self) -> i32 {
        0
    }

    /// Current allocated height. Never negative.
    fn height(&self) -> f64;

    /// Return to the preferred (unshrunk) height.
    ///
    /// Called at the start of every allocation pass so that a larger budget can re-grow items
    /// shrunk by an earlier pass. Items that never shrink can keep the default no-op.
    fn restore_height(&mut self) {}

    /// Try to fit into `available`.
    ///
    /// Returns `true` if the item now has a usable height. The height may be changed even when
    /// this returns `false`; the allocator restores hidden items afterwards.
    fn change_height(&mut self, available: f64) -> bool;

    /// Whether the item is currently shown.
    fn is_shown(&self) -> bool;

    /// Set the shown state. Views observing the item react to changes here.
    fn set_shown(&mut self, shown: bool);

    /// Shorthand for [`ItemFlags::REQUIRED`].
    fn is_required(&self) -> bool {
        self.flags().contains(ItemFlags::REQUIRED)
    }

    /// Shorthand for [`ItemFlags::SUPPRESSED`].
    fn is_suppressed(&self) -> bool {
        self.flags().contains(ItemFlags::SUPPRESSED)
    }
}

/// How an [`Item`] reacts to [`SheetItem::change_height`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ResizePolicy {
    /// Fixed height. Shrinking always fails.
    #[default]
    Fixed,
    /// May shrink down to `min_height`, never below.
    Shrinkable {
        /// Smallest height at which the item is still meaningful.
        min_height: f64,
    },
}

/// A general purpose row.
///
/// ```
/// use understory_sheet_layout::{Item, ItemTag, SheetItem};
///
/// let mut row = Item::new(ItemTag(3), 120.0).shrinkable(60.0);
/// assert!(row.change_height(80.0));
/// assert_eq!(row.height(), 80.0);
/// assert!(!row.change_height(40.0));
/// row.restore_height();
/// assert_eq!(row.height(), 120.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Item<P = ()> {
    /// Host identifier.
    pub tag: ItemTag,
    /// Allocation flags.
    pub flags: ItemFlags,
    /// Survival priority for optional items.
    pub priority: i32,
    /// Shrink behavior.
    pub resize: ResizePolicy,
    /// Host data carried alongside the row (title, action, and so on).
    pub payload: P,
    preferred_height: f64,
    height: f64,
    shown: bool,
}

impl Item<()> {
    /// Create an optional, fixed-height item without payload.
    pub fn new(tag: ItemTag, height: f64) -> Self {
        Self::with_payload(tag, height, ())
    }
}

impl<P> Item<P> {
    /// Create an optional, fixed-height item carrying `payload`.
    ///
    /// Items start shown; the first allocation pass decides otherwise.
    pub fn with_payload(tag: ItemTag, height: f64, payload: P) -> Self {
        let height = height.max(0.0);
        Self {
            tag,
            flags: ItemFlags::empty(),
            priority: 0,
            resize: ResizePolicy::Fixed,
            payload,
            preferred_height: height,
            height,
            shown: true,
        }
    }

    /// Mark the item as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.flags.insert(ItemFlags::REQUIRED);
        self
    }

    /// Set the survival priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Allow shrinking down to `min_height` (clamped to `[0, preferred]`).
    #[must_use]
    pub fn shrinkable(mut self, min_height: f64) -> Self {
        self.resize = ResizePolicy::Shrinkable {
            min_height: min_height.clamp(0.0, self.preferred_height),
        };
        self
    }

    /// Mark the item as suppressed by the host.
    #[must_use]
    pub fn suppressed(mut self) -> Self {
        self.flags.insert(ItemFlags::SUPPRESSED);
        self
    }

    /// Toggle host suppression.
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.flags.set(ItemFlags::SUPPRESSED, suppressed);
    }

    /// Height the item asks for when space is not scarce.
    pub fn preferred_height(&self) -> f64 {
        self.preferred_height
    }

    /// Change the preferred height. The current height follows.
    pub fn set_preferred_height(&mut self, height: f64) {
        self.preferred_height = height.max(0.0);
        self.height = self.preferred_height;
        if let ResizePolicy::Shrinkable { min_height } = &mut self.resize {
            *min_height = min_height.min(self.preferred_height);
        }
    }
}

impl<P> SheetItem for Item<P> {
    fn flags(&self) -> ItemFlags {
        self.flags
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn restore_height(&mut self) {
        self.height = self.preferred_height;
    }

    fn change_height(&mut self, available: f64) -> bool {
        match self.resize {
            ResizePolicy::Fixed => false,
            ResizePolicy::Shrinkable { min_height } => {
                if available < min_height {
                    return false;
                }
                self.height = available.min(self.preferred_height);
                true
            }
        }
    }

    fn is_shown(&self) -> bool {
        self.shown
    }

    fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }
}
