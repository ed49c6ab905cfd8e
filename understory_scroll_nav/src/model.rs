// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core extent model trait and visible range helpers.

use core::ops::RangeInclusive;

use crate::fixed_visible_range;

/// Inclusive range of item indices intersecting the viewport.
///
/// `start <= end` always holds. An empty strip is represented by `None` at the
/// call sites that compute ranges, never by a degenerate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// First visible index.
    pub start: usize,
    /// Last visible index (inclusive).
    pub end: usize,
}

impl VisibleRange {
    /// Creates a range, raising `end` to `start` if needed.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of indices in the range.
    ///
    /// A range built by hand with `end < start` is empty.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).saturating_add(1)
    }

    /// Returns `true` if `index` lies within the range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Iterator over the indices in the range.
    #[must_use]
    pub const fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// A 1D model over a dense strip of items, indexed `0..len`.
///
/// All extents are in the same coordinate space as scroll offsets (typically
/// logical pixels).
///
/// Methods that may consult per-item data take `&mut self` so implementations
/// are free to maintain internal caches without interior mutability.
pub trait ExtentModel {
    /// Number of items in this strip.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items in this strip.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of a single item.
    ///
    /// Implementations must return a non-negative value.
    fn extent_of(&mut self, index: usize) -> f64;

    /// The shared extent of every item, for models where all items are the
    /// same size.
    ///
    /// Returning `Some` lets range queries skip the per-item walk.
    fn uniform_extent(&self) -> Option<f64> {
        None
    }

    /// Total extent of the entire strip.
    fn total_extent(&mut self) -> f64 {
        if let Some(extent) = self.uniform_extent() {
            return extent * self.len() as f64;
        }
        (0..self.len()).map(|i| self.extent_of(i)).sum()
    }
}

/// An [`ExtentModel`] whose logical length can be resized.
pub trait ResizableExtentModel: ExtentModel {
    /// Ensures that the model can represent `len` items.
    fn set_len(&mut self, len: usize);
}

/// Computes the visible items of a strip with per-item extents.
///
/// Walks forward accumulating `extent_of(i)` until the running total passes
/// `scroll_offset` (the first visible item), then keeps walking until the
/// total reaches `scroll_offset + viewport_extent` (the last visible item).
/// Both indices are clamped to `0..item_count`.
///
/// This is `O(n)` in the index of the last visible item; use
/// [`fixed_visible_range`] when every item has the same extent.
///
/// Returns `None` when `item_count` is zero.
pub fn visible_range<F>(
    scroll_offset: f64,
    viewport_extent: f64,
    item_count: usize,
    mut extent_of: F,
) -> Option<VisibleRange>
where
    F: FnMut(usize) -> f64,
{
    if item_count == 0 {
        return None;
    }
    let last = item_count - 1;
    let offset = scroll_offset.max(0.0);
    let viewport_end = offset + viewport_extent.max(0.0);

    let mut running = 0.0;
    let mut start = None;
    for index in 0..item_count {
        running += extent_of(index).max(0.0);
        if running > offset {
            start = Some(index);
            break;
        }
    }
    // Scrolled past the end of the content.
    let Some(start) = start else {
        return Some(VisibleRange::new(last, last));
    };

    let mut end = start;
    while running < viewport_end && end < last {
        end += 1;
        running += extent_of(end).max(0.0);
    }

    Some(VisibleRange::new(start, end))
}

/// Computes the visible items of `model`.
///
/// Uses the `O(1)` uniform form when the model reports a uniform extent and
/// the per-item walk otherwise.
pub fn compute_visible_range<M>(
    model: &mut M,
    scroll_offset: f64,
    viewport_extent: f64,
) -> Option<VisibleRange>
where
    M: ExtentModel + ?Sized,
{
    let len = model.len();
    match model.uniform_extent() {
        Some(extent) => fixed_visible_range(scroll_offset, viewport_extent, len, extent),
        None => visible_range(scroll_offset, viewport_extent, len, |i| model.extent_of(i)),
    }
}
