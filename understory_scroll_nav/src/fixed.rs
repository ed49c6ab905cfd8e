// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple extent model with uniform per-item extent.

use crate::{ExtentModel, ResizableExtentModel, VisibleRange};

/// Computes the visible items of a strip where every item has `extent`.
///
/// This is the `O(1)` form of [`visible_range`](crate::visible_range):
/// `floor(offset / extent)` through `ceil((offset + viewport) / extent) - 1`,
/// clamped to `0..item_count`.
///
/// Returns `None` when `item_count` is zero. A non-positive or non-finite
/// `extent` yields the first item only.
pub fn fixed_visible_range(
    scroll_offset: f64,
    viewport_extent: f64,
    item_count: usize,
    extent: f64,
) -> Option<VisibleRange> {
    if item_count == 0 {
        return None;
    }
    if !extent.is_finite() || extent <= 0.0 {
        return Some(VisibleRange::new(0, 0));
    }
    let last = item_count - 1;
    let offset = scroll_offset.max(0.0);
    let viewport_end = offset + viewport_extent.max(0.0);

    let start = index_from_ratio((offset / extent).floor()).min(last);
    let end = index_from_ratio((viewport_end / extent).ceil())
        .saturating_sub(1)
        .min(last);
    Some(VisibleRange::new(start, end))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Callers clamp the index immediately; negative and NaN ratios saturate to zero"
)]
fn index_from_ratio(ratio: f64) -> usize {
    ratio as usize
}

/// An [`ExtentModel`] where all items share the same extent.
#[derive(Debug, Clone, Copy)]
pub struct FixedExtentModel {
    len: usize,
    extent: f64,
}

impl FixedExtentModel {
    /// Creates a new model with `len` items of uniform `extent`.
    #[must_use]
    pub fn new(len: usize, extent: f64) -> Self {
        Self {
            len,
            // Clamp finite negative values to `0.0`. NaNs are preserved here;
            // callers are expected to avoid them and `set_extent` debug-asserts.
            extent: if extent.is_sign_negative() {
                0.0
            } else {
                extent
            },
        }
    }

    /// Sets the number of items in the strip.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Sets the uniform extent for all items.
    pub fn set_extent(&mut self, extent: f64) {
        debug_assert!(
            extent.is_finite(),
            "FixedExtentModel extents must be finite; got {extent:?}"
        );
        self.extent = if extent.is_sign_negative() {
            0.0
        } else {
            extent
        };
    }

    /// Returns the uniform extent for all items.
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Offset of the start of item `index`.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.extent
    }
}

impl ExtentModel for FixedExtentModel {
    fn len(&self) -> usize {
        self.len
    }

    fn extent_of(&mut self, _index: usize) -> f64 {
        self.extent
    }

    fn uniform_extent(&self) -> Option<f64> {
        Some(self.extent)
    }
}

impl ResizableExtentModel for FixedExtentModel {
    fn set_len(&mut self, len: usize) {
        self.set_len(len);
    }
}
