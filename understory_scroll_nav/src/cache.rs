// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing of the materialization window around the viewport.
//!
//! Hosts keep some content beyond the strictly visible range instantiated so
//! scrolling does not pop. These helpers size that window from the viewport,
//! the item count and, optionally, the current scroll velocity.

use crate::estimator::is_usable;

/// Lower bound used by [`optimal_cache_extent`].
pub const DEFAULT_MIN_CACHE_EXTENT: f64 = 100.0;

/// Upper bound used by [`optimal_cache_extent`].
pub const DEFAULT_MAX_CACHE_EXTENT: f64 = 1000.0;

/// Scroll speed at which [`intelligent_cache_extent`] reaches its full boost.
pub const DEFAULT_MAX_VELOCITY: f64 = 1000.0;

/// Item count above which very long lists get extra cache.
const LARGE_LIST_THRESHOLD: usize = 10_000;

/// Cache extent covering two viewports' worth of whole items, clamped to
/// `[100, 1000]`.
///
/// See [`optimal_cache_extent_within`] for custom bounds.
#[must_use]
pub fn optimal_cache_extent(viewport_extent: f64, item_count: usize, avg_item_extent: f64) -> f64 {
    optimal_cache_extent_within(
        viewport_extent,
        item_count,
        avg_item_extent,
        DEFAULT_MIN_CACHE_EXTENT,
        DEFAULT_MAX_CACHE_EXTENT,
    )
}

/// Cache extent covering two viewports' worth of whole items, clamped to
/// `[min, max]`.
///
/// Computes `ceil(viewport / avg) * avg * 2`. Returns `min` when there are no
/// items or the average extent is unusable.
///
/// A NaN or infinite `min` falls back to [`DEFAULT_MIN_CACHE_EXTENT`] and a
/// NaN `max` to [`DEFAULT_MAX_CACHE_EXTENT`]; `max = inf` leaves the result
/// uncapped.
#[must_use]
pub fn optimal_cache_extent_within(
    viewport_extent: f64,
    item_count: usize,
    avg_item_extent: f64,
    min: f64,
    max: f64,
) -> f64 {
    let min = if min.is_finite() {
        min.max(0.0)
    } else {
        DEFAULT_MIN_CACHE_EXTENT
    };
    let max = if max.is_nan() {
        DEFAULT_MAX_CACHE_EXTENT
    } else {
        max
    };
    let max = max.max(min);
    if item_count == 0 || !avg_item_extent.is_finite() || avg_item_extent <= 0.0 {
        return min;
    }
    let items_per_viewport = (viewport_extent.max(0.0) / avg_item_extent).ceil();
    (items_per_viewport * avg_item_extent * 2.0).clamp(min, max)
}

/// Estimates the total extent of `item_count` items.
///
/// In order of preference: `item_count * known_extent` when every item has
/// the same known extent, the mean of `measured` extrapolated to every item,
/// and finally `item_count * estimated_extent`.
///
/// Extents that are not finite and positive are skipped, so a bad
/// `known_extent` falls through to the measurements.
#[must_use]
pub fn estimated_total_extent(
    item_count: usize,
    estimated_extent: f64,
    known_extent: Option<f64>,
    measured: &[f64],
) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    let count = item_count as f64;
    if let Some(known) = known_extent.filter(|e| is_usable(*e)) {
        return count * known;
    }
    let (sum, samples) = measured
        .iter()
        .filter(|e| is_usable(**e))
        .fold((0.0, 0_usize), |(sum, n), e| (sum + e, n + 1));
    if samples > 0 {
        return count * (sum / samples as f64);
    }
    if is_usable(estimated_extent) {
        count * estimated_extent
    } else {
        0.0
    }
}

/// Scales `base` with scroll speed.
///
/// The factor grows linearly from 1 to 2 as `|velocity|` approaches
/// `max_velocity`, and is multiplied by 1.5 for lists longer than 10 000
/// items. The result is clamped to `[base, 2 * base]`.
#[must_use]
pub fn intelligent_cache_extent(
    base: f64,
    velocity: f64,
    item_count: usize,
    max_velocity: f64,
) -> f64 {
    if !base.is_finite() || base <= 0.0 {
        return base.max(0.0);
    }
    let speed = if max_velocity > 0.0 && velocity.is_finite() {
        (velocity.abs() / max_velocity).min(1.0)
    } else {
        0.0
    };
    let mut factor = 1.0 + speed;
    if item_count > LARGE_LIST_THRESHOLD {
        factor *= 1.5;
    }
    (base * factor).clamp(base, base * 2.0)
}

/// Returns `true` if `index` is within `cache_size` items of either edge of
/// the visible range.
///
/// Only the distance to the nearest boundary counts, so with a long visible
/// range an index deep inside it can be reported as outside the cache.
#[must_use]
pub fn should_keep_in_cache(
    index: usize,
    visible_start: usize,
    visible_end: usize,
    cache_size: usize,
) -> bool {
    let distance = index.abs_diff(visible_start).min(index.abs_diff(visible_end));
    distance <= cache_size
}
