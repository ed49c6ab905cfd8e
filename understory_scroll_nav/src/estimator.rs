// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effective item and row extents from partial layout information.
//!
//! The estimator never caches: content can resize between two calls, so every
//! query takes the live [`ScrollMetrics`] (or `None` before the first layout)
//! and recomputes from scratch. All results are finite and strictly positive.

use crate::{LayoutConfig, ScrollMetrics};

/// List item extent used before any scroll metrics are available.
pub const DEFAULT_ITEM_EXTENT: f64 = 80.0;

/// Grid row extent used before any scroll metrics are available.
pub const DEFAULT_ROW_EXTENT: f64 = 100.0;

/// Lower bound for row extents derived without full grid geometry.
pub const MIN_ESTIMATED_ROW_EXTENT: f64 = 50.0;

/// Upper bound for row extents derived without full grid geometry.
pub const MAX_ESTIMATED_ROW_EXTENT: f64 = 200.0;

/// Nominal item extent used to guess a list's item count from its scroll range.
const LIST_PROBE_EXTENT: f64 = 100.0;

/// A list must look longer than this many probe items before its scroll range
/// is trusted over the default extent.
const LIST_PROBE_MIN_COUNT: f64 = 100.0;

/// Derives the extents used for navigation from a [`LayoutConfig`].
///
/// Explicit configuration always wins. Without it, the estimate falls back
/// through progressively weaker sources: full grid geometry, the scroll range
/// divided by the row count, and finally fixed defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPositionEstimator {
    layout: LayoutConfig,
}

impl ScrollPositionEstimator {
    /// Creates an estimator for the given layout.
    #[must_use]
    pub const fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout this estimator reads.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Extent of a single list item.
    ///
    /// A configured `item_extent` is returned as is, provided it is finite and
    /// positive. Otherwise the scroll range is divided by a probe count
    /// `floor(max_extent / 100)` once that count exceeds 100.
    #[must_use]
    pub fn effective_item_extent(&self, metrics: Option<ScrollMetrics>) -> f64 {
        if let Some(extent) = self.layout.item_extent.filter(|e| is_usable(*e)) {
            return extent;
        }
        let Some(metrics) = metrics else {
            log::trace!("no scroll metrics, using default item extent");
            return DEFAULT_ITEM_EXTENT;
        };

        let max = metrics.max_scroll_offset();
        let probe_count = (max / LIST_PROBE_EXTENT).floor();
        if probe_count > LIST_PROBE_MIN_COUNT {
            let extent = max / probe_count;
            if is_usable(extent) {
                log::trace!("item extent {extent} from scroll range {max}");
                return extent;
            }
        }
        DEFAULT_ITEM_EXTENT
    }

    /// Extent of a single grid row, including the spacing that follows it.
    #[must_use]
    pub fn effective_row_extent(&self, metrics: Option<ScrollMetrics>) -> f64 {
        if let Some(extent) = self.layout.row_extent.filter(|e| is_usable(*e)) {
            return extent;
        }
        let Some(metrics) = metrics else {
            log::trace!("no scroll metrics, using default row extent");
            return DEFAULT_ROW_EXTENT;
        };

        if let Some(extent) = self.analytic_row_extent(metrics) {
            log::trace!("row extent {extent} from full grid geometry");
            return extent;
        }

        let Some(rows) = self.layout.total_rows().filter(|r| *r > 0) else {
            return DEFAULT_ROW_EXTENT;
        };
        let estimate = clamp_row_extent(metrics.max_scroll_offset() / rows as f64);

        // Calibrate against the current position, away from the edges where
        // the host clamps the offset.
        if !metrics.is_near_boundary() && metrics.offset > 0.0 {
            let row_index = (metrics.offset / estimate).floor();
            if row_index > 0.0 {
                let calibrated = clamp_row_extent(metrics.offset / row_index);
                log::trace!("row extent {calibrated} calibrated at row {row_index}");
                return calibrated;
            }
        }
        log::trace!("row extent {estimate} from {rows} rows");
        estimate
    }

    /// Exact row stride `max_extent / total_rows`, when the row count is known.
    ///
    /// Used for immediate jumps, which have no animation drift to compensate.
    #[must_use]
    pub fn exact_row_extent(&self, metrics: Option<ScrollMetrics>) -> Option<f64> {
        let metrics = metrics?;
        let rows = self.layout.total_rows().filter(|r| *r > 0)?;
        Some(metrics.max_scroll_offset() / rows as f64).filter(|e| is_usable(*e))
    }

    /// Rebuilds the row extent from content geometry.
    ///
    /// With `content = rows * row + (rows - 1) * spacing`, the row extent
    /// including its trailing spacing is `(content + spacing) / rows`.
    fn analytic_row_extent(&self, metrics: ScrollMetrics) -> Option<f64> {
        if !self.layout.has_full_grid_geometry() {
            return None;
        }
        let rows = self.layout.total_rows().filter(|r| *r > 0)?;
        let padding = self.layout.padding.unwrap_or_default();
        let spacing = self.layout.main_axis_spacing.unwrap_or(0.0);

        let content = metrics.content_extent() - padding.main_axis_total();
        Some((content + spacing) / rows as f64).filter(|e| is_usable(*e))
    }
}

pub(crate) fn is_usable(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}

fn clamp_row_extent(extent: f64) -> f64 {
    if extent.is_nan() {
        return DEFAULT_ROW_EXTENT;
    }
    extent.clamp(MIN_ESTIMATED_ROW_EXTENT, MAX_ESTIMATED_ROW_EXTENT)
}
