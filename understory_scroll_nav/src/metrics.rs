// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot of a host viewport's scroll position.

/// Scroll metrics reported by the host viewport.
///
/// The host owns these values; the core only reads them. `offset` is usually
/// within `[min_extent, max_extent]`, but overscroll and in-flight content
/// changes can push it outside transiently, so every consumer clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset.
    pub offset: f64,
    /// Size of the visible window along the scroll axis.
    pub viewport_extent: f64,
    /// Smallest reachable scroll offset.
    pub min_extent: f64,
    /// Largest reachable scroll offset.
    pub max_extent: f64,
}

impl ScrollMetrics {
    /// Metrics with `min_extent` at zero.
    #[must_use]
    pub const fn new(offset: f64, viewport_extent: f64, max_extent: f64) -> Self {
        Self {
            offset,
            viewport_extent,
            min_extent: 0.0,
            max_extent,
        }
    }

    /// Returns a copy with a different offset.
    #[must_use]
    pub const fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Largest reachable offset, never below zero.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        self.max_extent.max(0.0)
    }

    /// Clamps `offset` into `[0, max_extent]`.
    #[must_use]
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Total extent of the scrollable content, `max_extent + viewport_extent`.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.max_scroll_offset() + self.viewport_extent.max(0.0)
    }

    /// Returns `true` if the offset is within one viewport of either end.
    ///
    /// Offsets this close to an edge say little about the row the viewport is
    /// on, since the host clamps there.
    #[must_use]
    pub fn is_near_boundary(&self) -> bool {
        let viewport = self.viewport_extent.max(0.0);
        self.offset <= self.min_extent + viewport || self.offset >= self.max_extent - viewport
    }
}
