// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_nav --heading-base-level=0

//! Understory Scroll Nav: extent estimation and item navigation for virtualized lists and grids.
//!
//! Hosts that render large lists and grids lazily often do not know how tall an
//! item or a row is until it has been laid out, yet still need to answer "where
//! do I scroll to show item N?". This crate provides a small, renderer-agnostic
//! core for that:
//!
//! - [`ScrollPositionEstimator`]: derives an effective item or row extent from
//!   whatever is known, be it an explicit [`LayoutConfig`] value, full grid
//!   geometry, or just the live [`ScrollMetrics`].
//! - [`ItemNavigator`]: scroll-to-item and jump-to-item over a host
//!   [`Viewport`], including a verification pass that corrects grid landings
//!   once the animation has settled. Newer requests supersede older ones.
//! - [`visible_range`] and [`fixed_visible_range`]: which items intersect the
//!   viewport, for variable and uniform extents. [`ExtentModel`],
//!   [`FixedExtentModel`] and [`GridTrackModel`] wrap these for hosts that keep
//!   a model around.
//! - Cache sizing helpers such as [`optimal_cache_extent`] and
//!   [`should_keep_in_cache`] to size the materialization window.
//!
//! This crate deliberately does **not** know about widgets or any particular UI
//! framework. Host frameworks are responsible for:
//!
//! - Implementing [`Viewport`] (read metrics, animate, jump) and [`Timer`].
//! - Materializing the items in the visible range plus the cache window.
//!
//! ## Minimal example
//!
//! Visible items and a cache window for a uniform list:
//!
//! ```rust
//! use understory_scroll_nav::{fixed_visible_range, optimal_cache_extent, VisibleRange};
//!
//! // 100 items, 60 logical pixels each, scrolled 300px into a 600px viewport.
//! let range = fixed_visible_range(300.0, 600.0, 100, 60.0);
//! assert_eq!(range, Some(VisibleRange { start: 5, end: 14 }));
//!
//! // Two viewports' worth of items, capped at 1000px.
//! assert_eq!(optimal_cache_extent(600.0, 100, 60.0), 1000.0);
//! ```
//!
//! ## Navigating a grid
//!
//! The navigator only needs a [`Viewport`] and a [`Timer`]. A host that
//! animates instantly could look like this:
//!
//! ```rust
//! use core::cell::Cell;
//! use core::future::{ready, Future};
//! use core::time::Duration;
//! use understory_scroll_nav::{
//!     Curve, EdgeInsets, ItemNavigator, LayoutConfig, NavigationOutcome, NavigationRequest,
//!     ScrollMetrics, Timer, Viewport,
//! };
//!
//! struct Instant(Cell<ScrollMetrics>);
//!
//! impl Viewport for Instant {
//!     fn has_clients(&self) -> bool {
//!         true
//!     }
//!     fn metrics(&self) -> Option<ScrollMetrics> {
//!         Some(self.0.get())
//!     }
//!     fn animate_to(&self, offset: f64, _: Duration, _: Curve) -> impl Future<Output = ()> {
//!         self.jump_to(offset);
//!         ready(())
//!     }
//!     fn jump_to(&self, offset: f64) {
//!         let metrics = self.0.get();
//!         self.0.set(metrics.with_offset(metrics.clamp_offset(offset)));
//!     }
//! }
//!
//! struct NoDelay;
//!
//! impl Timer for NoDelay {
//!     fn delay(&self, _: Duration) -> impl Future<Output = ()> {
//!         ready(())
//!     }
//! }
//!
//! // 400 items in 4 columns: 100 rows of 96px plus 4px spacing.
//! let layout = LayoutConfig::builder()
//!     .cross_axis_count(4)
//!     .item_count(400)
//!     .main_axis_spacing(4.0)
//!     .child_aspect_ratio(1.0)
//!     .padding(EdgeInsets::default())
//!     .build()
//!     .unwrap();
//! let content = 100.0 * 96.0 + 99.0 * 4.0;
//! let viewport = Instant(Cell::new(ScrollMetrics::new(0.0, 500.0, content - 500.0)));
//! let navigator = ItemNavigator::new(&viewport, NoDelay, layout);
//!
//! // Item 42 lives in row 10; rows are 100px apart, less a 2px rounding bias.
//! let outcome = pollster::block_on(navigator.scroll_to_item(NavigationRequest::new(42)));
//! assert_eq!(outcome, NavigationOutcome::Completed { offset: 998.0 });
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels).

mod cache;
mod curve;
mod estimator;
mod fixed;
mod grid_track;
mod layout;
mod metrics;
mod model;
mod navigator;
mod viewport;

pub use cache::{
    DEFAULT_MAX_CACHE_EXTENT, DEFAULT_MAX_VELOCITY, DEFAULT_MIN_CACHE_EXTENT,
    estimated_total_extent, intelligent_cache_extent, optimal_cache_extent,
    optimal_cache_extent_within, should_keep_in_cache,
};
pub use curve::{Curve, ScrollAnimation};
pub use estimator::{
    DEFAULT_ITEM_EXTENT, DEFAULT_ROW_EXTENT, MAX_ESTIMATED_ROW_EXTENT, MIN_ESTIMATED_ROW_EXTENT,
    ScrollPositionEstimator,
};
pub use fixed::{FixedExtentModel, fixed_visible_range};
pub use grid_track::GridTrackModel;
pub use layout::{EdgeInsets, LayoutConfig, LayoutConfigBuilder, LayoutError};
pub use metrics::ScrollMetrics;
pub use model::{
    ExtentModel, ResizableExtentModel, VisibleRange, compute_visible_range, visible_range,
};
pub use navigator::{
    CancelHandle, ItemNavigator, NavigationOutcome, NavigationRequest, NavigatorTuning,
};
pub use viewport::{Timer, Viewport};
