// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-to-item and jump-to-item over a host [`Viewport`].
//!
//! Lists move straight to `index * item_extent`. Grids move to the row that
//! holds the item and, when asked to align that row to the top, re-check the
//! landing once the animation has settled: the row extent is an estimate, so
//! the first move can be off by a few pixels or a whole row. A second short
//! animation fixes that.
//!
//! Every navigation call starts a new *generation*. A pending verification
//! only issues its correction if no newer call (or [`ItemNavigator::cancel`])
//! happened in the meantime, so a stale correction never races a new target.

use core::cell::Cell;
use core::time::Duration;
use std::rc::Rc;

use crate::{Curve, LayoutConfig, ScrollMetrics, ScrollPositionEstimator, Timer, Viewport};

/// Slack when turning an offset back into a row index, so that an offset
/// exactly on a row boundary is not attributed to the row above.
const ROW_PROBE_EPSILON: f64 = 1e-6;

/// Tunable constants of the grid navigation path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigatorTuning {
    /// Subtracted from a non-zero grid row target when no padding is configured.
    pub row_correction: f64,
    /// Subtracted from a non-zero grid row target when padding is configured.
    pub padded_row_correction: f64,
    /// Wait between the end of the animation and the verification pass.
    pub settle_delay: Duration,
    /// Duration of the corrective animation.
    pub correction_duration: Duration,
    /// Easing of the corrective animation.
    pub correction_curve: Curve,
    /// Largest landing error accepted without correction.
    pub position_tolerance: f64,
}

impl NavigatorTuning {
    /// Correction applied to non-zero grid row targets.
    #[must_use]
    pub const fn row_correction_for(&self, padded: bool) -> f64 {
        if padded {
            self.padded_row_correction
        } else {
            self.row_correction
        }
    }
}

impl Default for NavigatorTuning {
    fn default() -> Self {
        Self {
            row_correction: 1.0,
            padded_row_correction: 2.0,
            settle_delay: Duration::from_millis(150),
            correction_duration: Duration::from_millis(200),
            correction_curve: Curve::Decelerate,
            position_tolerance: 5.0,
        }
    }
}

/// A request to bring an item into view with an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationRequest {
    /// Index of the item to show.
    pub index: usize,
    /// Duration of the animation.
    pub duration: Duration,
    /// Easing of the animation.
    pub curve: Curve,
    /// Verify and correct the landing so the item's row sits at the top.
    ///
    /// Only grids verify; lists land exactly on `index * item_extent`.
    pub align_to_top: bool,
}

impl NavigationRequest {
    /// Default animation duration.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    /// A request for `index` with the default duration and curve, aligned to top.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            duration: Self::DEFAULT_DURATION,
            curve: Curve::default(),
            align_to_top: true,
        }
    }

    /// Sets the animation duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the animation curve.
    #[must_use]
    pub const fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Enables or disables the verification pass.
    #[must_use]
    pub const fn with_align_to_top(mut self, align_to_top: bool) -> Self {
        self.align_to_top = align_to_top;
        self
    }
}

/// What a navigation call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationOutcome {
    /// The viewport had no attached client; nothing moved.
    Detached,
    /// The viewport was moved to `offset`.
    Completed {
        /// Final scroll offset.
        offset: f64,
    },
    /// The landing was off and a corrective animation was issued.
    Corrected {
        /// Offset after the first animation.
        from: f64,
        /// Offset the correction moved to.
        to: f64,
    },
    /// A newer navigation (or an explicit cancel) took over before this one
    /// finished.
    Superseded,
}

/// Cancels whatever navigation is pending on an [`ItemNavigator`].
///
/// Obtained from [`ItemNavigator::cancel_handle`]. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    generation: Rc<Cell<u64>>,
}

impl CancelHandle {
    /// Supersedes the pending navigation, if any.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

#[derive(Debug, Clone, Copy)]
struct GridTarget {
    offset: f64,
    correction: f64,
    precise: bool,
}

/// Moves a [`Viewport`] to items of a list or grid.
///
/// The layout decides the path: a [`LayoutConfig`] with a `cross_axis_count`
/// navigates by rows, anything else by items.
#[derive(Debug)]
pub struct ItemNavigator<V, T> {
    viewport: V,
    timer: T,
    estimator: ScrollPositionEstimator,
    tuning: NavigatorTuning,
    generation: Rc<Cell<u64>>,
}

impl<V: Viewport, T: Timer> ItemNavigator<V, T> {
    /// Creates a navigator with default tuning.
    #[must_use]
    pub fn new(viewport: V, timer: T, layout: LayoutConfig) -> Self {
        Self {
            viewport,
            timer,
            estimator: ScrollPositionEstimator::new(layout),
            tuning: NavigatorTuning::default(),
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Replaces the tuning constants.
    #[must_use]
    pub fn with_tuning(mut self, tuning: NavigatorTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Returns the estimator used for extents.
    #[must_use]
    pub const fn estimator(&self) -> &ScrollPositionEstimator {
        &self.estimator
    }

    /// Returns the tuning constants.
    #[must_use]
    pub const fn tuning(&self) -> &NavigatorTuning {
        &self.tuning
    }

    /// Supersedes any pending navigation.
    pub fn cancel(&self) {
        self.cancel_handle().cancel();
    }

    /// Returns a handle that can cancel pending navigations from elsewhere.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            generation: Rc::clone(&self.generation),
        }
    }

    /// Offset `scroll_to_item` would animate to for `index`, given the
    /// current metrics.
    #[must_use]
    pub fn target_offset(&self, index: usize) -> f64 {
        let metrics = self.viewport.metrics();
        match self.estimator.layout().cross_axis_count {
            None => self.list_target(index, metrics),
            Some(columns) => self.grid_target(index / columns.get(), metrics).offset,
        }
    }

    /// Animates the viewport so that `request.index` comes into view.
    ///
    /// Resolves once the animation (and, for aligned grid rows, the
    /// verification pass) is done. Dropping the future abandons the pending
    /// steps; the host may still finish an animation it already started.
    pub async fn scroll_to_item(&self, request: NavigationRequest) -> NavigationOutcome {
        if !self.viewport.has_clients() {
            log::debug!("scroll to item {} ignored, viewport detached", request.index);
            return NavigationOutcome::Detached;
        }
        let generation = self.begin();
        let metrics = self.viewport.metrics();

        let Some(columns) = self.estimator.layout().cross_axis_count else {
            let target = self.list_target(request.index, metrics);
            log::debug!("scroll to item {} at {target}", request.index);
            self.viewport
                .animate_to(target, request.duration, request.curve)
                .await;
            if !self.is_current(generation) {
                return NavigationOutcome::Superseded;
            }
            return NavigationOutcome::Completed { offset: target };
        };

        let row = request.index / columns.get();
        let target = self.grid_target(row, metrics);
        log::debug!(
            "scroll to item {} (row {row}) at {}",
            request.index,
            target.offset
        );
        self.viewport
            .animate_to(target.offset, request.duration, request.curve)
            .await;
        if !self.is_current(generation) {
            return NavigationOutcome::Superseded;
        }
        if !(target.precise && request.align_to_top) {
            return NavigationOutcome::Completed {
                offset: target.offset,
            };
        }

        self.timer.delay(self.tuning.settle_delay).await;
        if !self.is_current(generation) {
            log::debug!("verification of row {row} superseded");
            return NavigationOutcome::Superseded;
        }
        self.verify_row(generation, row, target.offset).await
    }

    /// Moves the viewport to `index` without animation.
    ///
    /// Grids with a known row count use the exact `max_extent / rows` stride.
    /// Any pending verification is superseded.
    pub fn jump_to_item(&self, index: usize) -> NavigationOutcome {
        if !self.viewport.has_clients() {
            log::debug!("jump to item {index} ignored, viewport detached");
            return NavigationOutcome::Detached;
        }
        self.begin();
        let metrics = self.viewport.metrics();

        let target = match self.estimator.layout().cross_axis_count {
            None => self.list_target(index, metrics),
            Some(columns) => {
                let row = index / columns.get();
                let extent = self
                    .estimator
                    .exact_row_extent(metrics)
                    .unwrap_or_else(|| self.estimator.effective_row_extent(metrics));
                clamp_target(metrics, row as f64 * extent)
            }
        };
        log::debug!("jump to item {index} at {target}");
        self.viewport.jump_to(target);
        NavigationOutcome::Completed { offset: target }
    }

    async fn verify_row(&self, generation: u64, row: usize, first: f64) -> NavigationOutcome {
        let Some(metrics) = self
            .viewport
            .metrics()
            .filter(|_| self.viewport.has_clients())
        else {
            return NavigationOutcome::Completed { offset: first };
        };

        let target = self.grid_target(row, Some(metrics));
        let row_extent = self.estimator.effective_row_extent(Some(metrics));
        let current = metrics.offset;
        // Not a plain `floor(current / row_extent)`: the target sits up to two
        // pixels above its row, so undo that bias before asking which row we
        // are on.
        let current_row =
            ((current + target.correction) / row_extent + ROW_PROBE_EPSILON).floor();
        let error = (current - target.offset).abs();

        if current_row == row as f64 && error <= self.tuning.position_tolerance {
            return NavigationOutcome::Completed { offset: current };
        }

        log::debug!(
            "row {row} landed at {current} (row {current_row}, error {error}), correcting to {}",
            target.offset
        );
        self.viewport
            .animate_to(
                target.offset,
                self.tuning.correction_duration,
                self.tuning.correction_curve,
            )
            .await;
        if !self.is_current(generation) {
            return NavigationOutcome::Superseded;
        }
        NavigationOutcome::Corrected {
            from: current,
            to: target.offset,
        }
    }

    fn list_target(&self, index: usize, metrics: Option<ScrollMetrics>) -> f64 {
        let extent = self.estimator.effective_item_extent(metrics);
        clamp_target(metrics, index as f64 * extent)
    }

    fn grid_target(&self, row: usize, metrics: Option<ScrollMetrics>) -> GridTarget {
        let layout = self.estimator.layout();
        let precise = metrics.is_some() && layout.item_count.is_some();
        let extent = self.estimator.effective_row_extent(metrics);

        let correction = if precise && row > 0 {
            self.tuning.row_correction_for(layout.padding.is_some())
        } else {
            0.0
        };
        GridTarget {
            offset: clamp_target(metrics, row as f64 * extent - correction),
            correction,
            precise,
        }
    }

    fn begin(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

fn clamp_target(metrics: Option<ScrollMetrics>, offset: f64) -> f64 {
    match metrics {
        Some(metrics) => metrics.clamp_offset(offset),
        None => offset.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;
    use core::future::{Future, ready};
    use core::num::NonZeroUsize;
    use core::time::Duration;
    use std::rc::Rc;

    use pollster::block_on;

    use super::{ItemNavigator, NavigationOutcome, NavigationRequest, NavigatorTuning};
    use crate::{
        Curve, EdgeInsets, LayoutConfig, ScrollMetrics, Timer, Viewport, fixed_visible_range,
    };

    #[derive(Debug, Default)]
    struct ViewportState {
        attached: bool,
        metrics: Option<ScrollMetrics>,
        /// Added to the next animation's landing offset, one entry per call.
        drift: Vec<f64>,
        /// Replaces the max extent after the first animation, as a relayout would.
        relayout_max: Option<f64>,
        animations: Vec<(f64, Duration, Curve)>,
        jumps: Vec<f64>,
    }

    #[derive(Debug, Default)]
    struct TestViewport {
        state: RefCell<ViewportState>,
    }

    impl TestViewport {
        fn attached(metrics: Option<ScrollMetrics>) -> Self {
            Self {
                state: RefCell::new(ViewportState {
                    attached: true,
                    metrics,
                    ..ViewportState::default()
                }),
            }
        }

        fn offset(&self) -> f64 {
            self.state.borrow().metrics.map_or(0.0, |m| m.offset)
        }

        fn animations(&self) -> Vec<(f64, Duration, Curve)> {
            self.state.borrow().animations.clone()
        }
    }

    impl Viewport for TestViewport {
        fn has_clients(&self) -> bool {
            self.state.borrow().attached
        }

        fn metrics(&self) -> Option<ScrollMetrics> {
            self.state.borrow().metrics
        }

        fn animate_to(
            &self,
            offset: f64,
            duration: Duration,
            curve: Curve,
        ) -> impl Future<Output = ()> {
            let mut state = self.state.borrow_mut();
            state.animations.push((offset, duration, curve));
            let drift = if state.drift.is_empty() {
                0.0
            } else {
                state.drift.remove(0)
            };
            let relayout = state.relayout_max.take();
            if let Some(metrics) = state.metrics.as_mut() {
                if let Some(max) = relayout {
                    metrics.max_extent = max;
                }
                metrics.offset = metrics.clamp_offset(offset + drift);
            }
            ready(())
        }

        fn jump_to(&self, offset: f64) {
            let mut state = self.state.borrow_mut();
            state.jumps.push(offset);
            if let Some(metrics) = state.metrics.as_mut() {
                metrics.offset = metrics.clamp_offset(offset);
            }
        }
    }

    #[derive(Default)]
    struct TestTimer {
        delays: RefCell<Vec<Duration>>,
        on_delay: RefCell<Option<Box<dyn FnMut()>>>,
    }

    impl TestTimer {
        fn on_delay(&self, hook: impl FnMut() + 'static) {
            *self.on_delay.borrow_mut() = Some(Box::new(hook));
        }
    }

    impl Timer for TestTimer {
        fn delay(&self, duration: Duration) -> impl Future<Output = ()> {
            self.delays.borrow_mut().push(duration);
            if let Some(hook) = self.on_delay.borrow_mut().as_mut() {
                hook();
            }
            ready(())
        }
    }

    impl Viewport for Rc<TestViewport> {
        fn has_clients(&self) -> bool {
            (**self).has_clients()
        }

        fn metrics(&self) -> Option<ScrollMetrics> {
            (**self).metrics()
        }

        fn animate_to(
            &self,
            offset: f64,
            duration: Duration,
            curve: Curve,
        ) -> impl Future<Output = ()> {
            (**self).animate_to(offset, duration, curve)
        }

        fn jump_to(&self, offset: f64) {
            (**self).jump_to(offset);
        }
    }

    impl Timer for Rc<TestTimer> {
        fn delay(&self, duration: Duration) -> impl Future<Output = ()> {
            (**self).delay(duration)
        }
    }

    fn columns(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// 10 000 items in 4 columns, 4 spacing, 16 top padding.
    fn grid_layout() -> LayoutConfig {
        LayoutConfig {
            cross_axis_count: Some(columns(4)),
            item_count: Some(10_000),
            main_axis_spacing: Some(4.0),
            child_aspect_ratio: Some(1.0),
            padding: Some(EdgeInsets::vertical(16.0, 0.0)),
            ..LayoutConfig::default()
        }
    }

    /// Metrics for 2500 rows of 100 plus 4 spacing and 16 top padding.
    fn grid_metrics() -> ScrollMetrics {
        let viewport = 800.0;
        let content = 2500.0 * 100.0 + 2499.0 * 4.0 + 16.0;
        ScrollMetrics::new(0.0, viewport, content - viewport)
    }

    #[test]
    fn detached_viewport_is_a_no_op() {
        let viewport = TestViewport::default();
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, LayoutConfig::list(80.0));

        assert_eq!(
            block_on(nav.scroll_to_item(NavigationRequest::new(10))),
            NavigationOutcome::Detached
        );
        assert_eq!(nav.jump_to_item(10), NavigationOutcome::Detached);
        assert!(viewport.animations().is_empty());
        assert!(viewport.state.borrow().jumps.is_empty());
    }

    #[test]
    fn list_scroll_targets_index_times_extent() {
        let viewport = TestViewport::attached(Some(ScrollMetrics::new(0.0, 600.0, 799_400.0)));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, LayoutConfig::list(80.0));

        let request = NavigationRequest::new(1000)
            .with_duration(Duration::from_millis(250))
            .with_curve(Curve::EaseOut);
        assert_eq!(
            block_on(nav.scroll_to_item(request)),
            NavigationOutcome::Completed { offset: 80_000.0 }
        );
        assert_eq!(
            viewport.animations(),
            [(80_000.0, Duration::from_millis(250), Curve::EaseOut)]
        );
        // Lists never wait for a verification pass.
        assert!(timer.delays.borrow().is_empty());
    }

    #[test]
    fn list_targets_are_clamped_to_scroll_range() {
        let viewport = TestViewport::attached(Some(ScrollMetrics::new(0.0, 600.0, 50_000.0)));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, LayoutConfig::list(80.0));

        assert_eq!(nav.target_offset(0), 0.0);
        assert_eq!(nav.target_offset(1000), 50_000.0);
        assert_eq!(nav.target_offset(9_999), 50_000.0);
        assert_eq!(
            block_on(nav.scroll_to_item(NavigationRequest::new(9_999))),
            NavigationOutcome::Completed { offset: 50_000.0 }
        );
    }

    #[test]
    fn list_scroll_brings_item_to_top_of_visible_range() {
        let viewport = TestViewport::attached(Some(ScrollMetrics::new(0.0, 600.0, 79_400.0)));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, LayoutConfig::list(80.0));

        for index in [0, 1, 17, 500, 990] {
            block_on(nav.scroll_to_item(NavigationRequest::new(index)));
            let range = fixed_visible_range(viewport.offset(), 600.0, 1000, 80.0).unwrap();
            assert_eq!(range.start, index, "index={index}");
        }
        // Near the end the offset clamps and the item is still in view.
        block_on(nav.scroll_to_item(NavigationRequest::new(999)));
        let range = fixed_visible_range(viewport.offset(), 600.0, 1000, 80.0).unwrap();
        assert!(range.contains(999));
    }

    #[test]
    fn list_without_metrics_uses_default_extent() {
        let viewport = TestViewport::attached(None);
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, LayoutConfig::default());
        assert_eq!(
            block_on(nav.scroll_to_item(NavigationRequest::new(3))),
            NavigationOutcome::Completed { offset: 240.0 }
        );
    }

    #[test]
    fn grid_scroll_applies_padded_row_correction() {
        let metrics = grid_metrics();
        let viewport = TestViewport::attached(Some(metrics));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());

        // Row stride is (content - 16 + 4) / 2500 = 104; row 250.
        let expected = 250.0 * 104.0 - 2.0;
        let outcome = block_on(nav.scroll_to_item(NavigationRequest::new(1000)));
        let NavigationOutcome::Completed { offset } = outcome else {
            panic!("expected a completed navigation, got {outcome:?}");
        };
        assert!((offset - expected).abs() < 1e-6, "got {offset}");
        // Landed exactly: the verification pass ran but did not correct.
        assert_eq!(viewport.animations().len(), 1);
        assert_eq!(*timer.delays.borrow(), [Duration::from_millis(150)]);
    }

    #[test]
    fn grid_row_zero_has_no_correction() {
        let viewport = TestViewport::attached(Some(grid_metrics()));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());
        assert_eq!(nav.target_offset(3), 0.0);
        assert_eq!(
            block_on(nav.scroll_to_item(NavigationRequest::new(0))),
            NavigationOutcome::Completed { offset: 0.0 }
        );
    }

    #[test]
    fn grid_without_padding_uses_smaller_correction() {
        let layout = LayoutConfig {
            padding: None,
            row_extent: Some(100.0),
            ..grid_layout()
        };
        let viewport = TestViewport::attached(Some(grid_metrics()));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, layout);
        assert_eq!(nav.target_offset(40), 999.0);
    }

    #[test]
    fn grid_last_row_clamps_to_max_extent() {
        let metrics = grid_metrics();
        let viewport = TestViewport::attached(Some(metrics));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());
        assert_eq!(nav.target_offset(9_999), metrics.max_extent);
    }

    #[test]
    fn drifted_landing_is_corrected() {
        let viewport = TestViewport::attached(Some(grid_metrics()));
        viewport.state.borrow_mut().drift.push(37.0);
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());

        let target = 250.0 * 104.0 - 2.0;
        let outcome = block_on(nav.scroll_to_item(NavigationRequest::new(1000)));
        let NavigationOutcome::Corrected { from, to } = outcome else {
            panic!("expected a correction, got {outcome:?}");
        };
        assert!((from - (target + 37.0)).abs() < 1e-6, "from {from}");
        assert!((to - target).abs() < 1e-6, "to {to}");

        let animations = viewport.animations();
        assert_eq!(animations.len(), 2);
        assert_eq!(animations[1].1, Duration::from_millis(200));
        assert_eq!(animations[1].2, Curve::Decelerate);
        assert!((viewport.offset() - target).abs() < 1e-6);
    }

    #[test]
    fn small_drift_within_tolerance_is_accepted() {
        let viewport = TestViewport::attached(Some(grid_metrics()));
        viewport.state.borrow_mut().drift.push(3.0);
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());

        let outcome = block_on(nav.scroll_to_item(NavigationRequest::new(1000)));
        assert!(matches!(outcome, NavigationOutcome::Completed { .. }), "{outcome:?}");
        assert_eq!(viewport.animations().len(), 1);
    }

    #[test]
    fn relayout_during_animation_is_corrected() {
        let metrics = grid_metrics();
        let viewport = TestViewport::attached(Some(metrics));
        // Rows grow from 100 to 120 while the first animation runs.
        let grown = 2500.0 * 120.0 + 2499.0 * 4.0 + 16.0 - metrics.viewport_extent;
        viewport.state.borrow_mut().relayout_max = Some(grown);
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());

        let outcome = block_on(nav.scroll_to_item(NavigationRequest::new(1000)));
        let NavigationOutcome::Corrected { to, .. } = outcome else {
            panic!("expected a correction, got {outcome:?}");
        };
        assert!((to - (250.0 * 124.0 - 2.0)).abs() < 1e-6, "to {to}");
    }

    #[test]
    fn no_verification_without_align_to_top() {
        let viewport = TestViewport::attached(Some(grid_metrics()));
        viewport.state.borrow_mut().drift.push(37.0);
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());

        let request = NavigationRequest::new(1000).with_align_to_top(false);
        let outcome = block_on(nav.scroll_to_item(request));
        assert!(matches!(outcome, NavigationOutcome::Completed { .. }), "{outcome:?}");
        assert!(timer.delays.borrow().is_empty());
        assert_eq!(viewport.animations().len(), 1);
    }

    #[test]
    fn grid_without_content_dimensions_skips_verification() {
        let viewport = TestViewport::attached(None);
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());

        // Default row extent, no correction constant.
        assert_eq!(
            block_on(nav.scroll_to_item(NavigationRequest::new(1000))),
            NavigationOutcome::Completed { offset: 25_000.0 }
        );
        assert!(timer.delays.borrow().is_empty());
    }

    #[test]
    fn superseded_request_skips_its_correction() {
        let viewport = TestViewport::attached(Some(grid_metrics()));
        viewport.state.borrow_mut().drift.push(37.0);
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());

        // A newer request arrives while the first one is settling.
        let handle = nav.cancel_handle();
        timer.on_delay(move || handle.cancel());

        assert_eq!(
            block_on(nav.scroll_to_item(NavigationRequest::new(1000))),
            NavigationOutcome::Superseded
        );
        assert_eq!(viewport.animations().len(), 1);
    }

    #[test]
    fn jump_during_settle_delay_supersedes_verification() {
        let viewport = Rc::new(TestViewport::attached(Some(grid_metrics())));
        // Without the jump this landing would be corrected.
        viewport.state.borrow_mut().drift.push(37.0);
        let timer = Rc::new(TestTimer::default());
        let nav = Rc::new(ItemNavigator::new(
            Rc::clone(&viewport),
            Rc::clone(&timer),
            grid_layout(),
        ));

        let second = Rc::downgrade(&nav);
        timer.on_delay(move || {
            if let Some(nav) = second.upgrade() {
                assert_eq!(nav.jump_to_item(0), NavigationOutcome::Completed { offset: 0.0 });
            }
        });

        assert_eq!(
            block_on(nav.scroll_to_item(NavigationRequest::new(1000))),
            NavigationOutcome::Superseded
        );
        let animations = viewport.animations();
        assert_eq!(animations.len(), 1);
        assert!(
            animations
                .iter()
                .all(|(_, duration, _)| *duration != Duration::from_millis(200))
        );
        assert_eq!(viewport.state.borrow().jumps, [0.0]);
        assert_eq!(viewport.offset(), 0.0);
    }

    #[test]
    fn grid_jump_uses_exact_stride() {
        let metrics = grid_metrics();
        let viewport = TestViewport::attached(Some(metrics));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout());

        let stride = metrics.max_extent / 2500.0;
        let outcome = nav.jump_to_item(1000);
        assert_eq!(outcome, NavigationOutcome::Completed { offset: 250.0 * stride });
        assert_eq!(viewport.state.borrow().jumps.len(), 1);
        assert!(viewport.animations().is_empty());

        assert_eq!(nav.jump_to_item(0), NavigationOutcome::Completed { offset: 0.0 });
    }

    #[test]
    fn list_jump_matches_scroll_target() {
        let viewport = TestViewport::attached(Some(ScrollMetrics::new(0.0, 600.0, 79_400.0)));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, LayoutConfig::list(80.0));
        assert_eq!(nav.jump_to_item(25), NavigationOutcome::Completed { offset: 2_000.0 });
        assert_eq!(viewport.offset(), 2_000.0);
    }

    #[test]
    fn tuning_overrides_constants() {
        let tuning = NavigatorTuning {
            padded_row_correction: 0.0,
            settle_delay: Duration::from_millis(40),
            ..NavigatorTuning::default()
        };
        let viewport = TestViewport::attached(Some(grid_metrics()));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, grid_layout()).with_tuning(tuning);

        assert!((nav.target_offset(1000) - 26_000.0).abs() < 1e-6);
        block_on(nav.scroll_to_item(NavigationRequest::new(1000)));
        assert_eq!(*timer.delays.borrow(), [Duration::from_millis(40)]);
        assert_eq!(nav.tuning().position_tolerance, 5.0);
    }

    #[test]
    fn grid_without_item_count_falls_back_to_default_rows() {
        let layout = LayoutConfig::grid(columns(3));
        let viewport = TestViewport::attached(Some(ScrollMetrics::new(0.0, 600.0, 90_000.0)));
        let timer = TestTimer::default();
        let nav = ItemNavigator::new(&viewport, &timer, layout);

        assert_eq!(
            block_on(nav.scroll_to_item(NavigationRequest::new(31))),
            NavigationOutcome::Completed { offset: 1_000.0 }
        );
        assert_eq!(nav.jump_to_item(31), NavigationOutcome::Completed { offset: 1_000.0 });
        assert!(timer.delays.borrow().is_empty());
    }
}
