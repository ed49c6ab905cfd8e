// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract a host scroll view implements for navigation.

use core::future::Future;
use core::time::Duration;

use crate::{Curve, ScrollMetrics};

/// A host scroll view the navigator can read and move.
///
/// Methods take `&self`: hosts typically hand out a cheap handle to state
/// owned by their UI tree and use interior mutability behind it.
pub trait Viewport {
    /// Returns `true` once the scroll view is attached and laid out.
    fn has_clients(&self) -> bool;

    /// Current scroll metrics, or `None` while content dimensions are unknown.
    fn metrics(&self) -> Option<ScrollMetrics>;

    /// Starts an animated scroll to `offset`.
    ///
    /// The returned future resolves when the animation finishes or is
    /// interrupted by another scroll.
    fn animate_to(&self, offset: f64, duration: Duration, curve: Curve) -> impl Future<Output = ()>;

    /// Moves to `offset` immediately.
    fn jump_to(&self, offset: f64);
}

/// Source of delays, usually backed by the host's frame scheduler.
pub trait Timer {
    /// Resolves after `duration` has elapsed.
    fn delay(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<V: Viewport + ?Sized> Viewport for &V {
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

impl<T: Timer + ?Sized> Timer for &T {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).delay(duration)
    }
}
