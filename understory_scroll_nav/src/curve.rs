// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves and a small scroll tween.
//!
//! Navigation requests carry a [`Curve`]; the host decides how to animate.
//! [`ScrollAnimation`] is a ready-made tween hosts can sample once per frame
//! to implement [`Viewport::animate_to`](crate::Viewport::animate_to).

use core::time::Duration;

/// Easing applied to a scroll animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Starts slow, accelerates.
    EaseIn,
    /// Starts fast, slows down towards the end.
    EaseOut,
    /// Slow at both ends.
    #[default]
    EaseInOut,
    /// Quadratic deceleration; used for short corrective moves.
    Decelerate,
    /// Cubic Bézier `(0.4, 0.0) (0.2, 1.0)`: accelerates briefly, then settles gently.
    FastOutSlowIn,
}

impl Curve {
    /// Maps linear progress `t` to eased progress.
    ///
    /// `t` is clamped to `[0, 1]`; every curve maps 0 to 0 and 1 to 1.
    #[must_use]
    pub fn transform(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
            Self::Decelerate => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

/// Evaluates a CSS-style cubic Bézier easing with endpoints `(0, 0)` and
/// `(1, 1)` at `t`.
///
/// `x1` and `x2` must lie in `[0, 1]` so that `x` is monotonic in the curve
/// parameter; the parameter is then found by bisection.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let bezier = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..48 {
        let mid = 0.5 * (lo + hi);
        if bezier(x1, x2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier(y1, y2, 0.5 * (lo + hi))
}

/// A tween between two scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    curve: Curve,
}

impl ScrollAnimation {
    /// Creates a tween from `from` to `to` over `duration`.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            duration,
            curve,
        }
    }

    /// Target offset.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }

    /// Nominal duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns `true` once `elapsed` reaches the duration.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Offset at `elapsed` time since the start.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.curve.transform(t)
    }

    /// A new tween that starts where this one is at `elapsed` and heads to `to`.
    #[must_use]
    pub fn retarget(&self, elapsed: Duration, to: f64, duration: Duration) -> Self {
        Self::new(self.sample(elapsed), to, duration, self.curve)
    }
}
