// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration for lists and grids.
//!
//! A [`LayoutConfig`] describes whatever the host knows about item geometry.
//! Every field is optional: the estimator degrades to fallbacks when a value
//! is missing, so a plain struct literal is always acceptable. Hosts that want
//! invalid values rejected up front can go through [`LayoutConfig::builder`].

use core::num::NonZeroUsize;

use thiserror::Error;

/// Insets around the scrollable content, in the same units as scroll offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Inset before the first row.
    pub top: f64,
    /// Inset after the last row.
    pub bottom: f64,
    /// Leading cross-axis inset.
    pub left: f64,
    /// Trailing cross-axis inset.
    pub right: f64,
}

impl EdgeInsets {
    /// Insets of `value` on every side.
    #[must_use]
    pub const fn all(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    /// Insets along the scroll axis only.
    #[must_use]
    pub const fn vertical(top: f64, bottom: f64) -> Self {
        Self {
            top,
            bottom,
            left: 0.0,
            right: 0.0,
        }
    }

    /// Sum of the insets along the scroll axis.
    #[must_use]
    pub fn main_axis_total(&self) -> f64 {
        self.top + self.bottom
    }
}

/// What the host knows about item geometry.
///
/// A config with a `cross_axis_count` describes a grid; otherwise it
/// describes a list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Explicit extent of a list item along the scroll axis.
    pub item_extent: Option<f64>,
    /// Explicit extent of a grid row along the scroll axis.
    pub row_extent: Option<f64>,
    /// Number of columns in a grid.
    pub cross_axis_count: Option<NonZeroUsize>,
    /// Total number of items.
    pub item_count: Option<usize>,
    /// Gap between consecutive rows.
    pub main_axis_spacing: Option<f64>,
    /// Gap between consecutive columns.
    pub cross_axis_spacing: Option<f64>,
    /// Cross-axis to main-axis ratio of a grid cell.
    pub child_aspect_ratio: Option<f64>,
    /// Insets around the content.
    pub padding: Option<EdgeInsets>,
}

impl LayoutConfig {
    /// A list whose items have the given extent.
    #[must_use]
    pub fn list(item_extent: f64) -> Self {
        Self {
            item_extent: Some(item_extent),
            ..Self::default()
        }
    }

    /// A grid with `cross_axis_count` columns and no other known geometry.
    #[must_use]
    pub fn grid(cross_axis_count: NonZeroUsize) -> Self {
        Self {
            cross_axis_count: Some(cross_axis_count),
            ..Self::default()
        }
    }

    /// Starts a validating builder.
    #[must_use]
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::default()
    }

    /// Returns `true` if this config describes a grid.
    #[must_use]
    pub const fn is_grid(&self) -> bool {
        self.cross_axis_count.is_some()
    }

    /// Number of rows needed for `item_count` items, when both counts are known.
    ///
    /// This is `ceil(item_count / cross_axis_count)`.
    #[must_use]
    pub fn total_rows(&self) -> Option<usize> {
        let columns = self.cross_axis_count?;
        Some(self.item_count?.div_ceil(columns.get()))
    }

    /// Returns `true` when every parameter needed to rebuild a row extent
    /// from the content extent is present.
    #[must_use]
    pub const fn has_full_grid_geometry(&self) -> bool {
        self.cross_axis_count.is_some()
            && self.child_aspect_ratio.is_some()
            && self.main_axis_spacing.is_some()
            && self.padding.is_some()
            && self.item_count.is_some()
    }

    /// Checks every configured value.
    ///
    /// Extents, spacings and insets must be finite and non-negative, and the
    /// aspect ratio must be finite and positive.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_non_negative("item_extent", self.item_extent)?;
        check_non_negative("row_extent", self.row_extent)?;
        check_non_negative("main_axis_spacing", self.main_axis_spacing)?;
        check_non_negative("cross_axis_spacing", self.cross_axis_spacing)?;
        if let Some(ratio) = self.child_aspect_ratio {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(LayoutError::InvalidAspectRatio(ratio));
            }
        }
        if let Some(padding) = self.padding {
            check_non_negative("padding.top", Some(padding.top))?;
            check_non_negative("padding.bottom", Some(padding.bottom))?;
            check_non_negative("padding.left", Some(padding.left))?;
            check_non_negative("padding.right", Some(padding.right))?;
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: Option<f64>) -> Result<(), LayoutError> {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(LayoutError::InvalidLength { field, value })
        }
        _ => Ok(()),
    }
}

/// Reasons a [`LayoutConfigBuilder`] rejects its input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// A grid was configured with zero columns.
    #[error("cross_axis_count must be at least 1")]
    ZeroCrossAxisCount,
    /// An extent, spacing or inset is negative, NaN or infinite.
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidLength {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The child aspect ratio is not a positive finite number.
    #[error("child_aspect_ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),
}

/// Validating builder for [`LayoutConfig`].
#[derive(Debug, Clone, Default)]
pub struct LayoutConfigBuilder {
    config: LayoutConfig,
    zero_columns: bool,
}

impl LayoutConfigBuilder {
    /// Sets the explicit list item extent.
    #[must_use]
    pub fn item_extent(mut self, extent: f64) -> Self {
        self.config.item_extent = Some(extent);
        self
    }

    /// Sets the explicit grid row extent.
    #[must_use]
    pub fn row_extent(mut self, extent: f64) -> Self {
        self.config.row_extent = Some(extent);
        self
    }

    /// Sets the number of grid columns. Zero is rejected by [`Self::build`].
    #[must_use]
    pub fn cross_axis_count(mut self, count: usize) -> Self {
        self.config.cross_axis_count = NonZeroUsize::new(count);
        self.zero_columns = count == 0;
        self
    }

    /// Sets the total item count.
    #[must_use]
    pub fn item_count(mut self, count: usize) -> Self {
        self.config.item_count = Some(count);
        self
    }

    /// Sets the gap between rows.
    #[must_use]
    pub fn main_axis_spacing(mut self, spacing: f64) -> Self {
        self.config.main_axis_spacing = Some(spacing);
        self
    }

    /// Sets the gap between columns.
    #[must_use]
    pub fn cross_axis_spacing(mut self, spacing: f64) -> Self {
        self.config.cross_axis_spacing = Some(spacing);
        self
    }

    /// Sets the cell aspect ratio.
    #[must_use]
    pub fn child_aspect_ratio(mut self, ratio: f64) -> Self {
        self.config.child_aspect_ratio = Some(ratio);
        self
    }

    /// Sets the content insets.
    #[must_use]
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.config.padding = Some(padding);
        self
    }

    /// Validates and returns the config.
    pub fn build(self) -> Result<LayoutConfig, LayoutError> {
        if self.zero_columns {
            return Err(LayoutError::ZeroCrossAxisCount);
        }
        self.config.validate()?;
        Ok(self.config)
    }
}
