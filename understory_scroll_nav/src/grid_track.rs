// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Maps a per-track extent model onto the flat cell indices of a grid.
//!
//! The scroll axis of a grid operates over *tracks* (rows in a vertical grid)
//! while the backing data is indexed as a flat sequence of *cells*. A
//! [`GridTrackModel`] wraps an [`ExtentModel`] describing per-track extents
//! and answers cell-level questions:
//!
//! - Each track holds `cells_per_track` cells; the last one may be partial.
//! - The number of tracks is `ceil(len / cells_per_track)`.
//! - A cell is visible when its track is.

use core::num::NonZeroUsize;

use crate::{ResizableExtentModel, VisibleRange, compute_visible_range};

/// Adapts a per-track [`ExtentModel`](crate::ExtentModel) to grid cells.
#[derive(Debug, Clone)]
pub struct GridTrackModel<M: ResizableExtentModel> {
    track_model: M,
    cells_per_track: NonZeroUsize,
    len: usize,
}

impl<M: ResizableExtentModel> GridTrackModel<M> {
    /// Creates a new [`GridTrackModel`] over `len` cells.
    ///
    /// The track model is resized to `ceil(len / cells_per_track)` tracks.
    #[must_use]
    pub fn new(track_model: M, cells_per_track: NonZeroUsize, len: usize) -> Self {
        let mut grid = Self {
            track_model,
            cells_per_track,
            len,
        };
        let tracks = grid.track_count();
        grid.track_model.set_len(tracks);
        grid
    }

    /// Returns a shared reference to the underlying track model.
    #[must_use]
    pub fn track_model(&self) -> &M {
        &self.track_model
    }

    /// Returns a mutable reference to the underlying track model.
    pub fn track_model_mut(&mut self) -> &mut M {
        &mut self.track_model
    }

    /// Returns the number of cells per track.
    #[must_use]
    pub const fn cells_per_track(&self) -> usize {
        self.cells_per_track.get()
    }

    /// Sets the number of cells per track and resizes the track model.
    pub fn set_cells_per_track(&mut self, cells_per_track: NonZeroUsize) {
        self.cells_per_track = cells_per_track;
        let tracks = self.track_count();
        self.track_model.set_len(tracks);
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no cells in this grid.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the total number of cells and resizes the track model.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        let tracks = self.track_count();
        self.track_model.set_len(tracks);
    }

    /// Returns the track index containing `cell_index`.
    #[must_use]
    pub const fn track_of_cell(&self, cell_index: usize) -> usize {
        cell_index / self.cells_per_track.get()
    }

    /// Returns the zero-based position of `cell_index` within its track.
    #[must_use]
    pub const fn cell_in_track(&self, cell_index: usize) -> usize {
        cell_index % self.cells_per_track.get()
    }

    /// Returns the number of tracks needed for `len` cells.
    #[must_use]
    pub const fn track_count(&self) -> usize {
        self.len.div_ceil(self.cells_per_track.get())
    }

    /// Visible tracks for the given scroll position.
    pub fn visible_tracks(
        &mut self,
        scroll_offset: f64,
        viewport_extent: f64,
    ) -> Option<VisibleRange> {
        compute_visible_range(&mut self.track_model, scroll_offset, viewport_extent)
    }

    /// Visible cells for the given scroll position.
    ///
    /// Every cell of a visible track is included, except past the last cell
    /// of a partial final track.
    pub fn visible_cells(
        &mut self,
        scroll_offset: f64,
        viewport_extent: f64,
    ) -> Option<VisibleRange> {
        if self.len == 0 {
            return None;
        }
        let tracks = self.visible_tracks(scroll_offset, viewport_extent)?;
        let per_track = self.cells_per_track.get();
        let last = self.len - 1;
        let start = tracks.start.saturating_mul(per_track).min(last);
        let end = tracks
            .end
            .saturating_add(1)
            .saturating_mul(per_track)
            .saturating_sub(1)
            .min(last);
        Some(VisibleRange::new(start, end))
    }
}
