// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interior hit regions and the track ↔ progress mapping.
//!
//! All coordinates here are panel-local: the origin is the panel's top-left
//! corner. The vertical band layout is fixed (header on top, slider band
//! in the content area, preset row underneath when enabled), which is why
//! frame sizing enforces a minimum panel size.

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use limpet_gesture::controller::HitTarget;

/// Height of the header band (title + close affordance).
pub const HEADER_HEIGHT: f64 = 80.0;

/// Horizontal inset of the track from the panel edges.
pub const TRACK_MARGIN: f64 = 40.0;

// Close box: a 20×20 square tucked into the header's top-right corner.
const CLOSE_FAR_INSET: f64 = 40.0;
const CLOSE_NEAR_INSET: f64 = 20.0;

// The slider band is the touch target; the track is the drawn bar inside it.
const SLIDER_BAND_TOP: f64 = 150.0;
const SLIDER_BAND_BOTTOM: f64 = 200.0;
const TRACK_TOP: f64 = 160.0;
const TRACK_BOTTOM: f64 = 190.0;

// Preset row, present only with `PanelFeatures::PRESETS`.
const PRESET_BAND_TOP: f64 = 210.0;
const PRESET_BAND_BOTTOM: f64 = 250.0;
const PRESET_CELL_GAP: f64 = 10.0;

/// Preset shortcut values offered when [`PanelFeatures::PRESETS`] is set.
pub const DEFAULT_PRESETS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

bitflags::bitflags! {
    /// Optional panel affordances.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PanelFeatures: u8 {
        /// Show a row of preset shortcuts under the slider.
        const PRESETS   = 0b0000_0001;
        /// Treat the whole panel body as a drag surface, not just the
        /// header band.
        const BODY_DRAG = 0b0000_0010;
    }
}

/// The panel's interior regions, fixed at construction.
///
/// `hit_test` resolves a panel-local point into a [`HitTarget`] in priority
/// order: close box, slider band, preset cells, header band, body. Explicit
/// affordances always win over the regions they sit inside.
///
/// # Example
///
/// ```
/// use kurbo::{Point, Size};
/// use limpet_panel::layout::{PanelFeatures, PanelLayout};
///
/// let layout = PanelLayout::new(Size::new(640.0, 280.0), PanelFeatures::empty());
///
/// // The track spans 560 px between the 40 px margins.
/// assert_eq!(layout.track().width(), 560.0);
/// assert_eq!(layout.progress_at(40.0), 0.0);
/// assert_eq!(layout.progress_at(600.0), 1.0);
/// assert_eq!(layout.progress_at(320.0), 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct PanelLayout {
    size: Size,
    features: PanelFeatures,
    presets: SmallVec<[f64; 4]>,
}

impl PanelLayout {
    /// Creates a layout for a panel of `size` with [`DEFAULT_PRESETS`].
    #[must_use]
    pub fn new(size: Size, features: PanelFeatures) -> Self {
        Self::with_presets(size, features, &DEFAULT_PRESETS)
    }

    /// Creates a layout with a custom preset list.
    ///
    /// The list only matters when [`PanelFeatures::PRESETS`] is set.
    #[must_use]
    pub fn with_presets(size: Size, features: PanelFeatures, presets: &[f64]) -> Self {
        Self {
            size,
            features,
            presets: SmallVec::from_slice(presets),
        }
    }

    /// The panel size this layout was computed for.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The enabled optional affordances.
    #[must_use]
    pub const fn features(&self) -> PanelFeatures {
        self.features
    }

    /// The header band (title + close affordance), the default drag surface.
    #[must_use]
    pub fn header(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, HEADER_HEIGHT)
    }

    /// The close affordance's hit box.
    #[must_use]
    pub fn close_box(&self) -> Rect {
        Rect::new(
            self.size.width - CLOSE_FAR_INSET,
            CLOSE_NEAR_INSET,
            self.size.width - CLOSE_NEAR_INSET,
            CLOSE_FAR_INSET,
        )
    }

    /// The slider's touch band, taller than the drawn track.
    #[must_use]
    pub fn slider_band(&self) -> Rect {
        Rect::new(
            TRACK_MARGIN,
            SLIDER_BAND_TOP,
            self.size.width - TRACK_MARGIN,
            SLIDER_BAND_BOTTOM,
        )
    }

    /// The drawn track rectangle.
    #[must_use]
    pub fn track(&self) -> Rect {
        Rect::new(
            TRACK_MARGIN,
            TRACK_TOP,
            self.size.width - TRACK_MARGIN,
            TRACK_BOTTOM,
        )
    }

    /// The preset cells and their values, left to right.
    ///
    /// Empty unless [`PanelFeatures::PRESETS`] is set.
    pub fn preset_cells(&self) -> impl Iterator<Item = (Rect, f64)> + '_ {
        let span = self.size.width - 2.0 * TRACK_MARGIN;
        let count = if self.features.contains(PanelFeatures::PRESETS) {
            self.presets.len()
        } else {
            0
        };
        let cell_width = if count == 0 {
            0.0
        } else {
            let count_f = count as f64;
            (span - PRESET_CELL_GAP * (count_f - 1.0)) / count_f
        };
        self.presets
            .iter()
            .take(count)
            .enumerate()
            .map(move |(i, &value)| {
                let x0 = TRACK_MARGIN + (cell_width + PRESET_CELL_GAP) * i as f64;
                (
                    Rect::new(x0, PRESET_BAND_TOP, x0 + cell_width, PRESET_BAND_BOTTOM),
                    value,
                )
            })
    }

    /// Resolves a panel-local point into a hit target.
    #[must_use]
    pub fn hit_test(&self, local: Point) -> HitTarget {
        let bounds = Rect::from_origin_size(Point::ZERO, self.size);
        if !bounds.contains(local) {
            return HitTarget::Inactive;
        }
        if self.close_box().contains(local) {
            return HitTarget::Close;
        }
        if self.slider_band().contains(local) {
            return HitTarget::ValueControl;
        }
        for (cell, value) in self.preset_cells() {
            if cell.contains(local) {
                return HitTarget::Preset(value);
            }
        }
        if self.header().contains(local) || self.features.contains(PanelFeatures::BODY_DRAG) {
            return HitTarget::DragSurface;
        }
        HitTarget::Inactive
    }

    /// Maps a panel-local x coordinate to control progress in `[0, 1]`.
    ///
    /// Positions beyond either track end clamp to that end, so continuous
    /// adjustment keeps tracking when the pointer overshoots the span.
    #[must_use]
    pub fn progress_at(&self, local_x: f64) -> f64 {
        let span = self.size.width - 2.0 * TRACK_MARGIN;
        ((local_x - TRACK_MARGIN) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn canonical() -> PanelLayout {
        PanelLayout::new(Size::new(640.0, 280.0), PanelFeatures::empty())
    }

    #[test]
    fn close_box_sits_in_the_header_corner() {
        let layout = canonical();
        assert_eq!(layout.close_box(), Rect::new(600.0, 20.0, 620.0, 40.0));
    }

    #[test]
    fn close_wins_over_header() {
        let layout = canonical();
        assert_eq!(layout.hit_test(Point::new(610.0, 30.0)), HitTarget::Close);
        // Just outside the box, still in the header: drag surface.
        assert_eq!(
            layout.hit_test(Point::new(595.0, 30.0)),
            HitTarget::DragSurface
        );
    }

    #[test]
    fn slider_band_is_taller_than_the_track() {
        let layout = canonical();
        assert_eq!(
            layout.hit_test(Point::new(300.0, 155.0)),
            HitTarget::ValueControl
        );
        assert_eq!(
            layout.hit_test(Point::new(300.0, 195.0)),
            HitTarget::ValueControl
        );
    }

    #[test]
    fn body_is_inactive_by_default() {
        let layout = canonical();
        assert_eq!(layout.hit_test(Point::new(300.0, 120.0)), HitTarget::Inactive);
        assert_eq!(layout.hit_test(Point::new(300.0, 240.0)), HitTarget::Inactive);
    }

    #[test]
    fn body_drag_variant_drags_from_anywhere() {
        let layout = PanelLayout::new(Size::new(640.0, 280.0), PanelFeatures::BODY_DRAG);
        assert_eq!(
            layout.hit_test(Point::new(300.0, 120.0)),
            HitTarget::DragSurface
        );
        // Explicit affordances still win.
        assert_eq!(
            layout.hit_test(Point::new(300.0, 175.0)),
            HitTarget::ValueControl
        );
        assert_eq!(layout.hit_test(Point::new(610.0, 30.0)), HitTarget::Close);
    }

    #[test]
    fn points_outside_the_panel_are_inactive() {
        let layout = canonical();
        assert_eq!(
            layout.hit_test(Point::new(-1.0, 30.0)),
            HitTarget::Inactive
        );
        assert_eq!(
            layout.hit_test(Point::new(300.0, 300.0)),
            HitTarget::Inactive
        );
    }

    #[test]
    fn track_progress_covers_the_span() {
        let layout = canonical();
        assert_eq!(layout.track().width(), 560.0);
        assert_eq!(layout.progress_at(40.0), 0.0);
        assert_eq!(layout.progress_at(600.0), 1.0);
        assert_eq!(layout.progress_at(320.0), 0.5);
    }

    #[test]
    fn overshooting_the_track_clamps() {
        let layout = canonical();
        assert_eq!(layout.progress_at(-50.0), 0.0);
        assert_eq!(layout.progress_at(3000.0), 1.0);
    }

    #[test]
    fn presets_require_the_feature() {
        let layout = canonical();
        assert_eq!(layout.preset_cells().count(), 0);

        let with = PanelLayout::new(Size::new(640.0, 280.0), PanelFeatures::PRESETS);
        let cells: Vec<_> = with.preset_cells().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].1, 1.0);
        assert_eq!(cells[3].1, 10.0);
    }

    #[test]
    fn preset_cells_tile_the_span_without_overlap() {
        let layout = PanelLayout::new(Size::new(640.0, 280.0), PanelFeatures::PRESETS);
        let cells: Vec<_> = layout.preset_cells().collect();
        for pair in cells.windows(2) {
            assert!(
                pair[0].0.x1 < pair[1].0.x0,
                "cells overlap: {pair:?}"
            );
        }
        let first = cells.first().unwrap().0;
        let last = cells.last().unwrap().0;
        assert_eq!(first.x0, TRACK_MARGIN);
        assert!((last.x1 - 600.0).abs() < 1e-9);
    }

    #[test]
    fn preset_hit_resolves_the_value() {
        let layout = PanelLayout::new(Size::new(640.0, 280.0), PanelFeatures::PRESETS);
        let (cell, value) = layout.preset_cells().nth(2).unwrap();
        assert_eq!(value, 5.0);
        assert_eq!(
            layout.hit_test(cell.center()),
            HitTarget::Preset(5.0)
        );
    }
}
