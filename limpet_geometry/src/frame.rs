// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel sizing, anchoring, and the screen-clamped panel frame.
//!
//! ## Usage
//!
//! 1) Normalize display metrics into a [`ScreenGeometry`].
//! 2) Build a [`PanelFrame`] from a [`PanelSizing`] and a [`PanelAnchor`];
//!    the size is fixed from then on.
//! 3) Reposition with [`PanelFrame::place_at`] or [`PanelFrame::pan_to`];
//!    both clamp the origin so the frame stays inside the screen.

use kurbo::{Point, Rect, Size, Vec2};

use crate::screen::ScreenGeometry;

/// How the panel height is derived from screen geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PanelHeight {
    /// A fixed height in surface pixels.
    Fixed(f64),
    /// A fraction of the normalized screen height.
    Ratio(f64),
}

/// Panel size configuration, resolved once at frame construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelSizing {
    /// Panel width as a fraction of the normalized screen width.
    pub width_ratio: f64,
    /// Panel height policy.
    pub height: PanelHeight,
}

impl Default for PanelSizing {
    fn default() -> Self {
        Self {
            width_ratio: 1.0 / 3.0,
            height: PanelHeight::Fixed(280.0),
        }
    }
}

impl PanelSizing {
    /// Smallest width the interior band layout can be hit-tested in.
    pub const MIN_WIDTH: f64 = 200.0;
    /// Smallest height the interior band layout can be hit-tested in.
    pub const MIN_HEIGHT: f64 = 260.0;

    /// Resolves the concrete panel size for the given screen.
    ///
    /// The result is floored at [`Self::MIN_WIDTH`] × [`Self::MIN_HEIGHT`]
    /// so the fixed interior regions always fit.
    #[must_use]
    pub fn size_for(&self, screen: ScreenGeometry) -> Size {
        let width = (screen.width * self.width_ratio).max(Self::MIN_WIDTH);
        let height = match self.height {
            PanelHeight::Fixed(h) => h,
            PanelHeight::Ratio(r) => screen.height * r,
        }
        .max(Self::MIN_HEIGHT);
        Size::new(width, height)
    }
}

/// Initial panel placement, anchored to the top-right screen corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelAnchor {
    /// Gap between the panel's right edge and the screen's right edge.
    pub margin_right: f64,
    /// Gap between the panel's top edge and the screen's top edge.
    pub margin_top: f64,
}

impl Default for PanelAnchor {
    fn default() -> Self {
        Self {
            margin_right: 20.0,
            margin_top: 100.0,
        }
    }
}

impl PanelAnchor {
    /// Computes the anchored origin for a panel of `size` on `screen`.
    #[must_use]
    pub fn initial_origin(&self, screen: ScreenGeometry, size: Size) -> Point {
        Point::new(
            screen.width - size.width - self.margin_right,
            self.margin_top,
        )
    }
}

/// A panel's placement on the display surface.
///
/// The size and the screen it was computed against are fixed at construction;
/// only the origin moves, and every mutation clamps it so that
/// `0 <= x <= screen.width - width` and `0 <= y <= screen.height - height`.
///
/// # Example
///
/// ```
/// use kurbo::{Point, Vec2};
/// use limpet_geometry::frame::{PanelAnchor, PanelFrame, PanelSizing};
/// use limpet_geometry::screen::ScreenGeometry;
///
/// let screen = ScreenGeometry::from_raw(1080.0, 1920.0);
/// let mut frame = PanelFrame::new(screen, &PanelSizing::default(), &PanelAnchor::default());
///
/// // Pan far past the left edge: the x axis clamps, the y axis follows.
/// frame.pan_to(Point::new(1260.0, 100.0), Vec2::new(-5000.0, 40.0));
/// assert_eq!(frame.origin(), Point::new(0.0, 140.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelFrame {
    origin: Point,
    size: Size,
    screen: ScreenGeometry,
}

impl PanelFrame {
    /// Builds a frame sized by `sizing` and placed by `anchor` on `screen`.
    #[must_use]
    pub fn new(screen: ScreenGeometry, sizing: &PanelSizing, anchor: &PanelAnchor) -> Self {
        let size = sizing.size_for(screen);
        let mut frame = Self {
            origin: Point::ZERO,
            size,
            screen,
        };
        frame.place_at(anchor.initial_origin(screen, size));
        frame
    }

    /// The current top-left corner, in surface pixels.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// The fixed panel size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The screen geometry this frame is clamped against.
    #[must_use]
    pub const fn screen(&self) -> ScreenGeometry {
        self.screen
    }

    /// The frame as a rectangle in surface coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Converts a surface-space point into panel-local coordinates.
    #[must_use]
    pub fn to_local(&self, point: Point) -> Point {
        point - self.origin.to_vec2()
    }

    /// Moves the frame's origin, clamped per-axis into the screen.
    pub fn place_at(&mut self, origin: Point) {
        self.origin = Point::new(
            origin.x.min(self.screen.width - self.size.width).max(0.0),
            origin.y.min(self.screen.height - self.size.height).max(0.0),
        );
    }

    /// Repositions relative to a drag: `anchor` is the origin captured at
    /// pointer-down and `total` the pointer's offset since then.
    pub fn pan_to(&mut self, anchor: Point, total: Vec2) {
        self.place_at(anchor + total);
    }
}
