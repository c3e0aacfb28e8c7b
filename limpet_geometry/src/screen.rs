// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized display-surface geometry.

use kurbo::Size;

/// Display-surface dimensions, normalized to landscape.
///
/// Raw metrics from a display query are orientation-sensitive: depending on
/// how the host reports them, the first axis may be the shorter one. The
/// overlay targets landscape hosts, so normalization always assigns the
/// larger raw axis to `width`.
///
/// Inputs are assumed finite and positive; a failed or nonsensical metrics
/// query should be replaced with [`ScreenGeometry::FALLBACK`] by the caller.
///
/// # Example
///
/// ```
/// use limpet_geometry::screen::ScreenGeometry;
///
/// let screen = ScreenGeometry::from_raw(1080.0, 1920.0);
/// assert_eq!(screen.width, 1920.0);
/// assert_eq!(screen.height, 1080.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenGeometry {
    /// The longer display axis, in surface pixels.
    pub width: f64,
    /// The shorter display axis, in surface pixels.
    pub height: f64,
}

impl ScreenGeometry {
    /// Geometry assumed when the display metrics query fails.
    pub const FALLBACK: Self = Self {
        width: 1920.0,
        height: 1080.0,
    };

    /// Normalizes raw display metrics into landscape orientation.
    ///
    /// The larger of the two raw axes becomes the width, the smaller the
    /// height, regardless of the order the host reported them in.
    #[must_use]
    pub fn from_raw(raw_width: f64, raw_height: f64) -> Self {
        Self {
            width: raw_width.max(raw_height),
            height: raw_width.min(raw_height),
        }
    }

    /// Returns the geometry as a [`Size`].
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_metrics_normalize_to_landscape() {
        let screen = ScreenGeometry::from_raw(1080.0, 1920.0);
        assert_eq!(screen.width, 1920.0);
        assert_eq!(screen.height, 1080.0);
    }

    #[test]
    fn landscape_metrics_pass_through() {
        let screen = ScreenGeometry::from_raw(2560.0, 1440.0);
        assert_eq!(screen.width, 2560.0);
        assert_eq!(screen.height, 1440.0);
    }

    #[test]
    fn square_metrics_are_stable() {
        let screen = ScreenGeometry::from_raw(1000.0, 1000.0);
        assert_eq!(screen.width, 1000.0);
        assert_eq!(screen.height, 1000.0);
    }

    #[test]
    fn width_is_never_smaller_than_height() {
        for (w, h) in [
            (1.0, 2.0),
            (2.0, 1.0),
            (1080.0, 2400.0),
            (3840.0, 2160.0),
            (640.0, 640.0),
        ] {
            let screen = ScreenGeometry::from_raw(w, h);
            assert!(
                screen.width >= screen.height,
                "normalization inverted for ({w}, {h})"
            );
            assert_eq!(screen.width, w.max(h));
            assert_eq!(screen.height, w.min(h));
        }
    }

    #[test]
    fn fallback_is_full_hd() {
        assert_eq!(ScreenGeometry::FALLBACK.width, 1920.0);
        assert_eq!(ScreenGeometry::FALLBACK.height, 1080.0);
    }

    #[test]
    fn size_round_trips_dimensions() {
        let screen = ScreenGeometry::from_raw(1280.0, 720.0);
        assert_eq!(screen.size(), Size::new(1280.0, 720.0));
    }
}
