// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limpet Geometry: screen-metric normalization and clamped panel framing.
//!
//! This crate owns the geometry side of an overlay panel: turning raw display
//! metrics into a stable landscape [`ScreenGeometry`](screen::ScreenGeometry),
//! deriving the panel size and initial placement from it, and keeping a
//! [`PanelFrame`](frame::PanelFrame) inside the display surface across every
//! mutation.
//!
//! ## Design Philosophy
//!
//! - **Normalize once**: raw metrics are orientation-sensitive; the host is
//!   assumed landscape, so the larger axis is always the width.
//! - **Clamp after every mutation**: a frame never leaves the screen, no
//!   matter what sequence of placements is applied to it.
//! - **Resolve configuration up front**: sizing and anchoring are resolved
//!   into a concrete frame at construction time and the size never changes
//!   afterwards.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use limpet_geometry::frame::{PanelAnchor, PanelFrame, PanelSizing};
//! use limpet_geometry::screen::ScreenGeometry;
//!
//! // A portrait-reporting display is normalized to landscape.
//! let screen = ScreenGeometry::from_raw(1080.0, 1920.0);
//! assert_eq!(screen.width, 1920.0);
//! assert_eq!(screen.height, 1080.0);
//!
//! // Canonical sizing and anchoring: a third of the width, top-right corner.
//! let frame = PanelFrame::new(screen, &PanelSizing::default(), &PanelAnchor::default());
//! assert_eq!(frame.origin(), Point::new(1260.0, 100.0));
//!
//! // Placements are clamped into the screen.
//! let mut frame = frame;
//! frame.place_at(Point::new(5000.0, -50.0));
//! assert_eq!(frame.origin(), Point::new(1280.0, 0.0));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod frame;
pub mod screen;
