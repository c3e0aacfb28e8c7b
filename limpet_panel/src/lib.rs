// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limpet Panel: the overlay control panel, assembled.
//!
//! This crate composes the leaf pieces into one interactive panel:
//!
//! - [`layout::PanelLayout`]: the panel's interior hit regions (header drag
//!   band, close box, slider band and track, optional preset row) and the
//!   pointer-position ↔ control-progress mapping.
//! - [`panel::OverlayPanel`]: owns the clamped frame, the gesture
//!   controller, and the value model; consumes raw pointer events and
//!   applies the resulting actions synchronously, pushing geometry updates
//!   into an opaque [`panel::SurfaceSink`] and value updates into an
//!   [`Effector`](limpet_value::model::Effector).
//!
//! Panel chrome (colors, fonts, drawing) is deliberately absent: the host
//! renders however it likes, reading [`panel::OverlayPanel::readout`] and
//! [`panel::OverlayPanel::slider_fill`], and forwards pointer input here.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use limpet_gesture::controller::HitTarget;
//! use limpet_panel::layout::{PanelFeatures, PanelLayout};
//!
//! let layout = PanelLayout::new(kurbo::Size::new(640.0, 280.0), PanelFeatures::empty());
//!
//! // The close box wins over the header band it sits inside.
//! assert_eq!(layout.hit_test(Point::new(610.0, 30.0)), HitTarget::Close);
//! assert_eq!(layout.hit_test(Point::new(300.0, 40.0)), HitTarget::DragSurface);
//! assert_eq!(layout.hit_test(Point::new(300.0, 175.0)), HitTarget::ValueControl);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod layout;
pub mod panel;
