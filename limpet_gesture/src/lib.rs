// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limpet Gesture: pointer gesture disambiguation for overlay panels.
//!
//! An overlay panel receives one stream of raw pointer events and has to
//! decide between three intents without misfiring: move the panel, adjust
//! the value, or close the panel. This crate provides the state machine that
//! makes that call:
//!
//! - [`session::DragSession`]: the bounded lifetime of one
//!   pointer-down-to-up interaction, tracking origin, latest position, start
//!   time, and mode.
//! - [`controller::GestureController`]: consumes pointer events plus the
//!   panel's hit classification and emits [`controller::GestureAction`]s.
//!
//! ## Design Philosophy
//!
//! Following the event-state manager pattern, the controller does not hit
//! test: the panel resolves the pointer-down position into a
//! [`controller::HitTarget`] and the controller takes it from there. Hits on
//! explicit affordances (close box, value track, presets) act immediately,
//! since their bounds already disambiguate intent. Only the ambiguous drag surface
//! goes through the tap-vs-pan threshold: the session stays inert until the
//! pointer has either traveled past the tap tolerance or been down past the
//! long-press threshold, so a sloppy tap never nudges the panel.
//!
//! Time is caller-supplied milliseconds; this crate never reads a clock.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use limpet_gesture::controller::{
//!     GestureAction, GestureConfig, GestureController, HitTarget,
//! };
//!
//! let mut gestures = GestureController::new(GestureConfig::default());
//!
//! // Down on the drag surface: nothing happens yet.
//! assert_eq!(
//!     gestures.on_down(HitTarget::DragSurface, Point::new(100.0, 40.0), 0),
//!     None
//! );
//!
//! // A small early move stays inert...
//! assert_eq!(gestures.on_move(Point::new(103.0, 40.0), 50), None);
//!
//! // ...but crossing the tap tolerance promotes to panning.
//! assert_eq!(
//!     gestures.on_move(Point::new(130.0, 40.0), 80),
//!     Some(GestureAction::PanTo {
//!         total: Vec2::new(30.0, 0.0)
//!     })
//! );
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod controller;
pub mod session;
