// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limpet Value: quantized bounded values and effector commit plumbing.
//!
//! An overlay control edits one bounded numeric parameter, a speed
//! multiplier applied to the host process. This crate owns that parameter:
//!
//! - [`quantized::QuantizedRange`]: a closed `[min, max]` range with a fixed
//!   resolution grid and a two-way mapping to a `[0, 1]` control position.
//! - [`model::Effector`]: the external sink the value is applied to,
//!   fire-and-forget, with an optional explicit commit signal.
//! - [`model::ValueModel`]: holds the current value and pushes every
//!   successful change into the effector synchronously.
//!
//! ## Minimal example
//!
//! ```
//! use limpet_value::model::{CommitPolicy, Effector, ValueModel};
//! use limpet_value::quantized::QuantizedRange;
//!
//! #[derive(Default)]
//! struct Recorder(Vec<f64>);
//! impl Effector for Recorder {
//!     fn apply(&mut self, value: f64) {
//!         self.0.push(value);
//!     }
//! }
//!
//! let mut fx = Recorder::default();
//! let mut model = ValueModel::new(QuantizedRange::default(), CommitPolicy::Immediate);
//!
//! // Half of the control span on the canonical 1..=10 range rounds up to 6.
//! assert_eq!(model.set_progress(0.5, &mut fx), Some(6.0));
//! // Same grid point again: no change, no effector call.
//! assert_eq!(model.set_progress(0.5, &mut fx), None);
//! assert_eq!(fx.0, vec![6.0]);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod model;
pub mod quantized;
