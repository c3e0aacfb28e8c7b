// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value model and the effector it commits into.
//!
//! ## Usage
//!
//! 1) Build a [`ValueModel`] over a [`QuantizedRange`]; it starts at the
//!    range minimum.
//! 2) Feed control positions in with [`ValueModel::set_progress`] (continuous
//!    tracking) or jump with [`ValueModel::apply_preset`].
//! 3) Every change lands in the [`Effector`] synchronously; under
//!    [`CommitPolicy::Deferred`], call [`ValueModel::end_adjust`] when the
//!    adjusting gesture releases.

use crate::quantized::QuantizedRange;

/// External sink that applies the value to host behavior.
///
/// Calls are fire-and-forget: no readback, no retries. Hosts whose effector
/// requires an explicit flush implement [`Effector::commit`]; for the rest
/// the default no-op applies.
pub trait Effector {
    /// Applies the value to the host.
    fn apply(&mut self, value: f64);

    /// Flushes a previously applied value, for hosts that require it.
    fn commit(&mut self) {}
}

/// When applied values are committed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CommitPolicy {
    /// Apply and commit on every change.
    #[default]
    Immediate,
    /// Apply on every change; commit only when the adjustment ends.
    Deferred,
}

/// Owns the bounded, quantized value and pushes changes into the effector.
///
/// The control position is derived from the value on demand, so model and
/// control can never disagree.
///
/// # Example
///
/// ```
/// use limpet_value::model::{CommitPolicy, Effector, ValueModel};
/// use limpet_value::quantized::QuantizedRange;
///
/// struct Sink;
/// impl Effector for Sink {
///     fn apply(&mut self, _value: f64) {}
/// }
///
/// let mut model = ValueModel::new(QuantizedRange::default(), CommitPolicy::Immediate);
/// assert_eq!(model.value(), 1.0);
///
/// model.apply_preset(5.0, &mut Sink);
/// assert_eq!(model.value(), 5.0);
/// assert_eq!(model.progress(), 4.0 / 9.0);
/// ```
#[derive(Clone, Debug)]
pub struct ValueModel {
    range: QuantizedRange,
    policy: CommitPolicy,
    current: f64,
}

impl ValueModel {
    /// Creates a model starting at the range minimum.
    #[must_use]
    pub fn new(range: QuantizedRange, policy: CommitPolicy) -> Self {
        Self {
            range,
            policy,
            current: range.min(),
        }
    }

    /// The current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.current
    }

    /// The control position matching the current value.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.range.progress_for(self.current)
    }

    /// The governing range.
    #[must_use]
    pub const fn range(&self) -> QuantizedRange {
        self.range
    }

    /// The configured commit cadence.
    #[must_use]
    pub const fn policy(&self) -> CommitPolicy {
        self.policy
    }

    /// Sets the value from a `[0, 1]` control position.
    ///
    /// Returns the new value if it landed on a different grid point, in
    /// which case the effector was invoked; `None` means no change and no
    /// effector traffic.
    pub fn set_progress(&mut self, progress: f64, effector: &mut dyn Effector) -> Option<f64> {
        self.commit_value(self.range.value_at(progress), effector)
    }

    /// Sets the value directly, clamped and grid-aligned.
    ///
    /// Same change/no-change contract as [`ValueModel::set_progress`].
    pub fn apply_preset(&mut self, value: f64, effector: &mut dyn Effector) -> Option<f64> {
        self.commit_value(self.range.clamp_align(value), effector)
    }

    /// Ends a continuous adjustment.
    ///
    /// Under [`CommitPolicy::Deferred`] this is the commit point; under
    /// [`CommitPolicy::Immediate`] every change already committed and this
    /// does nothing.
    pub fn end_adjust(&mut self, effector: &mut dyn Effector) {
        if self.policy == CommitPolicy::Deferred {
            effector.commit();
        }
    }

    /// Forces an explicit commit of the current value, regardless of policy.
    pub fn flush(&mut self, effector: &mut dyn Effector) {
        effector.apply(self.current);
        effector.commit();
    }

    fn commit_value(&mut self, value: f64, effector: &mut dyn Effector) -> Option<f64> {
        if value == self.current {
            return None;
        }
        self.current = value;
        effector.apply(value);
        if self.policy == CommitPolicy::Immediate {
            effector.commit();
        }
        Some(value)
    }
}
