// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host boundary: task posting, metrics query, and panel hand-off.
//!
//! Everything the lifecycle needs from the host process is collected into
//! one trait so the attach logic can be driven by a real hook adapter in
//! production and by a scripted double in tests. The host window handle
//! itself never crosses into this crate; the adapter keeps it and exposes
//! only these operations.

use core::fmt;
use std::time::Duration;

use limpet_panel::panel::OverlayPanel;

/// A deferred unit of work for the host's UI thread.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// The display metrics query failed.
///
/// Recovered locally with fallback geometry; never fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsError;

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "display metrics query failed")
    }
}

impl core::error::Error for MetricsError {}

/// The host surface rejected the panel.
///
/// Recovered by reverting to `Detached`; a later ready event retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachError {
    /// Host-side description of the rejection.
    pub reason: String,
}

impl AttachError {
    /// Creates an error with the host's description.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface rejected the panel: {}", self.reason)
    }
}

impl core::error::Error for AttachError {}

/// Operations the host adapter provides to the attachment lifecycle.
///
/// Implementations sit at the instrumentation boundary of the host process
/// (for example a hooking framework's module glue) and must uphold:
///
/// - [`HostHooks::post_ui`] is callable from **any** thread, marshals the
///   task onto the host's single UI-owning thread, runs it no earlier than
///   `delay` later, and never blocks the calling thread.
/// - [`HostHooks::raw_metrics`] and [`HostHooks::attach_panel`] are only
///   invoked from that UI thread (inside a posted task).
pub trait HostHooks: Send + Sync + 'static {
    /// Posts `task` to run on the UI thread after `delay`.
    fn post_ui(&self, delay: Duration, task: UiTask);

    /// Queries the display surface provider for raw width/height metrics.
    ///
    /// The raw pair may be reported in either axis order; the lifecycle
    /// normalizes it.
    fn raw_metrics(&self) -> Result<(f64, f64), MetricsError>;

    /// Hands the constructed panel to the host surface.
    ///
    /// On success the host owns the panel: it renders from the panel's
    /// readout state, forwards pointer events, and drops the panel once a
    /// close is reported.
    fn attach_panel(&self, panel: OverlayPanel) -> Result<(), AttachError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_format_for_log_lines() {
        assert_eq!(
            MetricsError.to_string(),
            "display metrics query failed"
        );
        assert_eq!(
            AttachError::new("window token revoked").to_string(),
            "surface rejected the panel: window token revoked"
        );
    }
}
