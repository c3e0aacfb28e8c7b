// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay context object: ready gating, settle scheduling, teardown.
//!
//! ## Usage
//!
//! 1) Build one [`Overlay`] per host process around a [`HostHooks`] adapter.
//! 2) Call [`Overlay::on_host_ready`] from the host lifecycle hook, as often
//!    as it fires and from whatever thread it fires on.
//! 3) Route pointer events for the attached panel through
//!    [`Overlay::dispatch_pointer`] so closure feeds back into the
//!    lifecycle state.
//!
//! The hook-facing entry points never panic and never return errors: every
//! failure is logged and degrades to "panel not shown", retried on the next
//! qualifying ready event.

use core::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, warn};

use limpet_geometry::screen::ScreenGeometry;
use limpet_panel::panel::{
    OverlayPanel, PanelConfig, PanelEffect, PanelEffects, PointerEvent, SurfaceSink,
};
use limpet_value::model::Effector;

use crate::host::HostHooks;
use crate::state::{AttachCell, AttachmentState};

/// Lifecycle configuration, resolved once.
#[derive(Clone, Debug)]
pub struct OverlayConfig {
    /// Wait after a ready event before constructing the panel, giving the
    /// host time to finish its own layout pass.
    pub settle_delay: Duration,
    /// The panel to build once the delay elapses.
    pub panel: PanelConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(1000),
            panel: PanelConfig::default(),
        }
    }
}

/// The single owned context object for one host process.
///
/// Clones share the same lifecycle state, so the hook glue can keep one
/// clone for ready events and another for pointer dispatch.
///
/// # Example
///
/// ```no_run
/// use limpet_attach::host::{AttachError, HostHooks, MetricsError, UiTask};
/// use limpet_attach::overlay::{Overlay, OverlayConfig};
/// use limpet_panel::panel::OverlayPanel;
/// use std::time::Duration;
///
/// struct MyAdapter;
/// impl HostHooks for MyAdapter {
///     fn post_ui(&self, delay: Duration, task: UiTask) {
///         // hand to the host's UI-thread handler/looper
///         # let _ = (delay, task);
///     }
///     fn raw_metrics(&self) -> Result<(f64, f64), MetricsError> {
///         Ok((1080.0, 1920.0))
///     }
///     fn attach_panel(&self, panel: OverlayPanel) -> Result<(), AttachError> {
///         # let _ = panel;
///         Ok(())
///     }
/// }
///
/// let overlay = Overlay::new(MyAdapter, OverlayConfig::default());
/// // From the host lifecycle hook:
/// overlay.on_host_ready();
/// ```
pub struct Overlay<H: HostHooks> {
    shared: Arc<Shared<H>>,
}

struct Shared<H> {
    state: AttachCell,
    config: OverlayConfig,
    host: H,
}

impl<H: HostHooks> Overlay<H> {
    /// Creates the context object in `Detached` state.
    #[must_use]
    pub fn new(host: H, config: OverlayConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: AttachCell::new(),
                config,
                host,
            }),
        }
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> AttachmentState {
        self.shared.state.get()
    }

    /// The host adapter.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.shared.host
    }

    /// Handles a "host window now usable" signal. Any thread.
    ///
    /// The first qualifying event schedules panel construction after the
    /// settle delay; every other event is a logged no-op. Construction
    /// failures revert the state so a later event can retry.
    pub fn on_host_ready(&self) {
        if !self.shared.state.try_begin() {
            debug!(
                "overlay ready event ignored in state {:?}",
                self.shared.state.get()
            );
            return;
        }
        let delay = self.shared.config.settle_delay;
        debug!("overlay attach scheduled in {}ms", delay.as_millis());
        let shared = Arc::clone(&self.shared);
        self.shared
            .host
            .post_ui(delay, Box::new(move || shared.settle()));
    }

    /// Forwards a pointer event to the panel and folds a reported close
    /// back into the lifecycle state.
    pub fn dispatch_pointer(
        &self,
        panel: &mut OverlayPanel,
        event: PointerEvent,
        effector: &mut dyn Effector,
        surface: &mut dyn SurfaceSink,
    ) -> PanelEffects {
        let effects = panel.handle_pointer(event, effector, surface);
        if effects.contains(&PanelEffect::Closed) {
            self.notify_closed();
        }
        effects
    }

    /// Closes the panel and detaches, from any gesture phase.
    pub fn close_panel(&self, panel: &mut OverlayPanel, surface: &mut dyn SurfaceSink) {
        panel.close(surface);
        self.notify_closed();
    }

    /// Records that the panel left the surface. Idempotent.
    pub fn notify_closed(&self) {
        if self.shared.state.detach() {
            debug!("overlay detached");
        }
    }
}

impl<H: HostHooks> Clone for Overlay<H> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<H: HostHooks> fmt::Debug for Overlay<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<H: HostHooks> Shared<H> {
    /// Runs on the UI thread once the settle delay elapses.
    ///
    /// Must not let any failure escape: this frame is reachable from host
    /// instrumentation.
    fn settle(&self) {
        let screen = match self.host.raw_metrics() {
            Ok((w, h)) => ScreenGeometry::from_raw(w, h),
            Err(err) => {
                warn!("{err}; using fallback geometry");
                ScreenGeometry::FALLBACK
            }
        };
        let panel = OverlayPanel::new(screen, &self.config.panel);
        match self.host.attach_panel(panel) {
            Ok(()) => {
                if self.state.complete() {
                    debug!("overlay attached at {}x{}", screen.width, screen.height);
                } else {
                    warn!("overlay attach finished in state {:?}", self.state.get());
                }
            }
            Err(err) => {
                error!("overlay attach failed: {err}");
                self.state.revert();
            }
        }
    }
}
