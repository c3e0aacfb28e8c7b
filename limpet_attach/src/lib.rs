// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limpet Attach: the overlay attachment lifecycle.
//!
//! Deciding *when* to put a foreign panel onto a host application's window
//! is the riskiest part of an overlay: the ready signal arrives from
//! instrumented host code on an arbitrary thread, the host needs time to
//! finish its own layout pass, and any failure that escapes back across the
//! hook boundary can destabilize the host process. This crate owns that
//! decision:
//!
//! - [`state::AttachCell`]: the Detached / Pending / Attached state as an
//!   atomic cell, so a ready event races cleanly no matter which thread
//!   delivers it and at most one attach is ever in flight.
//! - [`host::HostHooks`]: the host boundary: a thread-safe delayed task
//!   post onto the single UI-owning thread, the display metrics query, and
//!   the panel hand-off.
//! - [`overlay::Overlay`]: the one owned context object per host process.
//!   It gates ready events, schedules panel construction after a settle
//!   delay, falls back to default geometry when metrics fail, reverts and
//!   retries when the surface rejects the panel, and folds panel closure
//!   back into the lifecycle state. Nothing it does panics or returns an
//!   error to the hook caller; failures degrade to "panel not shown" and a
//!   log line.
//!
//! ## Wiring
//!
//! ```text
//! host lifecycle source ──ready──▶ Overlay::on_host_ready   (any thread)
//!                                        │ post_ui(settle delay)
//!                                        ▼
//!                     metrics → panel construction → attach_panel   (UI thread)
//!                                        │
//!          pointer events ──▶ Overlay::dispatch_pointer ──▶ OverlayPanel
//! ```

pub mod host;
pub mod overlay;
pub mod state;
