// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay panel: frame + layout + gestures + value, wired together.
//!
//! ## Usage
//!
//! 1) Build an [`OverlayPanel`] from normalized screen geometry and a
//!    [`PanelConfig`].
//! 2) Attach its [`OverlayPanel::bounds`] to the host surface.
//! 3) Forward every raw pointer event to [`OverlayPanel::handle_pointer`]
//!    together with the effector and the surface sink; apply nothing else.
//!    The panel updates value, geometry, and surface synchronously and
//!    reports what happened as [`PanelEffect`]s.
//!
//! A `Closed` effect means the panel removed itself from the surface; the
//! caller should drop it and tell the lifecycle gate.

use alloc::string::String;

use kurbo::{Point, Rect};
use log::debug;
use smallvec::SmallVec;

use limpet_geometry::frame::{PanelAnchor, PanelFrame, PanelSizing};
use limpet_geometry::screen::ScreenGeometry;
use limpet_gesture::controller::{
    GestureAction, GestureConfig, GestureController, GesturePhase,
};
use limpet_value::model::{CommitPolicy, Effector, ValueModel};
use limpet_value::quantized::QuantizedRange;

use crate::layout::{PanelFeatures, PanelLayout};

/// Everything configurable about a panel, resolved once at construction.
#[derive(Clone, Debug, Default)]
pub struct PanelConfig {
    /// Panel size derivation.
    pub sizing: PanelSizing,
    /// Initial placement.
    pub anchor: PanelAnchor,
    /// Optional affordances.
    pub features: PanelFeatures,
    /// Tap-vs-pan limits.
    pub gestures: GestureConfig,
    /// The value range and resolution.
    pub range: QuantizedRange,
    /// Effector commit cadence.
    pub commit: CommitPolicy,
}

/// A raw pointer event in surface coordinates.
///
/// Timestamps are caller-supplied milliseconds, matching the gesture
/// controller's host-agnostic clock.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed.
    Down {
        /// Position in surface pixels.
        pos: Point,
        /// Event time in milliseconds.
        time_ms: u64,
    },
    /// Pointer moved while pressed.
    Move {
        /// Position in surface pixels.
        pos: Point,
        /// Event time in milliseconds.
        time_ms: u64,
    },
    /// Pointer released.
    Up {
        /// Event time in milliseconds.
        time_ms: u64,
    },
    /// The host canceled the interaction.
    Cancel,
}

/// The rendering/attachment surface, treated as an opaque sink.
pub trait SurfaceSink {
    /// The panel's frame changed; reposition the attached view.
    fn move_to(&mut self, frame: Rect);

    /// The panel's rendered content (readout, slider fill) changed.
    fn invalidate(&mut self);

    /// Remove the attached view.
    fn remove(&mut self);
}

/// What one pointer event did, for the host glue and for tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PanelEffect {
    /// The value model changed to this value (already applied to the
    /// effector).
    ValueChanged(f64),
    /// The frame moved to this origin (already pushed to the surface).
    Moved(Point),
    /// The panel removed itself from the surface.
    Closed,
}

/// Per-event effect list.
pub type PanelEffects = SmallVec<[PanelEffect; 2]>;

/// The overlay control panel.
///
/// Owns the clamped [`PanelFrame`], the interior [`PanelLayout`], the
/// gesture controller, and the value model. All input flows through
/// [`OverlayPanel::handle_pointer`]; all output flows through the
/// [`SurfaceSink`] and [`Effector`] passed per call.
#[derive(Clone, Debug)]
pub struct OverlayPanel {
    frame: PanelFrame,
    layout: PanelLayout,
    gestures: GestureController,
    value: ValueModel,
    drag_anchor: Point,
    closed: bool,
}

impl OverlayPanel {
    /// Builds a panel for the given screen.
    #[must_use]
    pub fn new(screen: ScreenGeometry, config: &PanelConfig) -> Self {
        let frame = PanelFrame::new(screen, &config.sizing, &config.anchor);
        Self {
            frame,
            layout: PanelLayout::new(frame.size(), config.features),
            gestures: GestureController::new(config.gestures),
            value: ValueModel::new(config.range, config.commit),
            drag_anchor: frame.origin(),
            closed: false,
        }
    }

    /// The current frame.
    #[must_use]
    pub const fn frame(&self) -> &PanelFrame {
        &self.frame
    }

    /// The frame as a surface-space rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.frame.bounds()
    }

    /// The interior layout.
    #[must_use]
    pub const fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// The current speed value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value.value()
    }

    /// The slider fill fraction in `[0, 1]`.
    #[must_use]
    pub fn slider_fill(&self) -> f64 {
        self.value.progress()
    }

    /// The readout text for the host to render.
    #[must_use]
    pub fn readout(&self) -> String {
        alloc::format!("Speed: {:.2}x", self.value.value())
    }

    /// The gesture phase, mostly for diagnostics.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// Whether the panel has removed itself.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Consumes one pointer event.
    ///
    /// Value, geometry, and surface updates happen synchronously inside
    /// this call; the returned effects describe them. After `Closed` the
    /// panel ignores further input.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        effector: &mut dyn Effector,
        surface: &mut dyn SurfaceSink,
    ) -> PanelEffects {
        if self.closed {
            return PanelEffects::new();
        }
        let action = match event {
            PointerEvent::Down { pos, time_ms } => {
                self.drag_anchor = self.frame.origin();
                let target = self.layout.hit_test(self.frame.to_local(pos));
                self.gestures.on_down(target, pos, time_ms)
            }
            PointerEvent::Move { pos, time_ms } => self.gestures.on_move(pos, time_ms),
            PointerEvent::Up { time_ms } => self.gestures.on_up(time_ms),
            PointerEvent::Cancel => {
                self.gestures.cancel();
                None
            }
        };
        self.apply(action, effector, surface)
    }

    /// Removes the panel from the surface and clears any live session.
    ///
    /// Safe to call in any gesture phase, repeatedly.
    pub fn close(&mut self, surface: &mut dyn SurfaceSink) {
        if self.closed {
            return;
        }
        self.gestures.cancel();
        surface.remove();
        self.closed = true;
        debug!("overlay panel closed");
    }

    fn apply(
        &mut self,
        action: Option<GestureAction>,
        effector: &mut dyn Effector,
        surface: &mut dyn SurfaceSink,
    ) -> PanelEffects {
        let mut effects = PanelEffects::new();
        let Some(action) = action else {
            return effects;
        };
        match action {
            GestureAction::Close => {
                self.close(surface);
                effects.push(PanelEffect::Closed);
            }
            GestureAction::ApplyPreset(preset) => {
                if let Some(value) = self.value.apply_preset(preset, effector) {
                    debug!("overlay preset applied: {value}");
                    surface.invalidate();
                    effects.push(PanelEffect::ValueChanged(value));
                }
            }
            GestureAction::AdjustTo(pos) => {
                let progress = self.layout.progress_at(self.frame.to_local(pos).x);
                if let Some(value) = self.value.set_progress(progress, effector) {
                    surface.invalidate();
                    effects.push(PanelEffect::ValueChanged(value));
                }
            }
            GestureAction::AdjustEnd => {
                self.value.end_adjust(effector);
            }
            GestureAction::PanTo { total } => {
                self.frame.pan_to(self.drag_anchor, total);
                surface.move_to(self.frame.bounds());
                effects.push(PanelEffect::Moved(self.frame.origin()));
            }
        }
        effects
    }
}
