// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine: pointer events in, panel actions out.
//!
//! ## Usage
//!
//! 1) On pointer-down, resolve the hit point into a [`HitTarget`] (the panel
//!    layout owns that mapping) and call [`GestureController::on_down`].
//! 2) Feed every subsequent position into [`GestureController::on_move`].
//! 3) Finish with [`GestureController::on_up`] or
//!    [`GestureController::cancel`].
//!
//! Each call returns at most one [`GestureAction`] for the caller to apply
//! synchronously.
//!
//! ## Disambiguation rules
//!
//! - Explicit affordances act on the down edge: the close box closes, a
//!   preset applies, and the value track enters continuous adjustment with
//!   an immediate value update. No thresholds; their hit boxes already
//!   state the intent.
//! - The drag surface is ambiguous between a tap and a pan. The session
//!   starts [`SessionMode::Undetermined`] and promotes to panning when the
//!   pointer travels at least the tap tolerance **or** has been down at
//!   least the long-press threshold, whichever a move event observes first.
//!   Until promotion the panel does not move; a down/up pair inside both
//!   limits is a no-op tap.
//! - Pans report the total offset from the down position, so the caller
//!   re-derives the panel origin from its own down-time snapshot and clamps.

use kurbo::{Point, Vec2};

use crate::session::{DragSession, SessionMode};

/// What the pointer-down position landed on, resolved by the panel layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HitTarget {
    /// The close affordance.
    Close,
    /// The value control's track.
    ValueControl,
    /// A preset shortcut carrying its value.
    Preset(f64),
    /// The draggable surface (title band, or the whole body in variants
    /// without a dedicated band).
    DragSurface,
    /// Dead space: interaction is swallowed without effect.
    Inactive,
}

/// One action for the caller to apply synchronously.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureAction {
    /// Remove the panel.
    Close,
    /// Jump the value model to a preset.
    ApplyPreset(f64),
    /// Recompute the value from this pointer position on the track.
    AdjustTo(Point),
    /// The adjusting gesture released; commit deferred value changes.
    AdjustEnd,
    /// Move the panel by the total pointer offset since the down edge.
    PanTo {
        /// Offset from the session origin, not an incremental delta.
        total: Vec2,
    },
}

/// Tap-vs-pan disambiguation limits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Hold duration, in milliseconds, past which a move promotes to a pan.
    pub long_press_ms: u64,
    /// Travel distance, in surface pixels, past which a move promotes.
    pub tap_tolerance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_ms: 300,
            tap_tolerance: 8.0,
        }
    }
}

/// The controller's externally visible state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is down.
    Idle,
    /// Down on the drag surface, intent undecided.
    Undetermined,
    /// Moving the panel.
    Panning,
    /// Driving the value control.
    ValueAdjusting,
}

/// Consumes raw pointer events plus hit classification, emits actions.
///
/// One instance lives per panel. The controller holds at most one
/// [`DragSession`]; close and preset hits bypass session tracking entirely.
///
/// # Example
///
/// ```
/// use kurbo::Point;
/// use limpet_gesture::controller::{
///     GestureAction, GestureConfig, GestureController, HitTarget,
/// };
///
/// let mut gestures = GestureController::new(GestureConfig::default());
///
/// // The close box acts immediately, bypassing the state machine.
/// assert_eq!(
///     gestures.on_down(HitTarget::Close, Point::new(620.0, 30.0), 0),
///     Some(GestureAction::Close)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct GestureController {
    config: GestureConfig,
    session: Option<DragSession>,
}

impl GestureController {
    /// Creates an idle controller.
    #[must_use]
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// The configured disambiguation limits.
    #[must_use]
    pub const fn config(&self) -> GestureConfig {
        self.config
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.session.as_ref().map(DragSession::mode) {
            None => GesturePhase::Idle,
            Some(SessionMode::Undetermined) => GesturePhase::Undetermined,
            Some(SessionMode::Panning) => GesturePhase::Panning,
            Some(SessionMode::ValueAdjusting) => GesturePhase::ValueAdjusting,
        }
    }

    /// Handles a pointer-down already classified against the panel regions.
    ///
    /// A down while a session is somehow still live replaces it; at most one
    /// session exists.
    pub fn on_down(
        &mut self,
        target: HitTarget,
        pos: Point,
        time_ms: u64,
    ) -> Option<GestureAction> {
        self.session = None;
        match target {
            HitTarget::Close => Some(GestureAction::Close),
            HitTarget::Preset(value) => Some(GestureAction::ApplyPreset(value)),
            HitTarget::ValueControl => {
                self.session = Some(DragSession::new(pos, time_ms, SessionMode::ValueAdjusting));
                Some(GestureAction::AdjustTo(pos))
            }
            HitTarget::DragSurface => {
                self.session = Some(DragSession::new(pos, time_ms, SessionMode::Undetermined));
                None
            }
            HitTarget::Inactive => None,
        }
    }

    /// Handles a pointer move.
    pub fn on_move(&mut self, pos: Point, time_ms: u64) -> Option<GestureAction> {
        let config = self.config;
        let session = self.session.as_mut()?;
        match session.mode() {
            SessionMode::ValueAdjusting => {
                session.advance(pos);
                Some(GestureAction::AdjustTo(pos))
            }
            SessionMode::Panning => {
                session.advance(pos);
                Some(GestureAction::PanTo {
                    total: session.total_offset(pos),
                })
            }
            SessionMode::Undetermined => {
                session.advance(pos);
                let held = session.elapsed_ms(time_ms) >= config.long_press_ms;
                let traveled = session.travel(pos) >= config.tap_tolerance;
                if held || traveled {
                    session.set_mode(SessionMode::Panning);
                    Some(GestureAction::PanTo {
                        total: session.total_offset(pos),
                    })
                } else {
                    None
                }
            }
        }
    }

    /// Handles pointer release.
    ///
    /// Destroys the session. Releasing a value adjustment reports
    /// [`GestureAction::AdjustEnd`]; an unpromoted session ends as a silent
    /// tap.
    pub fn on_up(&mut self, _time_ms: u64) -> Option<GestureAction> {
        match self.session.take().map(|session| session.mode()) {
            Some(SessionMode::ValueAdjusting) => Some(GestureAction::AdjustEnd),
            _ => None,
        }
    }

    /// Aborts any live session. Idempotent, safe in every phase.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> GestureController {
        GestureController::new(GestureConfig::default())
    }

    #[test]
    fn close_hit_bypasses_the_machine() {
        let mut gestures = controller();
        let action = gestures.on_down(HitTarget::Close, Point::new(620.0, 30.0), 0);
        assert_eq!(action, Some(GestureAction::Close));
        assert_eq!(gestures.phase(), GesturePhase::Idle);
    }

    #[test]
    fn preset_hit_applies_immediately() {
        let mut gestures = controller();
        let action = gestures.on_down(HitTarget::Preset(5.0), Point::new(100.0, 230.0), 0);
        assert_eq!(action, Some(GestureAction::ApplyPreset(5.0)));
        assert_eq!(gestures.phase(), GesturePhase::Idle);
    }

    #[test]
    fn value_control_adjusts_without_threshold() {
        let mut gestures = controller();
        let down = Point::new(300.0, 175.0);

        assert_eq!(
            gestures.on_down(HitTarget::ValueControl, down, 0),
            Some(GestureAction::AdjustTo(down))
        );
        assert_eq!(gestures.phase(), GesturePhase::ValueAdjusting);

        // Every move tracks continuously, even a tiny one.
        let moved = Point::new(301.0, 175.0);
        assert_eq!(
            gestures.on_move(moved, 10),
            Some(GestureAction::AdjustTo(moved))
        );
    }

    #[test]
    fn adjust_release_reports_adjust_end() {
        let mut gestures = controller();
        gestures.on_down(HitTarget::ValueControl, Point::new(300.0, 175.0), 0);
        assert_eq!(gestures.on_up(40), Some(GestureAction::AdjustEnd));
        assert_eq!(gestures.phase(), GesturePhase::Idle);
    }

    #[test]
    fn small_quick_tap_never_pans() {
        let mut gestures = controller();
        gestures.on_down(HitTarget::DragSurface, Point::new(100.0, 40.0), 0);

        assert_eq!(gestures.on_move(Point::new(103.0, 42.0), 50), None);
        assert_eq!(gestures.on_move(Point::new(101.0, 41.0), 120), None);
        assert_eq!(gestures.on_up(150), None);
        assert_eq!(gestures.phase(), GesturePhase::Idle);
    }

    #[test]
    fn travel_past_tolerance_promotes() {
        let mut gestures = controller();
        gestures.on_down(HitTarget::DragSurface, Point::new(100.0, 40.0), 0);

        let action = gestures.on_move(Point::new(120.0, 40.0), 50);
        assert_eq!(
            action,
            Some(GestureAction::PanTo {
                total: Vec2::new(20.0, 0.0)
            })
        );
        assert_eq!(gestures.phase(), GesturePhase::Panning);
    }

    #[test]
    fn hold_past_long_press_promotes() {
        let mut gestures = controller();
        gestures.on_down(HitTarget::DragSurface, Point::new(100.0, 40.0), 0);

        // Within both limits: inert.
        assert_eq!(gestures.on_move(Point::new(105.0, 40.0), 50), None);

        // Time alone promotes, with the full accumulated offset applied.
        let action = gestures.on_move(Point::new(155.0, 40.0), 320);
        assert_eq!(
            action,
            Some(GestureAction::PanTo {
                total: Vec2::new(55.0, 0.0)
            })
        );
    }

    #[test]
    fn promoted_pan_reports_totals_not_deltas() {
        let mut gestures = controller();
        gestures.on_down(HitTarget::DragSurface, Point::new(100.0, 100.0), 0);
        gestures.on_move(Point::new(130.0, 100.0), 20);

        let action = gestures.on_move(Point::new(140.0, 90.0), 40);
        assert_eq!(
            action,
            Some(GestureAction::PanTo {
                total: Vec2::new(40.0, -10.0)
            })
        );
    }

    #[test]
    fn pan_release_is_silent() {
        let mut gestures = controller();
        gestures.on_down(HitTarget::DragSurface, Point::new(100.0, 100.0), 0);
        gestures.on_move(Point::new(150.0, 100.0), 20);
        assert_eq!(gestures.on_up(60), None);
    }

    #[test]
    fn moves_without_a_session_do_nothing() {
        let mut gestures = controller();
        assert_eq!(gestures.on_move(Point::new(50.0, 50.0), 10), None);
        assert_eq!(gestures.on_up(20), None);
    }

    #[test]
    fn inactive_hit_swallows_the_interaction() {
        let mut gestures = controller();
        assert_eq!(
            gestures.on_down(HitTarget::Inactive, Point::new(5.0, 120.0), 0),
            None
        );
        assert_eq!(gestures.on_move(Point::new(90.0, 120.0), 400), None);
    }

    #[test]
    fn new_down_replaces_a_stale_session() {
        let mut gestures = controller();
        gestures.on_down(HitTarget::DragSurface, Point::new(100.0, 40.0), 0);
        gestures.on_move(Point::new(150.0, 40.0), 20);

        // No up arrived; a fresh down starts over from the new origin.
        gestures.on_down(HitTarget::DragSurface, Point::new(200.0, 40.0), 500);
        assert_eq!(gestures.phase(), GesturePhase::Undetermined);
        assert_eq!(gestures.on_move(Point::new(203.0, 40.0), 520), None);
    }

    #[test]
    fn cancel_is_idempotent_in_every_phase() {
        let mut gestures = controller();
        gestures.cancel();
        assert_eq!(gestures.phase(), GesturePhase::Idle);

        gestures.on_down(HitTarget::DragSurface, Point::new(100.0, 40.0), 0);
        gestures.cancel();
        gestures.cancel();
        assert_eq!(gestures.phase(), GesturePhase::Idle);

        gestures.on_down(HitTarget::ValueControl, Point::new(300.0, 175.0), 0);
        gestures.cancel();
        assert_eq!(gestures.on_up(10), None);
    }

    #[test]
    fn exact_threshold_values_promote() {
        let mut gestures = controller();
        gestures.on_down(HitTarget::DragSurface, Point::new(0.0, 0.0), 0);
        assert!(
            gestures.on_move(Point::new(8.0, 0.0), 1).is_some(),
            "travel equal to the tolerance must promote"
        );

        let mut gestures = controller();
        gestures.on_down(HitTarget::DragSurface, Point::new(0.0, 0.0), 0);
        assert!(
            gestures.on_move(Point::new(1.0, 0.0), 300).is_some(),
            "hold equal to the threshold must promote"
        );
    }
}
