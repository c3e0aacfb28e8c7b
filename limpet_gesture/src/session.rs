// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state: one pointer-down-to-up interaction.

use kurbo::{Point, Vec2};

/// What a live session has been disambiguated into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionMode {
    /// Down on an ambiguous region; intent not yet decided.
    Undetermined,
    /// Moving the panel.
    Panning,
    /// Driving the value control.
    ValueAdjusting,
}

/// Tracks one pointer interaction from down to up/cancel.
///
/// A session records where the pointer went down, when, the latest observed
/// position, and the current [`SessionMode`]. At most one session is live at
/// a time; it never survives panel recreation.
///
/// # Example
///
/// ```
/// use kurbo::{Point, Vec2};
/// use limpet_gesture::session::{DragSession, SessionMode};
///
/// let mut session = DragSession::new(Point::new(10.0, 20.0), 1000, SessionMode::Undetermined);
///
/// // Move to (15, 25): the offset from the origin is (5, 5).
/// session.advance(Point::new(15.0, 25.0));
/// assert_eq!(
///     session.total_offset(Point::new(15.0, 25.0)),
///     Vec2::new(5.0, 5.0)
/// );
/// assert_eq!(session.elapsed_ms(1050), 50);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    origin: Point,
    last: Point,
    started_ms: u64,
    mode: SessionMode,
}

impl DragSession {
    /// Starts a session at the pointer-down position.
    #[must_use]
    pub const fn new(origin: Point, started_ms: u64, mode: SessionMode) -> Self {
        Self {
            origin,
            last: origin,
            started_ms,
            mode,
        }
    }

    /// The pointer-down position.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// The most recent position fed to [`DragSession::advance`].
    #[must_use]
    pub const fn last(&self) -> Point {
        self.last
    }

    /// The pointer-down timestamp, in caller milliseconds.
    #[must_use]
    pub const fn started_ms(&self) -> u64 {
        self.started_ms
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Promotes or re-labels the session.
    pub fn set_mode(&mut self, mode: SessionMode) {
        self.mode = mode;
    }

    /// Records a new position, returning the movement since the last one.
    pub fn advance(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    /// Cumulative offset from the session origin to `pos`.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Vec2 {
        pos - self.origin
    }

    /// Straight-line distance from the session origin to `pos`.
    #[must_use]
    pub fn travel(&self, pos: Point) -> f64 {
        (pos - self.origin).hypot()
    }

    /// Milliseconds since the session started, saturating at zero.
    #[must_use]
    pub const fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_origin() {
        let session = DragSession::new(Point::new(10.0, 20.0), 7, SessionMode::Undetermined);
        assert_eq!(session.origin(), Point::new(10.0, 20.0));
        assert_eq!(session.last(), session.origin());
        assert_eq!(session.started_ms(), 7);
        assert_eq!(session.mode(), SessionMode::Undetermined);
    }

    #[test]
    fn advance_tracks_incremental_deltas() {
        let mut session = DragSession::new(Point::ZERO, 0, SessionMode::Panning);

        assert_eq!(session.advance(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
        assert_eq!(session.advance(Point::new(8.0, 7.0)), Vec2::new(3.0, 4.0));
        assert_eq!(session.last(), Point::new(8.0, 7.0));
    }

    #[test]
    fn total_offset_measures_from_origin() {
        let mut session = DragSession::new(Point::new(100.0, 100.0), 0, SessionMode::Panning);
        session.advance(Point::new(90.0, 120.0));

        assert_eq!(
            session.total_offset(Point::new(90.0, 85.0)),
            Vec2::new(-10.0, -15.0)
        );
    }

    #[test]
    fn travel_is_euclidean() {
        let session = DragSession::new(Point::ZERO, 0, SessionMode::Undetermined);
        assert_eq!(session.travel(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(session.travel(Point::ZERO), 0.0);
    }

    #[test]
    fn elapsed_saturates_on_clock_skew() {
        let session = DragSession::new(Point::ZERO, 100, SessionMode::Undetermined);
        assert_eq!(session.elapsed_ms(350), 250);
        assert_eq!(session.elapsed_ms(40), 0);
    }

    #[test]
    fn set_mode_promotes() {
        let mut session = DragSession::new(Point::ZERO, 0, SessionMode::Undetermined);
        session.set_mode(SessionMode::Panning);
        assert_eq!(session.mode(), SessionMode::Panning);
    }
}
