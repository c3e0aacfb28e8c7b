// Copyright 2025 the Limpet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attachment state machine, as an atomic cell.

use std::sync::atomic::{AtomicU8, Ordering};

/// Where the overlay is in its lifecycle.
///
/// Exactly one instance exists per host process. Legal transitions:
///
/// - `Detached → Pending`: a qualifying ready event; construction is now
///   scheduled.
/// - `Pending → Attached`: the surface accepted the panel.
/// - `Pending → Detached`: construction failed; a later ready event retries.
/// - `Attached → Detached`: explicit close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentState {
    /// No panel exists and none is being built.
    Detached,
    /// A ready event was accepted; construction is scheduled.
    Pending,
    /// The panel is live on the host surface.
    Attached,
}

const DETACHED: u8 = 0;
const PENDING: u8 = 1;
const ATTACHED: u8 = 2;

/// Lock-free holder of the [`AttachmentState`].
///
/// Ready events may arrive on any thread; the compare-and-swap transitions
/// here make the at-most-once-attach guarantee race-free without a lock.
///
/// # Example
///
/// ```
/// use limpet_attach::state::{AttachCell, AttachmentState};
///
/// let cell = AttachCell::new();
/// assert!(cell.try_begin());
/// // A second ready event while pending is a no-op.
/// assert!(!cell.try_begin());
/// assert!(cell.complete());
/// assert_eq!(cell.get(), AttachmentState::Attached);
/// ```
#[derive(Debug, Default)]
pub struct AttachCell(AtomicU8);

impl AttachCell {
    /// Creates a cell in [`AttachmentState::Detached`].
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU8::new(DETACHED))
    }

    /// The current state.
    #[must_use]
    pub fn get(&self) -> AttachmentState {
        match self.0.load(Ordering::Acquire) {
            PENDING => AttachmentState::Pending,
            ATTACHED => AttachmentState::Attached,
            _ => AttachmentState::Detached,
        }
    }

    /// `Detached → Pending`. Returns whether this caller won the transition.
    pub fn try_begin(&self) -> bool {
        self.transition(DETACHED, PENDING)
    }

    /// `Pending → Attached`, after successful construction.
    pub fn complete(&self) -> bool {
        self.transition(PENDING, ATTACHED)
    }

    /// `Pending → Detached`, after failed construction.
    pub fn revert(&self) -> bool {
        self.transition(PENDING, DETACHED)
    }

    /// `Attached → Detached`, on explicit close.
    pub fn detach(&self) -> bool {
        self.transition(ATTACHED, DETACHED)
    }

    fn transition(&self, from: u8, to: u8) -> bool {
        self.0
            .compare_exchange(from, to, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
