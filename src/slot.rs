// SPDX-License-Identifier: MPL-2.0
//! Single-presentation slot: at most one toast occupies the screen at a time.
//!
//! [`Slot`] owns the lifecycle of the currently visible item: present,
//! auto-dismiss when the display duration elapses, swipe-to-dismiss, and
//! external clearing by the host. It is usable stand-alone for the manual
//! show/hide mode, and is the leaf component the queue scheduler feeds.
//!
//! All time-sensitive operations take an explicit `now: Instant` so that both
//! the tick subscription and tests drive the same code path.

use crate::settings::{DisplayDuration, Settings};
use std::time::Instant;

/// Vertical drag offset below which an ended swipe dismisses the toast.
pub const SWIPE_DISMISS_THRESHOLD: f32 = -30.0;

/// Unique identifier for one presentation instance.
///
/// Regenerated every time an item enters the slot and never reused, so an
/// observer can distinguish "the same value shown again" from "still showing
/// the previous item" even when the item type's equality is weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresentationToken(u64);

impl PresentationToken {
    /// Creates a new unique token.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PresentationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Why the slot became empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The display duration elapsed.
    TimedOut,
    /// The user swiped the toast past the dismiss threshold.
    SwipedAway,
    /// The host cleared the slot directly (or pressed the dismiss button).
    Cleared,
}

/// Holder for the single currently visible item.
#[derive(Debug)]
pub struct Slot<T> {
    current: Option<T>,
    token: Option<PresentationToken>,
    /// Auto-dismiss deadline, snapshotted from settings at present time.
    /// `None` while empty or when the duration is indefinite.
    deadline: Option<Instant>,
    /// Transient vertical drag offset, always <= 0 while dragging.
    drag_offset: f32,
    swipable: bool,
}

impl<T> Slot<T> {
    /// Creates an empty slot configured from the given settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            current: None,
            token: None,
            deadline: None,
            drag_offset: 0.0,
            swipable: settings.dismiss_on_swipe(),
        }
    }

    /// Returns the currently visible item, if any.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns the token of the current presentation, if any.
    #[must_use]
    pub fn token(&self) -> Option<PresentationToken> {
        self.token
    }

    /// Returns the transient drag offset (always <= 0).
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Returns whether a toast is currently visible.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// Returns whether the slot is empty and eligible for the next item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Presents an item under the given token, arming the auto-dismiss timer.
    ///
    /// Re-presenting under the token already occupying the slot is a silent
    /// no-op: the running timer is not restarted, so a host that rebuilds its
    /// view every frame cannot keep a toast alive forever. A different token
    /// always replaces the current item and restarts the timer. Returns
    /// whether the item was accepted.
    pub fn present_at(
        &mut self,
        item: T,
        token: PresentationToken,
        duration: DisplayDuration,
        now: Instant,
    ) -> bool {
        if self.token == Some(token) {
            return false;
        }

        self.current = Some(item);
        self.token = Some(token);
        self.deadline = duration.finite().map(|d| now + d);
        self.drag_offset = 0.0;
        true
    }

    /// Binds the slot to an externally owned optional value.
    ///
    /// `Some` presents the item under a fresh token; `None` clears the slot.
    /// This is the manual show/hide mode for hosts that do not use the queue.
    ///
    /// Because every `Some` mints a new token, calling this on each redraw
    /// with the same value restarts the dismiss timer every time. Only call
    /// it when the bound value actually changes; a host that cannot avoid
    /// repeat calls should use [`Slot::present_at`] with a token it stores,
    /// which makes the repeats no-ops.
    pub fn set_current_at(
        &mut self,
        item: Option<T>,
        duration: DisplayDuration,
        now: Instant,
    ) -> Option<Dismissal> {
        match item {
            Some(item) => {
                self.present_at(item, PresentationToken::new(), duration, now);
                None
            }
            None => self.clear(),
        }
    }

    /// Checks the auto-dismiss deadline against `now`.
    ///
    /// Fires unconditionally once the deadline is reached; drag activity does
    /// not pause or extend the timer. Returns the dismissal if the toast was
    /// cleared.
    pub fn tick_at(&mut self, now: Instant) -> Option<Dismissal> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        log::trace!("toast timed out");
        self.empty_slot();
        Some(Dismissal::TimedOut)
    }

    /// Updates the drag offset while a swipe is in progress.
    ///
    /// The toast may only be pulled toward the dismissal direction; positive
    /// deltas are clamped to zero. Ignored when swiping is disabled or the
    /// slot is empty.
    pub fn drag_changed(&mut self, delta: f32) {
        if !self.swipable || self.current.is_none() {
            return;
        }
        self.drag_offset = delta.min(0.0);
    }

    /// Settles an ended swipe.
    ///
    /// Dismisses the toast when the drag ended past the threshold, otherwise
    /// the offset settles back to zero and the toast remains.
    pub fn drag_ended(&mut self, delta: f32) -> Option<Dismissal> {
        if !self.swipable || self.current.is_none() {
            return None;
        }

        if delta.min(0.0) < SWIPE_DISMISS_THRESHOLD {
            log::trace!("toast swiped away at offset {delta}");
            self.empty_slot();
            Some(Dismissal::SwipedAway)
        } else {
            self.drag_offset = 0.0;
            None
        }
    }

    /// Clears the slot directly, bypassing gesture and timer.
    ///
    /// Idempotent: clearing an already empty slot resets transient state and
    /// reports nothing.
    pub fn clear(&mut self) -> Option<Dismissal> {
        let was_occupied = self.current.is_some();
        self.empty_slot();
        was_occupied.then_some(Dismissal::Cleared)
    }

    /// Dismisses the current toast if `token` still identifies it.
    ///
    /// A stale token (from a presentation that has since been replaced or
    /// cleared) is silently ignored.
    pub fn dismiss(&mut self, token: PresentationToken) -> Option<Dismissal> {
        if self.token != Some(token) {
            log::trace!("ignoring stale dismiss for {token:?}");
            return None;
        }
        self.empty_slot();
        Some(Dismissal::Cleared)
    }

    fn empty_slot(&mut self) {
        self.current = None;
        self.token = None;
        self.deadline = None;
        self.drag_offset = 0.0;
    }
}
