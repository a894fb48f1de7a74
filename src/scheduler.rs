// SPDX-License-Identifier: MPL-2.0
//! Queue scheduler: feeds the presentation slot one toast at a time.
//!
//! [`Toaster`] owns a pending queue and the [`Slot`]. Whenever the queue
//! changes or the slot reports idle it runs `maybe_advance`, which pops the
//! front item into the slot, immediately on the first opportunity after
//! attachment and otherwise after a cooldown anchored at the previous toast's
//! dismissal. The queue mutation API is the change-notification mechanism:
//! every mutating call advances synchronously, so no render-cycle polling is
//! involved.
//!
//! All decisions are re-derived from current queue and slot state at the
//! moment they are taken. A cleared queue turns a pending pop into a no-op,
//! and re-entrant advancing is harmless because every operation is
//! idempotent.

use crate::settings::Settings;
use crate::slot::{Dismissal, PresentationToken, Slot};
use iced::{time, Subscription};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Interval of the tick subscription while the toaster has pending work.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Messages for toaster state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick for auto-dismiss deadlines and cooldown expiry.
    Tick(Instant),
    /// Dismiss the presentation identified by the token (stale tokens are ignored).
    Dismiss(PresentationToken),
    /// A swipe drag moved to the given vertical offset.
    DragChanged(f32),
    /// A swipe drag ended at the given vertical offset.
    DragEnded(f32),
    /// Remove everything: the visible toast and the whole pending queue.
    ClearAll,
}

/// Gate on popping the next queued item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cooldown {
    /// Freshly attached, no dismissal recorded yet. The first pop is immediate.
    Settling,
    /// Armed at dismissal time; pops are held until the deadline passes.
    Until(Instant),
}

/// Queue-driven toast scheduler.
///
/// The host appends items through [`Toaster::enqueue`]; the scheduler removes
/// them strictly from the front, presenting each in the slot until it is
/// dismissed by timeout, swipe, or an external clear.
#[derive(Debug)]
pub struct Toaster<T> {
    settings: Settings,
    slot: Slot<T>,
    queue: VecDeque<T>,
    cooldown: Cooldown,
}

impl<T> Toaster<T> {
    /// Creates an idle toaster with an empty queue.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            slot: Slot::new(&settings),
            settings,
            queue: VecDeque::new(),
            cooldown: Cooldown::Settling,
        }
    }

    /// Returns the settings this toaster was attached with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the currently visible toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.slot.current()
    }

    /// Returns the token of the current presentation, if any.
    #[must_use]
    pub fn current_token(&self) -> Option<PresentationToken> {
        self.slot.token()
    }

    /// Returns the transient drag offset of the visible toast.
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.slot.drag_offset()
    }

    /// Returns whether a toast is currently visible.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.slot.is_occupied()
    }

    /// Returns the number of items waiting in the queue.
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether nothing is visible and nothing is queued.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slot.is_empty() && self.queue.is_empty()
    }

    /// Returns whether the tick subscription needs to run: a finite
    /// auto-dismiss deadline is armed, or queued items are waiting.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.slot.deadline().is_some() || !self.queue.is_empty()
    }

    /// Appends an item to the back of the queue.
    ///
    /// If the slot is idle and no cooldown is holding, the item is presented
    /// before this call returns.
    pub fn enqueue(&mut self, item: T) {
        self.enqueue_at(item, Instant::now());
    }

    /// Appends an item, deciding eligibility against the supplied instant.
    pub fn enqueue_at(&mut self, item: T, now: Instant) {
        self.queue.push_back(item);
        self.maybe_advance(now);
    }

    /// Appends a batch of items in order.
    pub fn enqueue_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.enqueue_all_at(items, Instant::now());
    }

    /// Appends a batch of items, deciding eligibility against the supplied instant.
    pub fn enqueue_all_at(&mut self, items: impl IntoIterator<Item = T>, now: Instant) {
        self.queue.extend(items);
        self.maybe_advance(now);
    }

    /// Replaces the pending queue wholesale, leaving the visible toast alone.
    pub fn replace_queue_at(&mut self, items: impl IntoIterator<Item = T>, now: Instant) {
        self.queue.clear();
        self.queue.extend(items);
        self.maybe_advance(now);
    }

    /// Empties the pending queue. The visible toast, if any, stays on screen.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    /// Clears the visible toast directly, bypassing gesture and timer.
    pub fn dismiss_current(&mut self) {
        self.dismiss_current_at(Instant::now());
    }

    /// Clears the visible toast, anchoring the cooldown at the supplied instant.
    pub fn dismiss_current_at(&mut self, now: Instant) {
        if let Some(dismissal) = self.slot.clear() {
            self.note_idle(dismissal, now);
        }
        self.maybe_advance(now);
    }

    /// Removes the visible toast and everything queued behind it.
    pub fn clear_all_at(&mut self, now: Instant) {
        self.queue.clear();
        if let Some(dismissal) = self.slot.clear() {
            self.note_idle(dismissal, now);
        }
    }

    /// Dismisses the presentation identified by `token`; stale tokens are ignored.
    pub fn dismiss_at(&mut self, token: PresentationToken, now: Instant) {
        if let Some(dismissal) = self.slot.dismiss(token) {
            self.note_idle(dismissal, now);
        }
        self.maybe_advance(now);
    }

    /// Routes a swipe drag update to the slot.
    pub fn drag_changed(&mut self, delta: f32) {
        self.slot.drag_changed(delta);
    }

    /// Settles an ended swipe, advancing the queue if the toast was dismissed.
    pub fn drag_ended_at(&mut self, delta: f32, now: Instant) {
        if let Some(dismissal) = self.slot.drag_ended(delta) {
            self.note_idle(dismissal, now);
        }
        self.maybe_advance(now);
    }

    /// Processes a tick: expires the auto-dismiss deadline and advances the
    /// queue once any cooldown has passed.
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(dismissal) = self.slot.tick_at(now) {
            self.note_idle(dismissal, now);
        }
        self.maybe_advance(now);
    }

    /// Handles a toaster message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick_at(now),
            Message::Dismiss(token) => self.dismiss_at(token, Instant::now()),
            Message::DragChanged(delta) => self.drag_changed(delta),
            Message::DragEnded(delta) => self.drag_ended_at(delta, Instant::now()),
            Message::ClearAll => self.clear_all_at(Instant::now()),
        }
    }

    /// Creates the tick subscription, active only while there is pending work.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_pending_work() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Records that the slot went idle, arming the inter-toast cooldown.
    ///
    /// The cooldown is anchored at dismissal time, so items enqueued while a
    /// toast was showing wait the same fixed gap after its departure no matter
    /// how early they arrived.
    fn note_idle(&mut self, dismissal: Dismissal, now: Instant) {
        log::debug!("toast dismissed ({dismissal:?}), {} queued", self.queue.len());
        self.cooldown = Cooldown::Until(now + self.settings.inter_toast_delay());
    }

    /// Pops the front item into the slot if the slot is idle, the queue is
    /// non-empty, and no cooldown is holding.
    fn maybe_advance(&mut self, now: Instant) {
        if self.slot.is_occupied() {
            return;
        }
        let ready = match self.cooldown {
            Cooldown::Settling => true,
            Cooldown::Until(deadline) => now >= deadline,
        };
        if !ready {
            return;
        }

        // A cleared queue turns a held pop into a no-op here.
        let Some(item) = self.queue.pop_front() else {
            return;
        };

        let token = PresentationToken::new();
        log::debug!("presenting {token:?}, {} still queued", self.queue.len());
        self.slot
            .present_at(item, token, self.settings.display_duration(), now);
    }
}
