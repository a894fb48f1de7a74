// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a queue-driven toast notification overlay for the Iced
//! GUI toolkit.
//!
//! A toast is a transient, auto-dismissing message attached to a screen. The
//! crate manages exactly one visible toast per attachment point, fed either by
//! the host directly (show/hide an optional value via [`Slot`]) or by a
//! pending queue that is cycled automatically, one toast at a time, with a
//! configurable gap between them ([`Toaster`]).
//!
//! # Components
//!
//! - [`settings`] - `Settings` with display duration, inter-toast delay,
//!   swipe flag, accent presets
//! - [`slot`] - `Slot`, the single-presentation controller with auto-dismiss
//!   and swipe handling
//! - [`scheduler`] - `Toaster`, the queue scheduler, plus its `Message` and
//!   tick subscription
//! - [`overlay`] - the toast card view
//!
//! # Usage
//!
//! ```ignore
//! use iced_toaster::{overlay, Settings, Severity, Toaster};
//!
//! // In your application state:
//! let mut toaster: Toaster<String> = Toaster::new(Settings::preset(Severity::Info));
//!
//! // Wherever something worth announcing happens:
//! toaster.enqueue("Saved".to_owned());
//!
//! // In update():        toaster.update(message);
//! // In subscription():  toaster.subscription().map(Msg::Toast)
//! // In view():
//! let toasts = overlay::view(&toaster, |msg| iced::widget::text(msg).into());
//! ```
//!
//! # Design considerations
//!
//! - Strictly FIFO: queued toasts appear in enqueue order, never reordered or
//!   coalesced.
//! - The first toast after attachment appears immediately; every later one
//!   waits the inter-toast delay counted from the previous toast's dismissal.
//! - Dismissal paths: display-duration timeout, swipe past the threshold,
//!   dismiss button, or an external clear by the host. All of them feed the
//!   same idle notification, so the queue advances identically.
//! - Each presentation carries a unique token; stale timer or dismiss signals
//!   are ignored by token comparison.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod overlay;
pub mod scheduler;
pub mod settings;
pub mod slot;

pub use scheduler::{Message, Toaster};
pub use settings::{DisplayDuration, PresentationStyle, Settings, Severity};
pub use slot::{Dismissal, PresentationToken, Slot, SWIPE_DISMISS_THRESHOLD};
