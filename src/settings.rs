// SPDX-License-Identifier: MPL-2.0
//! Toaster configuration.
//!
//! [`Settings`] is an immutable per-attachment value: the scheduler snapshots
//! the relevant parts (display duration, swipe flag) when a toast is
//! presented, so mutating a `Settings` mid-display never retargets a running
//! timer.

use iced::Color;
use std::time::Duration;

/// Default time a toast stays on screen.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Default gap between one toast's dismissal and the next one's appearance.
pub const DEFAULT_INTER_TOAST_DELAY: Duration = Duration::from_millis(500);

/// How long a toast stays on screen before auto-dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayDuration {
    /// Never auto-dismiss. Only a swipe or an external clear removes the toast.
    Indefinite,
    /// Auto-dismiss after the given duration.
    Finite(Duration),
}

impl DisplayDuration {
    /// Builds a finite duration from seconds.
    ///
    /// Negative or non-finite input is clamped to zero, and values beyond
    /// what `Duration` can hold saturate at `Duration::MAX`, rather than
    /// producing undefined timer behavior.
    #[must_use]
    pub fn seconds(secs: f64) -> Self {
        Self::Finite(saturating_secs(secs))
    }

    /// Returns the finite duration, or `None` for [`DisplayDuration::Indefinite`].
    #[must_use]
    pub fn finite(self) -> Option<Duration> {
        match self {
            DisplayDuration::Indefinite => None,
            DisplayDuration::Finite(d) => Some(d),
        }
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self::Finite(DEFAULT_DISPLAY_DURATION)
    }
}

impl From<Duration> for DisplayDuration {
    fn from(d: Duration) -> Self {
        Self::Finite(d)
    }
}

/// The method with which a toast is inserted into the view.
///
/// A rendering hint for the host's transition of choice; the scheduler never
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationStyle {
    /// Slide in from the attachment edge.
    #[default]
    Slide,
    /// Fade in place.
    Fade,
    /// Scale up from the center.
    Scale,
}

/// Built-in accent presets for common toast kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something went wrong (red accent).
    Error,
    /// Something needs attention (yellow accent).
    Warning,
    /// Informational (blue accent).
    Info,
}

impl Severity {
    /// Returns the accent color for this severity.
    #[must_use]
    pub fn accent_color(self) -> Color {
        match self {
            Severity::Error => Color::from_rgb(0.86, 0.21, 0.27),
            Severity::Warning => Color::from_rgb(0.95, 0.77, 0.06),
            Severity::Info => Color::from_rgb(0.20, 0.51, 0.96),
        }
    }
}

/// Converts float seconds to a `Duration` without a panic path: negative and
/// non-finite input collapses to zero, oversized input saturates at
/// `Duration::MAX`.
fn saturating_secs(secs: f64) -> Duration {
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// Configuration for a toaster attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// How long a toast stays on screen.
    display_duration: DisplayDuration,
    /// Cooldown between one toast's dismissal and the next appearance.
    inter_toast_delay: Duration,
    /// Whether swipe-to-dismiss is enabled.
    dismiss_on_swipe: bool,
    /// Color applied to the leading edge of the toast card, if any.
    accent_color: Option<Color>,
    /// Transition hint for the host's renderer.
    presentation_style: PresentationStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_duration: DisplayDuration::default(),
            inter_toast_delay: DEFAULT_INTER_TOAST_DELAY,
            dismiss_on_swipe: true,
            accent_color: None,
            presentation_style: PresentationStyle::default(),
        }
    }
}

impl Settings {
    /// Creates settings with the defaults: 5 s display, 500 ms gap, swipable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings with a severity accent and the default timings.
    #[must_use]
    pub fn preset(severity: Severity) -> Self {
        Self::default().with_accent_color(severity.accent_color())
    }

    /// Sets the display duration.
    #[must_use]
    pub fn with_display_duration(mut self, duration: impl Into<DisplayDuration>) -> Self {
        self.display_duration = duration.into();
        self
    }

    /// Sets the gap between one toast's dismissal and the next appearance.
    #[must_use]
    pub fn with_inter_toast_delay(mut self, delay: Duration) -> Self {
        self.inter_toast_delay = delay;
        self
    }

    /// Sets the inter-toast gap from seconds, clamping negative or non-finite
    /// input to zero and saturating oversized values at `Duration::MAX`.
    #[must_use]
    pub fn with_inter_toast_delay_secs(mut self, secs: f64) -> Self {
        self.inter_toast_delay = saturating_secs(secs);
        self
    }

    /// Enables or disables swipe-to-dismiss.
    #[must_use]
    pub fn with_dismiss_on_swipe(mut self, enabled: bool) -> Self {
        self.dismiss_on_swipe = enabled;
        self
    }

    /// Sets the accent color shown on the toast card's leading edge.
    #[must_use]
    pub fn with_accent_color(mut self, color: Color) -> Self {
        self.accent_color = Some(color);
        self
    }

    /// Sets the transition hint.
    #[must_use]
    pub fn with_presentation_style(mut self, style: PresentationStyle) -> Self {
        self.presentation_style = style;
        self
    }

    /// How long a toast stays on screen.
    #[must_use]
    pub fn display_duration(&self) -> DisplayDuration {
        self.display_duration
    }

    /// Cooldown between one toast's dismissal and the next appearance.
    #[must_use]
    pub fn inter_toast_delay(&self) -> Duration {
        self.inter_toast_delay
    }

    /// Whether swipe-to-dismiss is enabled.
    #[must_use]
    pub fn dismiss_on_swipe(&self) -> bool {
        self.dismiss_on_swipe
    }

    /// Accent color for the toast card's leading edge, if any.
    #[must_use]
    pub fn accent_color(&self) -> Option<Color> {
        self.accent_color
    }

    /// Transition hint for the host's renderer.
    #[must_use]
    pub fn presentation_style(&self) -> PresentationStyle {
        self.presentation_style
    }
}
