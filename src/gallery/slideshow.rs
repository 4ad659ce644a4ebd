// SPDX-License-Identifier: MPL-2.0
//! Slideshow interval and run state.
//!
//! The interval is entered as decimal seconds in the preview controls and is
//! rounded to the nearest millisecond. Empty, non-numeric, and non-positive
//! input cancels the start; an input that rounds down to zero milliseconds
//! is treated the same way.

use std::time::Duration;

/// Slideshow advance interval, stored with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowInterval(Duration);

impl SlideshowInterval {
    /// Creates an interval from a seconds value, rounding to the nearest
    /// millisecond. Returns `None` for non-finite, non-positive, or
    /// sub-millisecond values.
    #[must_use]
    pub fn from_secs(secs: f64) -> Option<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let millis = (secs * 1000.0).round() as u64;
        if millis == 0 {
            return None;
        }
        Some(Self(Duration::from_millis(millis)))
    }

    /// Parses a user-entered interval. Empty or unparseable input yields
    /// `None`, which cancels the slideshow start.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().and_then(Self::from_secs)
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

/// Run state of the slideshow.
///
/// `start` is rejected while running and `stop` is idempotent, so stray
/// toggles from the keyboard and the controls button cannot double-schedule
/// or double-cancel the tick subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Slideshow {
    #[default]
    Idle,
    Running(SlideshowInterval),
}

impl Slideshow {
    /// Starts the slideshow. No-op returning `false` if already running.
    pub fn start(&mut self, interval: SlideshowInterval) -> bool {
        if self.is_running() {
            return false;
        }
        *self = Self::Running(interval);
        true
    }

    /// Stops the slideshow. Idempotent.
    pub fn stop(&mut self) {
        *self = Self::Idle;
    }

    /// Dispatches to [`Slideshow::stop`] when running, otherwise attempts to
    /// start with `interval` (`None` cancels the start).
    pub fn toggle(&mut self, interval: Option<SlideshowInterval>) {
        if self.is_running() {
            self.stop();
        } else if let Some(interval) = interval {
            self.start(interval);
        }
    }

    /// Whether the slideshow is running.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running(_))
    }

    /// The tick period while running, `None` while idle.
    #[must_use]
    pub fn period(self) -> Option<Duration> {
        match self {
            Self::Running(interval) => Some(interval.as_duration()),
            Self::Idle => None,
        }
    }
}
