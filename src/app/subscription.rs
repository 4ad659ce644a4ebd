// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard events to the update loop, drives the slideshow
//! while it runs, and ticks the notification manager while toasts are on
//! screen.

use super::Message;
use crate::gallery::Slideshow;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes native events to [`Message::RawEvent`].
///
/// Only keyboard events are routed, and only when no widget captured them:
/// typing into the slideshow interval field must not trigger shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if !matches!(event, event::Event::Keyboard(_)) {
            return None;
        }
        match status {
            event::Status::Ignored => Some(Message::RawEvent {
                window: window_id,
                event,
            }),
            event::Status::Captured => None,
        }
    })
}

/// Emits a tick per slideshow interval while the slideshow runs.
pub fn create_slideshow_subscription(slideshow: Slideshow) -> Subscription<Message> {
    match slideshow.period() {
        Some(period) => time::every(period).map(Message::SlideshowTick),
        None => Subscription::none(),
    }
}

/// Periodic tick for notification auto-dismiss; idle when nothing is shown.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
