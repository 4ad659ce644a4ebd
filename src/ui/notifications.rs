// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications carry an i18n message key (plus optional Fluent arguments)
//! rather than final text, so they render in the current locale. They are
//! auto-dismissed by the periodic tick, or immediately via their close
//! button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};
use std::time::{Duration, Instant};

/// How long a toast stays on screen unless dismissed earlier.
const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Messages produced by the notification toasts.
#[derive(Debug, Clone)]
pub enum NotificationMessage {
    Dismiss(u64),
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Notification {
    key: &'static str,
    args: Vec<(&'static str, String)>,
    severity: Severity,
    dismiss_after: Duration,
}

impl Notification {
    #[must_use]
    pub fn success(key: &'static str) -> Self {
        Self::new(key, Severity::Success)
    }

    #[must_use]
    pub fn warning(key: &'static str) -> Self {
        Self::new(key, Severity::Warning)
    }

    #[must_use]
    pub fn error(key: &'static str) -> Self {
        Self::new(key, Severity::Error)
    }

    fn new(key: &'static str, severity: Severity) -> Self {
        Self {
            key,
            args: Vec::new(),
            severity,
            dismiss_after: DEFAULT_DISMISS_AFTER,
        }
    }

    /// Attaches a Fluent argument to the message.
    #[must_use]
    pub fn with_arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    /// Overrides the auto-dismiss delay.
    #[must_use]
    pub fn auto_dismiss(mut self, after: Duration) -> Self {
        self.dismiss_after = after;
        self
    }

    fn text(&self, i18n: &I18n) -> String {
        if self.args.is_empty() {
            i18n.tr(self.key)
        } else {
            let args: Vec<(&str, String)> = self
                .args
                .iter()
                .map(|(name, value)| (*name, value.clone()))
                .collect();
            i18n.tr_args(self.key, &args)
        }
    }
}

/// Owns the active toasts and their lifetimes.
#[derive(Debug)]
pub struct Manager {
    items: Vec<(u64, Instant, Notification)>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a notification.
    pub fn push(&mut self, notification: Notification) {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, Instant::now(), notification));
    }

    /// Drops expired notifications. Driven by the periodic tick subscription.
    pub fn tick(&mut self) {
        self.items
            .retain(|(_, created, n)| created.elapsed() < n.dismiss_after);
    }

    /// Whether any toast is on screen (keeps the tick subscription alive).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn handle_message(&mut self, message: NotificationMessage) {
        match message {
            NotificationMessage::Dismiss(id) => {
                self.items.retain(|(item_id, _, _)| *item_id != id);
            }
        }
    }

    /// Renders the toast column (bottom-right corner).
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, NotificationMessage> {
        let mut column = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        for (id, _, notification) in &self.items {
            let dismiss = button(Text::new("✕").size(typography::CAPTION))
                .style(button::text)
                .on_press(NotificationMessage::Dismiss(*id));

            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(Text::new(notification.text(i18n)).size(typography::BODY))
                .push(dismiss);

            column = column.push(
                Container::new(row)
                    .padding([spacing::XS, spacing::SM])
                    .max_width(sizing::TOAST_WIDTH)
                    .style(toast_style(notification.severity)),
            );
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

fn toast_style(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = match severity {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(palette::WHITE),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss_by_id() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-download-success"));
        manager.push(Notification::error("notification-download-error"));
        assert!(manager.has_notifications());

        // ids are assigned in push order starting at 0
        manager.handle_message(NotificationMessage::Dismiss(0));
        assert_eq!(manager.items.len(), 1);
        manager.handle_message(NotificationMessage::Dismiss(1));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_drops_expired_notifications() {
        let mut manager = Manager::new();
        manager
            .push(Notification::warning("notification-scan-error").auto_dismiss(Duration::ZERO));
        manager.tick();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-download-success"));
        manager.tick();
        assert!(manager.has_notifications());
    }

    #[test]
    fn text_renders_arguments() {
        let i18n = I18n::default();
        let notification =
            Notification::success("notification-download-success").with_arg("name", "a.png");
        assert!(notification.text(&i18n).contains("a.png"));
    }
}
