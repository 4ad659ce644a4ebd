// SPDX-License-Identifier: MPL-2.0
//! Preview controls bar: position indicator, navigation, save-a-copy,
//! slideshow, fullscreen, and close.

use crate::gallery::{NavigationInfo, Slideshow};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment, Element};

/// Messages produced by the controls bar.
#[derive(Debug, Clone)]
pub enum Message {
    First,
    Previous,
    Next,
    Last,
    Download,
    IntervalChanged(String),
    ToggleSlideshow,
    ToggleFullscreen,
    Close,
}

/// Context required to render the controls bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub info: NavigationInfo,
    pub slideshow: Slideshow,
    pub interval_input: &'a str,
    pub fullscreen: bool,
}

/// Renders the controls bar under the preview pane.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let position = position_indicator(ctx.info);

    let slideshow_label = if ctx.slideshow.is_running() {
        ctx.i18n.tr("slideshow-stop")
    } else {
        ctx.i18n.tr("slideshow-start")
    };

    let fullscreen_label = if ctx.fullscreen {
        ctx.i18n.tr("fullscreen-exit")
    } else {
        ctx.i18n.tr("fullscreen-enter")
    };

    let mut bar = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(nav_button("⏮", Message::First))
        .push(nav_button("◀", Message::Previous))
        .push(position)
        .push(nav_button("▶", Message::Next))
        .push(nav_button("⏭", Message::Last))
        .push(action_button(ctx.i18n.tr("preview-download"), Message::Download));

    // The interval field replaces the blocking prompt: submitting it (or the
    // toggle button) starts the slideshow, empty or invalid input cancels.
    if !ctx.slideshow.is_running() {
        bar = bar.push(
            text_input(
                &ctx.i18n.tr("slideshow-interval-placeholder"),
                ctx.interval_input,
            )
            .size(typography::BODY)
            .width(sizing::INTERVAL_INPUT_WIDTH)
            .on_input(Message::IntervalChanged)
            .on_submit(Message::ToggleSlideshow),
        );
    }

    bar = bar
        .push(action_button(slideshow_label, Message::ToggleSlideshow))
        .push(action_button(fullscreen_label, Message::ToggleFullscreen))
        .push(action_button(ctx.i18n.tr("preview-close"), Message::Close));

    Container::new(bar)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::controls_bar)
        .into()
}

fn position_indicator<'a>(info: NavigationInfo) -> Element<'a, Message> {
    let position = info
        .current_index
        .map_or_else(|| "–".to_string(), |idx| (idx + 1).to_string());

    Container::new(
        Text::new(format!("{position} / {}", info.total_count))
            .size(typography::BODY)
            .color(palette::WHITE),
    )
    .padding([0.0, spacing::XS])
    .into()
}

fn nav_button(glyph: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(glyph).size(typography::TITLE))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message)
        .into()
}

fn action_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message)
        .into()
}
