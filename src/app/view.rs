// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the gallery listing, or the preview overlay while an entry is
//! open, with the toast notifications stacked on top.

use super::Message;
use crate::gallery::{Entry, GalleryNavigator, Slideshow};
use crate::i18n::fluent::I18n;
use crate::media::PreviewData;
use crate::ui::controls;
use crate::ui::design_tokens::spacing;
use crate::ui::listing;
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::styles;
use iced::widget::{Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryNavigator,
    pub preview_data: Option<&'a PreviewData>,
    pub slideshow: Slideshow,
    pub interval_input: &'a str,
    pub fullscreen: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = match ctx.gallery.current_entry() {
        Some(entry) => view_preview(&ctx, entry),
        None => listing::view(ctx.gallery.entries(), ctx.i18n).map(Message::Listing),
    };

    if !ctx.notifications.has_notifications() {
        return base;
    }

    Stack::new()
        .push(base)
        .push(ctx.notifications.view(ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The open preview: pane filling the window, controls bar along the bottom.
fn view_preview<'a>(ctx: &ViewContext<'a>, entry: &'a Entry) -> Element<'a, Message> {
    let pane = preview::view(entry, ctx.preview_data, ctx.i18n).map(Message::Preview);

    let controls = controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        info: ctx.gallery.info(),
        slideshow: ctx.slideshow,
        interval_input: ctx.interval_input,
        fullscreen: ctx.fullscreen,
    })
    .map(Message::Controls);

    let controls_row = Container::new(controls)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::SM);

    let layout = iced::widget::Column::new()
        .push(Container::new(pane).width(Length::Fill).height(Length::Fill))
        .push(controls_row);

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::preview_backdrop)
        .into()
}
