// SPDX-License-Identifier: MPL-2.0
//! Preview pane: exactly one displayable element for the open entry.
//!
//! Opening a different entry replaces the pane wholesale; there is never
//! more than one mounted media element. Images render from decoded pixels,
//! videos render as a poster pane delegating playback to the system player.

use crate::gallery::Entry;
use crate::i18n::fluent::I18n;
use crate::media::PreviewData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use bytesize::ByteSize;
use iced::widget::{button, image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages produced by the preview pane.
#[derive(Debug, Clone)]
pub enum Message {
    /// Launch the current video entry in the system player.
    OpenExternally,
}

/// Renders the pane for the open entry.
///
/// `data` is `None` while the entry is still loading.
pub fn view<'a>(
    entry: &'a Entry,
    data: Option<&'a PreviewData>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match data {
        Some(PreviewData::Image(image_data)) => image(image_data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(PreviewData::Video) => video_poster(entry, i18n),
        None => loading_view(i18n),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Poster pane shown for video entries.
fn video_poster<'a>(entry: &'a Entry, i18n: &'a I18n) -> Element<'a, Message> {
    let name = Text::new(entry.name.as_str())
        .size(typography::TITLE_LG)
        .color(palette::WHITE);

    let details = Text::new(format!(
        "{} · {}",
        i18n.tr("entry-kind-video"),
        ByteSize(entry.size)
    ))
    .size(typography::BODY)
    .color(palette::GRAY_200);

    let hint = Text::new(i18n.tr("video-poster-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("preview-open-external")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenExternally);

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(name)
        .push(details)
        .push(open_button)
        .push(hint)
        .into()
}

fn loading_view(i18n: &I18n) -> Element<'_, Message> {
    Text::new(i18n.tr("preview-loading"))
        .size(typography::BODY)
        .color(palette::GRAY_400)
        .into()
}
