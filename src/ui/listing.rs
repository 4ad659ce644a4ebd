// SPDX-License-Identifier: MPL-2.0
//! Gallery listing: one row per entry, previewable rows open the preview.

use crate::gallery::Entry;
use crate::i18n::fluent::I18n;
use crate::media::MediaKind;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use bytesize::ByteSize;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages produced by the listing.
#[derive(Debug, Clone)]
pub enum Message {
    /// A previewable row was activated.
    Open(usize),
}

/// Renders the gallery listing.
pub fn view<'a>(entries: &'a [Entry], i18n: &'a I18n) -> Element<'a, Message> {
    if entries.is_empty() {
        return empty_view(i18n);
    }

    let mut rows = Column::new().spacing(spacing::XXS).padding(spacing::MD);

    for (index, entry) in entries.iter().enumerate() {
        rows = rows.push(row_view(index, entry, i18n));
    }

    let hint = Text::new(i18n.tr("listing-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Column::new()
        .push(scrollable(rows).height(Length::Fill))
        .push(
            Container::new(hint)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::XS),
        )
        .into()
}

fn row_view<'a>(index: usize, entry: &'a Entry, i18n: &'a I18n) -> Element<'a, Message> {
    let badge = Text::new(kind_label(entry, i18n))
        .size(typography::CAPTION)
        .width(sizing::KIND_BADGE_WIDTH);

    let name = Text::new(entry.name.as_str())
        .size(typography::BODY)
        .width(Length::Fill);

    let size = Text::new(size_label(entry)).size(typography::CAPTION);

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(badge)
        .push(name)
        .push(size);

    let row = button(content)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::SM]);

    if entry.is_previewable() {
        row.style(styles::button::listing_row)
            .on_press(Message::Open(index))
            .into()
    } else {
        row.style(styles::button::listing_row_disabled).into()
    }
}

fn empty_view(i18n: &I18n) -> Element<'_, Message> {
    let message = Text::new(i18n.tr("listing-empty"))
        .size(typography::TITLE)
        .color(palette::GRAY_400);

    Container::new(message)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn kind_label(entry: &Entry, i18n: &I18n) -> String {
    match entry.kind {
        Some(MediaKind::Image) => i18n.tr("entry-kind-image"),
        Some(MediaKind::Video) => i18n.tr("entry-kind-video"),
        None if entry.is_dir => i18n.tr("entry-kind-directory"),
        None => i18n.tr("entry-kind-file"),
    }
}

fn size_label(entry: &Entry) -> String {
    if entry.is_dir {
        String::new()
    } else {
        ByteSize(entry.size).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::entry::test_support::entry;

    #[test]
    fn size_label_is_blank_for_directories() {
        let mut dir = entry("sub", None);
        dir.is_dir = true;
        assert_eq!(size_label(&dir), "");
    }

    #[test]
    fn size_label_is_human_readable() {
        let mut file = entry("a.png", Some(MediaKind::Image));
        file.size = 2048;
        assert!(size_label(&file).starts_with("2.0 K"));
    }

    #[test]
    fn kind_label_distinguishes_directories_from_plain_files() {
        let i18n = I18n::default();
        let mut dir = entry("sub", None);
        dir.is_dir = true;
        let file = entry("notes.txt", None);

        assert_ne!(kind_label(&dir, &i18n), kind_label(&file, &i18n));
    }
}
