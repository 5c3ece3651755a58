// SPDX-License-Identifier: MPL-2.0
//! Gallery module rendering the main preview and the thumbnail strip.

pub mod component;
pub mod lightbox;

use self::component::{ImageSlot, Message};
use crate::i18n::fluent::I18n;
use crate::media::MediaDescriptor;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::{
    widget::{Column, Container, Image, Text},
    Element, Length,
};

/// Environment information required to render the gallery.
#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Height of the thumbnail strip entries, from user preferences.
    pub thumbnail_height: f32,
}

/// Renders the media surface for the main preview region.
///
/// Local images show their decoded bitmap (or a loading/error placeholder
/// while the decode task is in flight); remote videos show a play badge over
/// a dark surface, with the actual player living in the lightbox.
pub fn preview_surface<'a>(
    descriptor: &'a MediaDescriptor,
    slot: &'a ImageSlot,
    i18n: &I18n,
) -> Element<'a, Message> {
    match descriptor {
        MediaDescriptor::LocalImage { src, .. } => image_surface(slot, src, i18n),
        MediaDescriptor::RemoteVideo { id, .. } => {
            let badge = Text::new("▶").size(sizing::PLAY_BADGE_LG);
            let caption = Text::new(id.as_str()).size(typography::CAPTION);

            let column = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(badge)
                .push(caption);

            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::media_backdrop)
                .into()
        }
    }
}

/// Renders the content of one thumbnail button.
pub fn thumbnail_content<'a>(
    descriptor: &'a MediaDescriptor,
    slot: &'a ImageSlot,
    height: f32,
) -> Element<'a, Message> {
    match (descriptor, slot) {
        (MediaDescriptor::LocalImage { .. }, ImageSlot::Ready(data)) => {
            Image::new(data.handle.clone())
                .height(Length::Fixed(height))
                .into()
        }
        (MediaDescriptor::LocalImage { .. }, _) => {
            // Decode pending or failed: keep the slot's footprint stable.
            placeholder_tile("…", height)
        }
        (MediaDescriptor::RemoteVideo { .. }, _) => placeholder_tile("▶", height),
    }
}

fn placeholder_tile<'a>(glyph: &'a str, height: f32) -> Element<'a, Message> {
    Container::new(Text::new(glyph).size(sizing::PLAY_BADGE_SM))
        .width(Length::Fixed(height * 16.0 / 9.0))
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::media_backdrop)
        .into()
}

fn image_surface<'a>(slot: &'a ImageSlot, src: &'a str, i18n: &I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot {
        ImageSlot::Ready(data) => Image::new(data.handle.clone())
            .content_fit(iced::ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ImageSlot::Failed(_) => Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("error-load-image")).size(typography::BODY))
            .push(Text::new(src).size(typography::CAPTION))
            .into(),
        _ => Text::new(i18n.tr("media-loading"))
            .size(typography::BODY)
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::media_backdrop)
        .into()
}
