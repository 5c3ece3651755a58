// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox overlay: media, navigation arrows, counter, close.
//!
//! The overlay is a stack over the gallery base. Clicking the dimmed
//! backdrop closes it; the inner content panel is wrapped in `opaque` so
//! clicks on the media, the arrows, or the counter never reach the
//! backdrop's close handler.

use crate::media::MediaDescriptor;
use crate::ui::design_tokens::{palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::gallery::component::{ImageSlot, Message};
use crate::ui::gallery::{self, ViewContext};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Stack, Text};
use iced::{Element, Length};

/// Renders the gallery `base` with the lightbox overlay stacked on top.
pub fn view<'a>(
    ctx: &ViewContext<'a>,
    descriptor: &'a MediaDescriptor,
    slot: &'a ImageSlot,
    counter: (usize, usize),
    base: Element<'a, Message>,
) -> Element<'a, Message> {
    let media: Element<'a, Message> = match descriptor {
        MediaDescriptor::RemoteVideo { .. } => embed_panel(ctx, descriptor),
        MediaDescriptor::LocalImage { .. } => {
            gallery::preview_surface(descriptor, slot, ctx.i18n)
        }
    };

    let media_region = Container::new(media)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let arrow = |glyph: &'static str, message: Message| {
        button(Text::new(glyph).size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button_overlay(WHITE, 0.0, 0.5))
            .on_press(message)
    };

    let left_zone = Container::new(arrow("‹", Message::NavigatePrevious))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center);

    let right_zone = Container::new(arrow("›", Message::NavigateNext))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center);

    let close_zone = Container::new(
        button(Text::new("✕").size(typography::TITLE_MD))
            .padding(spacing::XS)
            .style(styles::button_overlay(WHITE, 0.0, 0.5))
            .on_press(Message::CloseLightbox),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .align_x(Horizontal::Right);

    let counter_zone = Container::new(
        Container::new(
            Text::new(format!("{} / {}", counter.0, counter.1)).size(typography::BODY),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::MD)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom);

    let chrome = Stack::new()
        .push(media_region)
        .push(left_zone)
        .push(right_zone)
        .push(close_zone)
        .push(counter_zone);

    let content = Container::new(chrome)
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .max_height(sizing::LIGHTBOX_MAX_HEIGHT)
        .style(styles::overlay::content_panel);

    // Backdrop click closes; the inner `opaque` absorbs content clicks.
    let overlay = mouse_area(
        center(opaque(content))
            .padding(spacing::LG)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::CloseLightbox);

    Stack::new().push(base).push(opaque(overlay)).into()
}

/// Player panel for remote videos: a play control that hands the derived
/// embed URL to the hosting environment, plus the URL as a caption.
fn embed_panel<'a>(
    ctx: &ViewContext<'a>,
    descriptor: &'a MediaDescriptor,
) -> Element<'a, Message> {
    let embed_url = descriptor.embed_url().unwrap_or_default();

    let play = button(Text::new("▶").size(sizing::PLAY_BADGE_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::video_play_overlay())
        .on_press(Message::OpenEmbedPressed);

    let label = Text::new(ctx.i18n.tr("lightbox-open-embed")).size(typography::BODY);
    let caption = Text::new(embed_url).size(typography::CAPTION);

    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(play)
        .push(label)
        .push(caption);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::media_backdrop)
        .into()
}
