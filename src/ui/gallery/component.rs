// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component owns the classified descriptor list, one image slot per
//! descriptor for decoded bitmaps, and the [`SelectionState`] driving the
//! main preview and the lightbox. Messages come from the rendered widgets
//! and from the application's lightbox keyboard subscription.

use crate::error::Error;
use crate::media::{ImageData, MediaDescriptor};
use crate::selection::SelectionState;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::gallery::{self, lightbox, ViewContext};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Column, Row, Scrollable, Space};
use iced::{Element, Length};

/// Messages emitted by gallery widgets and the keyboard subscription.
#[derive(Debug, Clone)]
pub enum Message {
    /// The main preview surface was activated (click or Enter).
    PreviewPressed,
    /// The thumbnail at this index was activated (click or Enter).
    ThumbnailPressed(usize),
    /// Close request: escape key, backdrop click, or the close control.
    CloseLightbox,
    /// Step the open lightbox forward (arrow key or right control).
    NavigateNext,
    /// Step the open lightbox backward (arrow key or left control).
    NavigatePrevious,
    /// The lightbox play control of a remote video was activated.
    OpenEmbedPressed,
    /// A local image decode task finished.
    ImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Hand this URL to the system browser (remote-video embed).
    OpenExternal(String),
}

/// Decode state of the bitmap backing one descriptor.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Remote media: no local bytes, the surface renders a badge.
    Remote,
    /// Local image with a decode task in flight.
    Loading,
    Ready(ImageData),
    Failed(Error),
}

/// Complete gallery component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    media: Vec<MediaDescriptor>,
    slots: Vec<ImageSlot>,
    selection: SelectionState,
}

impl State {
    /// Creates gallery state for an already classified descriptor list.
    #[must_use]
    pub fn new(media: Vec<MediaDescriptor>) -> Self {
        let mut state = Self::default();
        state.set_media(media);
        state
    }

    /// Replaces the media list, rebuilding slots and re-clamping selection.
    ///
    /// Classification happens once here, never during rendering.
    pub fn set_media(&mut self, media: Vec<MediaDescriptor>) {
        self.slots = media
            .iter()
            .map(|descriptor| match descriptor {
                MediaDescriptor::RemoteVideo { .. } => ImageSlot::Remote,
                MediaDescriptor::LocalImage { .. } => ImageSlot::Loading,
            })
            .collect();
        self.selection.set_len(media.len());
        self.media = media;
    }

    /// Local image sources whose decode has not completed yet, with their
    /// indices. The application turns these into async load tasks.
    #[must_use]
    pub fn pending_image_sources(&self) -> Vec<(usize, String)> {
        self.media
            .iter()
            .enumerate()
            .filter(|(index, _)| matches!(self.slots[*index], ImageSlot::Loading))
            .filter_map(|(index, descriptor)| match descriptor {
                MediaDescriptor::LocalImage { src, .. } => Some((index, src.clone())),
                MediaDescriptor::RemoteVideo { .. } => None,
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.selection.is_lightbox_open()
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn media(&self) -> &[MediaDescriptor] {
        &self.media
    }

    /// Applies a message and reports the side effect the caller must run.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::PreviewPressed => {
                if let Some(active) = self.selection.active_index() {
                    self.selection.open_lightbox(active as i64);
                }
                Effect::None
            }
            Message::ThumbnailPressed(index) => {
                self.selection.select_active(index);
                Effect::None
            }
            Message::CloseLightbox => {
                self.selection.close_lightbox();
                Effect::None
            }
            Message::NavigateNext => {
                self.selection.advance_lightbox(1);
                Effect::None
            }
            Message::NavigatePrevious => {
                self.selection.advance_lightbox(-1);
                Effect::None
            }
            Message::OpenEmbedPressed => self
                .selection
                .lightbox_index()
                .and_then(|index| self.media.get(index))
                .and_then(MediaDescriptor::embed_url)
                .map_or(Effect::None, Effect::OpenExternal),
            Message::ImageLoaded { index, result } => {
                // A stale index (list replaced mid-flight) is dropped.
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = match result {
                        Ok(data) => ImageSlot::Ready(data),
                        Err(err) => ImageSlot::Failed(err),
                    };
                }
                Effect::None
            }
        }
    }

    /// Renders the gallery; an empty media list renders nothing.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let Some(active) = self.selection.active_index() else {
            return Space::new().into();
        };

        let preview = button(gallery::preview_surface(
            &self.media[active],
            &self.slots[active],
            ctx.i18n,
        ))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .style(styles::button::media_surface)
        .on_press(Message::PreviewPressed);

        let mut thumbnails = Row::new().spacing(spacing::XS);
        for (index, descriptor) in self.media.iter().enumerate() {
            let style = if index == active {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            thumbnails = thumbnails.push(
                button(gallery::thumbnail_content(
                    descriptor,
                    &self.slots[index],
                    ctx.thumbnail_height,
                ))
                .padding(spacing::XXS)
                .style(style)
                .on_press(Message::ThumbnailPressed(index)),
            );
        }

        let strip = Scrollable::new(thumbnails)
            .width(Length::Fill)
            .direction(Direction::Horizontal(Scrollbar::new()));

        let base = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .push(preview)
            .push(strip);

        match self.selection.lightbox_index() {
            Some(index) => lightbox::view(
                &ctx,
                &self.media[index],
                &self.slots[index],
                (index + 1, self.media.len()),
                base.into(),
            ),
            None => base.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::classify;

    fn sample_state() -> State {
        State::new(vec![classify("dQw4w9WgXcQ"), classify("photo.jpg")])
    }

    #[test]
    fn new_state_starts_at_first_item_with_lightbox_closed() {
        let state = sample_state();
        assert_eq!(state.selection().active_index(), Some(0));
        assert!(!state.is_lightbox_open());
    }

    #[test]
    fn preview_press_opens_lightbox_at_active_index() {
        let mut state = sample_state();
        state.update(Message::ThumbnailPressed(1));
        state.update(Message::PreviewPressed);
        assert_eq!(state.selection().lightbox_index(), Some(1));
    }

    #[test]
    fn thumbnail_press_changes_active_without_opening_lightbox() {
        let mut state = sample_state();
        let effect = state.update(Message::ThumbnailPressed(1));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.selection().active_index(), Some(1));
        assert!(!state.is_lightbox_open());
    }

    #[test]
    fn lightbox_navigation_wraps_and_leaves_active_untouched() {
        let mut state = sample_state();
        state.update(Message::PreviewPressed);
        state.update(Message::NavigateNext);
        state.update(Message::NavigateNext);
        assert_eq!(state.selection().lightbox_index(), Some(0));
        assert_eq!(state.selection().active_index(), Some(0));
    }

    #[test]
    fn close_message_closes_the_lightbox() {
        let mut state = sample_state();
        state.update(Message::PreviewPressed);
        state.update(Message::CloseLightbox);
        assert!(!state.is_lightbox_open());
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let mut state = sample_state();
        state.update(Message::NavigatePrevious);
        assert!(!state.is_lightbox_open());
        assert_eq!(state.selection().active_index(), Some(0));
    }

    #[test]
    fn open_embed_reports_the_external_url_for_videos() {
        let mut state = sample_state();
        state.update(Message::PreviewPressed); // lightbox on the video
        let effect = state.update(Message::OpenEmbedPressed);
        assert_eq!(
            effect,
            Effect::OpenExternal("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0".to_string())
        );
    }

    #[test]
    fn open_embed_is_inert_for_images_and_closed_lightbox() {
        let mut state = sample_state();
        assert_eq!(state.update(Message::OpenEmbedPressed), Effect::None);

        state.update(Message::ThumbnailPressed(1));
        state.update(Message::PreviewPressed); // lightbox on the image
        assert_eq!(state.update(Message::OpenEmbedPressed), Effect::None);
    }

    #[test]
    fn image_loaded_fills_the_matching_slot() {
        let mut state = sample_state();
        let data = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        state.update(Message::ImageLoaded {
            index: 1,
            result: Ok(data),
        });
        assert!(matches!(state.slots[1], ImageSlot::Ready(_)));
    }

    #[test]
    fn image_loaded_with_stale_index_is_dropped() {
        let mut state = sample_state();
        let data = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let effect = state.update(Message::ImageLoaded {
            index: 9,
            result: Ok(data),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.slots.len(), 2);
    }

    #[test]
    fn pending_image_sources_lists_local_images_only() {
        let state = sample_state();
        assert_eq!(
            state.pending_image_sources(),
            vec![(1, "photo.jpg".to_string())]
        );
    }

    #[test]
    fn set_media_reclamps_selection_and_rebuilds_slots() {
        let mut state = sample_state();
        state.update(Message::ThumbnailPressed(1));
        state.update(Message::PreviewPressed);

        state.set_media(vec![classify("other.png")]);
        assert_eq!(state.selection().active_index(), Some(0));
        assert_eq!(state.selection().lightbox_index(), Some(0));
        assert_eq!(state.pending_image_sources().len(), 1);
    }

    #[test]
    fn empty_media_list_has_no_active_item() {
        let state = State::new(Vec::new());
        assert!(state.is_empty());
        assert_eq!(state.selection().active_index(), None);
    }
}
