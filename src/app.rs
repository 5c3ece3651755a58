// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery component.
//!
//! The `App` struct wires together the domains (gallery, localization,
//! preferences) and translates messages into side effects like spawning
//! image decode tasks or handing an embed URL to the system browser. This
//! file intentionally keeps policy decisions (window size, locale
//! resolution, keyboard scoping) close to the main update loop so it is
//! easy to audit user-facing behavior.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::manifest::{self, MediaEntry};
use crate::media;
use crate::ui::gallery::component::{self, Effect};
use crate::ui::gallery::ViewContext;
use crate::ui::theming::ThemeMode;
use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{self, key::Named};
use iced::widget::{Container, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the gallery component,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    gallery: component::State,
    theme_mode: ThemeMode,
    thumbnail_height: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("media_count", &self.gallery.media().len())
            .field("lightbox_open", &self.gallery.is_lightbox_open())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(component::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional path to a TOML gallery manifest.
    pub manifest_path: Option<String>,
    /// Media identifiers given directly on the command line.
    pub media: Vec<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Assembles the ordered media entry list from the manifest and the
/// command line. Manifest entries come first, positional identifiers after.
fn collect_entries(flags: &Flags) -> Vec<MediaEntry> {
    let mut entries = flags
        .manifest_path
        .as_deref()
        .map(manifest::load)
        .unwrap_or_default()
        .media;
    entries.extend(flags.media.iter().cloned().map(MediaEntry::Bare));
    entries
}

/// Maps lightbox hotkeys to gallery messages; all other keys are ignored.
fn lightbox_hotkey(
    key: keyboard::Key,
    _modifiers: keyboard::Modifiers,
) -> Option<component::Message> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(component::Message::CloseLightbox),
        keyboard::Key::Named(Named::ArrowRight) => Some(component::Message::NavigateNext),
        keyboard::Key::Named(Named::ArrowLeft) => Some(component::Message::NavigatePrevious),
        _ => None,
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: component::State::default(),
            theme_mode: ThemeMode::System,
            thumbnail_height: config::DEFAULT_THUMBNAIL_HEIGHT,
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous image
    /// decoding for every local entry received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let descriptors = media::classify_entries(&collect_entries(&flags));

        let app = App {
            i18n,
            gallery: component::State::new(descriptors),
            theme_mode: config.theme_mode,
            thumbnail_height: config
                .thumbnail_height
                .unwrap_or(config::DEFAULT_THUMBNAIL_HEIGHT),
        };

        let loads = app.gallery.pending_image_sources().into_iter().map(
            |(index, src)| {
                Task::perform(
                    async move { (index, media::load_image(&src)) },
                    |(index, result)| {
                        Message::Gallery(component::Message::ImageLoaded { index, result })
                    },
                )
            },
        );
        let task = Task::batch(loads);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The keyboard subscription exists exactly while the lightbox is open;
    /// Iced's subscription diffing attaches it on open and detaches it on
    /// close or teardown, on every exit path.
    fn subscription(&self) -> Subscription<Message> {
        if self.gallery.is_lightbox_open() {
            keyboard::listen()
                .filter_map(|event| match event {
                    keyboard::Event::KeyPressed {
                        key, modifiers, ..
                    } => lightbox_hotkey(key, modifiers),
                    _ => None,
                })
                .map(Message::Gallery)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                match self.gallery.update(gallery_message) {
                    Effect::None => {}
                    Effect::OpenExternal(url) => {
                        if let Err(err) = webbrowser::open(&url) {
                            eprintln!("Failed to open embed URL: {err}");
                        }
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        if self.gallery.is_empty() {
            return Container::new(Text::new(self.i18n.tr("gallery-empty")))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into();
        }

        self.gallery
            .view(ViewContext {
                i18n: &self.i18n,
                thumbnail_height: self.thumbnail_height,
            })
            .map(Message::Gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collect_entries_without_input_is_empty() {
        let flags = Flags::default();
        assert!(collect_entries(&flags).is_empty());
    }

    #[test]
    fn collect_entries_appends_cli_media_after_manifest() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("gallery.toml");
        fs::write(&manifest_path, "media = [\"dQw4w9WgXcQ\"]")
            .expect("failed to write manifest");

        let flags = Flags {
            manifest_path: Some(manifest_path.to_string_lossy().into_owned()),
            media: vec!["photo.jpg".to_string()],
            ..Flags::default()
        };

        let entries = collect_entries(&flags);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], MediaEntry::Bare("dQw4w9WgXcQ".to_string()));
        assert_eq!(entries[1], MediaEntry::Bare("photo.jpg".to_string()));
    }

    #[test]
    fn collect_entries_with_missing_manifest_keeps_cli_media() {
        let flags = Flags {
            manifest_path: Some("/nonexistent/gallery.toml".to_string()),
            media: vec!["photo.jpg".to_string()],
            ..Flags::default()
        };

        let entries = collect_entries(&flags);
        assert_eq!(entries, vec![MediaEntry::Bare("photo.jpg".to_string())]);
    }

    #[test]
    fn lightbox_hotkeys_map_to_gallery_messages() {
        let modifiers = keyboard::Modifiers::empty();
        assert!(matches!(
            lightbox_hotkey(keyboard::Key::Named(Named::Escape), modifiers),
            Some(component::Message::CloseLightbox)
        ));
        assert!(matches!(
            lightbox_hotkey(keyboard::Key::Named(Named::ArrowRight), modifiers),
            Some(component::Message::NavigateNext)
        ));
        assert!(matches!(
            lightbox_hotkey(keyboard::Key::Named(Named::ArrowLeft), modifiers),
            Some(component::Message::NavigatePrevious)
        ));
    }

    #[test]
    fn other_keys_are_ignored_by_the_lightbox() {
        let modifiers = keyboard::Modifiers::empty();
        assert!(lightbox_hotkey(keyboard::Key::Named(Named::Space), modifiers).is_none());
        assert!(lightbox_hotkey(
            keyboard::Key::Character("a".into()),
            modifiers
        )
        .is_none());
    }
}
