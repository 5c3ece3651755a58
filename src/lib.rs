// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a media gallery widget built with the Iced GUI framework.
//!
//! It renders a main preview, a selectable thumbnail strip, and a fullscreen
//! lightbox with keyboard and pointer navigation, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod manifest;
pub mod media;
pub mod selection;
pub mod ui;
