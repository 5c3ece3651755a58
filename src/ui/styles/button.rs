// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour boutons overlay (navigation, close, play).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border::default(),
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for the selected (active) thumbnail.
/// Uses the brand colors so the marker reads in both light and dark themes.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed | button::Status::Hovered => {
            button::Style {
                background: Some(Background::Color(if is_light {
                    palette::GRAY_100
                } else {
                    palette::GRAY_700
                })),
                text_color: if is_light { palette::GRAY_900 } else { WHITE },
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 2.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style::default(),
    }
}

/// Style for unselected thumbnails.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style::default(),
    }
}

/// Style for the main-preview surface button: no chrome of its own, the
/// media fills the region and the whole area is one click target.
pub fn media_surface(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style pour bouton play overlay vidéo.
pub fn video_play_overlay() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_thumbnail_carries_brand_border() {
        let theme = Theme::Dark;
        let style = selected(&theme, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert_eq!(style.border.width, 2.0);
    }

    #[test]
    fn unselected_thumbnail_has_thin_neutral_border() {
        let theme = Theme::Light;
        let style = unselected(&theme, button::Status::Active);
        assert_eq!(style.border.width, 1.0);
        assert_eq!(style.border.color, palette::GRAY_400);
    }

    #[test]
    fn overlay_button_darkens_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.0, 0.5);
        let normal = style_fn(&theme, button::Status::Active);
        let hovered = style_fn(&theme, button::Status::Hovered);

        let alpha = |style: &button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected background color"),
        };
        assert!(alpha(&hovered) > alpha(&normal));
    }

    #[test]
    fn media_surface_has_no_background() {
        let theme = Theme::Dark;
        let style = media_surface(&theme, button::Status::Active);
        assert!(style.background.is_none());
    }
}
