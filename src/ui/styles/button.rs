// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action ("Next", "Submit"). Greys out when disabled.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::from_theme(theme);
    let border = Border {
        radius: radius::MD.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(scheme.brand_primary)),
            text_color: palette::WHITE,
            border,
            shadow: shadow::SM,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: 0.9,
                ..scheme.brand_primary
            })),
            text_color: palette::WHITE,
            border,
            shadow: shadow::MD,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: 0.5,
                ..scheme.brand_primary
            })),
            text_color: Color {
                a: 0.7,
                ..palette::WHITE
            },
            border,
            shadow: shadow::NONE,
            ..Default::default()
        },
    }
}

/// Tab trigger. The active tab is drawn as a raised card.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::from_theme(theme);
        let background = if active {
            Some(Background::Color(scheme.surface_card))
        } else if matches!(status, button::Status::Hovered) {
            Some(Background::Color(Color {
                a: 0.5,
                ..scheme.border
            }))
        } else {
            None
        };

        button::Style {
            background,
            text_color: if active {
                scheme.text_primary
            } else {
                scheme.text_muted
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: if active { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Round light/dark switch in the header.
pub fn display_toggle(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::from_theme(theme);
    let alpha = match status {
        button::Status::Hovered => 0.9,
        _ => 1.0,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..scheme.brand_primary
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
