// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_page)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Bordered card holding a section or the quiz.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_card)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Muted strip behind the tab triggers.
pub fn tab_list(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..scheme.border
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Yellow safety reminder.
pub fn warning_banner(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::from_theme(theme);
    filled(scheme.warning_surface, scheme.warning_text, radius::MD)
}

/// Feedback panel after submitting, green or red.
pub fn feedback(correct: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::from_theme(theme);
        if correct {
            filled(scheme.success_surface, scheme.success_text, radius::SM)
        } else {
            filled(scheme.error_surface, scheme.error_text, radius::SM)
        }
    }
}

/// Pill showing whether a tab was visited.
pub fn badge(visited: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::from_theme(theme);
        let background = if visited {
            scheme.badge_visited
        } else {
            scheme.badge_pending
        };
        let text = if visited {
            Color::WHITE
        } else {
            scheme.text_muted
        };
        filled(background, text, radius::FULL)
    }
}

fn filled(background: Color, text: Color, corner: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
