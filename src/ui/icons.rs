// SPDX-License-Identifier: MPL-2.0
//! Text glyphs standing in for icons, with their accent colors.

use crate::content::IconKind;
use crate::ui::design_tokens::palette;
use iced::widget::{text, Text};
use iced::Color;

pub const CHECK: &str = "✓";
pub const CIRCLE: &str = "○";
pub const ARROW_RIGHT: &str = "→";
pub const SUN: &str = "☀";
pub const MOON: &str = "☾";
pub const WARNING: &str = "⚠";

#[must_use]
pub fn glyph(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Truck => "⛟",
        IconKind::ShieldAlert => "⛨",
        IconKind::CheckCircle => "✔",
        IconKind::Help => "?",
        IconKind::Warning => WARNING,
    }
}

#[must_use]
pub fn color(kind: IconKind) -> Color {
    match kind {
        IconKind::Truck => palette::BLUE_500,
        IconKind::ShieldAlert => palette::RED_500,
        IconKind::CheckCircle => palette::GREEN_500,
        IconKind::Help => palette::YELLOW_500,
        IconKind::Warning => palette::YELLOW_600,
    }
}

/// Colored glyph at the given size.
pub fn sized<'a>(kind: IconKind, size: f32) -> Text<'a> {
    text(glyph(kind)).size(size).color(color(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_icons_have_distinct_colors() {
        let colors = [
            color(IconKind::Truck),
            color(IconKind::ShieldAlert),
            color(IconKind::CheckCircle),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn every_kind_has_a_glyph() {
        for kind in [
            IconKind::Truck,
            IconKind::ShieldAlert,
            IconKind::CheckCircle,
            IconKind::Help,
            IconKind::Warning,
        ] {
            assert!(!glyph(kind).is_empty());
        }
    }
}
