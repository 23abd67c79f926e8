// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes and the startup display preference.

use crate::domain::DisplayMode;
use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Semantic colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface_page: Color,
    pub surface_card: Color,
    pub border: Color,

    // Text
    pub text_primary: Color,
    pub text_muted: Color,

    pub brand_primary: Color,

    // Quiz feedback panels
    pub success_surface: Color,
    pub success_text: Color,
    pub error_surface: Color,
    pub error_text: Color,

    // Safety banner
    pub warning_surface: Color,
    pub warning_text: Color,
    pub warning_icon: Color,

    // Tab badges
    pub badge_visited: Color,
    pub badge_pending: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::WHITE,
            surface_card: palette::WHITE,
            border: palette::GRAY_300,

            text_primary: palette::GRAY_950,
            text_muted: palette::GRAY_500,

            brand_primary: palette::PRIMARY_500,

            success_surface: palette::GREEN_100,
            success_text: palette::GREEN_800,
            error_surface: palette::RED_100,
            error_text: palette::RED_800,

            warning_surface: palette::YELLOW_100,
            warning_text: palette::YELLOW_800,
            warning_icon: palette::YELLOW_600,

            badge_visited: palette::GREEN_500,
            badge_pending: palette::GRAY_300,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_950,
            surface_card: palette::GRAY_900,
            border: palette::GRAY_800,

            text_primary: palette::GRAY_100,
            text_muted: palette::GRAY_500,

            brand_primary: palette::PRIMARY_400,

            success_surface: palette::GREEN_900,
            success_text: palette::GREEN_200,
            error_surface: palette::RED_900,
            error_text: palette::RED_200,

            // Banner has no dark variant.
            warning_surface: palette::YELLOW_100,
            warning_text: palette::YELLOW_900,
            warning_icon: palette::YELLOW_600,

            badge_visited: palette::GREEN_500,
            badge_pending: palette::GRAY_800,
        }
    }

    #[must_use]
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self::light(),
            DisplayMode::Dark => Self::dark(),
        }
    }

    /// Scheme matching the theme Iced hands to style functions.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Dark) {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Built-in Iced theme applied to the whole window for a mode.
#[must_use]
pub fn iced_theme(mode: DisplayMode) -> Theme {
    match mode {
        DisplayMode::Light => Theme::Light,
        DisplayMode::Dark => Theme::Dark,
    }
}

/// Display mode requested at startup, from the config file or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupDisplayMode {
    #[default]
    Light,
    Dark,
    /// Follow the desktop preference, detected once.
    System,
}

impl StartupDisplayMode {
    /// Resolves to a concrete mode. System detection falls back to light.
    #[must_use]
    pub fn resolve(self) -> DisplayMode {
        match self {
            StartupDisplayMode::Light => DisplayMode::Light,
            StartupDisplayMode::Dark => DisplayMode::Dark,
            StartupDisplayMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => DisplayMode::Dark,
                _ => DisplayMode::Light,
            },
        }
    }
}

impl std::str::FromStr for StartupDisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(StartupDisplayMode::Light),
            "dark" => Ok(StartupDisplayMode::Dark),
            "system" => Ok(StartupDisplayMode::System),
            other => Err(format!(
                "invalid display mode: {other} (expected light, dark or system)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_page() {
        assert!(ColorScheme::light().surface_page.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_page() {
        assert!(ColorScheme::dark().surface_page.r < 0.2);
    }

    #[test]
    fn text_contrasts_with_page_in_both_modes() {
        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            let scheme = ColorScheme::for_mode(mode);
            let page = scheme.surface_page.r + scheme.surface_page.g + scheme.surface_page.b;
            let text = scheme.text_primary.r + scheme.text_primary.g + scheme.text_primary.b;
            assert!((page - text).abs() > 1.5, "{mode:?} text is too close to page");
        }
    }

    #[test]
    fn iced_theme_follows_mode() {
        assert_eq!(iced_theme(DisplayMode::Light), Theme::Light);
        assert_eq!(iced_theme(DisplayMode::Dark), Theme::Dark);
    }

    #[test]
    fn startup_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse(), Ok(StartupDisplayMode::Dark));
        assert_eq!("light".parse(), Ok(StartupDisplayMode::Light));
        assert_eq!("SYSTEM".parse(), Ok(StartupDisplayMode::System));
        assert!("sepia".parse::<StartupDisplayMode>().is_err());
    }

    #[test]
    fn explicit_startup_modes_resolve_directly() {
        assert_eq!(StartupDisplayMode::Light.resolve(), DisplayMode::Light);
        assert_eq!(StartupDisplayMode::Dark.resolve(), DisplayMode::Dark);
        // Depends on the desktop; only check it does not panic.
        let _ = StartupDisplayMode::System.resolve();
    }
}
