// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, gap and size used by the poster lives here.

## Organization

- **Palette**: Base colors (grays, brand blue, accents for icons and panels)
- **Spacing**: Spacing scale (4px baseline)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border widths
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use loading_poster::ui::design_tokens::{palette, spacing};

let accent = palette::BLUE_500;
let gap = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.05, 0.07, 0.1);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.12, 0.16);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.18, 0.22);
    pub const GRAY_500: Color = Color::from_rgb(0.45, 0.47, 0.5);
    pub const GRAY_300: Color = Color::from_rgb(0.8, 0.82, 0.85);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.97);

    // Brand
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.6, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.15, 0.39, 0.92);
    pub const PRIMARY_600: Color = Color::from_rgb(0.11, 0.31, 0.85);

    // Icon accents
    pub const BLUE_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const RED_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
    pub const GREEN_500: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const YELLOW_500: Color = Color::from_rgb(0.92, 0.7, 0.03);
    pub const YELLOW_600: Color = Color::from_rgb(0.79, 0.54, 0.02);

    // Feedback and banner surfaces
    pub const GREEN_100: Color = Color::from_rgb(0.86, 0.99, 0.91);
    pub const GREEN_200: Color = Color::from_rgb(0.73, 0.97, 0.82);
    pub const GREEN_800: Color = Color::from_rgb(0.09, 0.4, 0.2);
    pub const GREEN_900: Color = Color::from_rgb(0.08, 0.33, 0.18);
    pub const RED_100: Color = Color::from_rgb(1.0, 0.89, 0.89);
    pub const RED_200: Color = Color::from_rgb(1.0, 0.79, 0.79);
    pub const RED_800: Color = Color::from_rgb(0.6, 0.11, 0.11);
    pub const RED_900: Color = Color::from_rgb(0.5, 0.11, 0.11);
    pub const YELLOW_100: Color = Color::from_rgb(1.0, 0.98, 0.76);
    pub const YELLOW_800: Color = Color::from_rgb(0.52, 0.3, 0.05);
    pub const YELLOW_900: Color = Color::from_rgb(0.44, 0.25, 0.07);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Glyph size for badge icons inside tab buttons.
    pub const ICON_XS: f32 = 12.0;
    pub const ICON_SM: f32 = 18.0;
    /// Glyph size for list icons (requirements, assessment questions).
    pub const ICON_MD: f32 = 24.0;

    /// Poster column never grows past this width.
    pub const CONTENT_MAX_WIDTH: f32 = 896.0;

    pub const TAB_HEIGHT: f32 = 40.0;
    pub const TOGGLE_BUTTON: f32 = 40.0;

    /// Fixed width of the icon column so list text lines up.
    pub const ICON_COLUMN: f32 = 28.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading.
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Quiz question, emphasized lines.
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Status line, card descriptions.
    pub const BODY_SM: f32 = 13.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::ICON_SM > sizing::ICON_XS);
    assert!(sizing::ICON_COLUMN >= sizing::ICON_MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn panel_backgrounds_are_lighter_than_their_text() {
        assert!(palette::GREEN_100.g > palette::GREEN_800.g);
        assert!(palette::RED_100.r > palette::RED_800.r);
        assert!(palette::YELLOW_100.r > palette::YELLOW_800.r);
    }
}
