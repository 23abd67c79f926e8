// SPDX-License-Identifier: MPL-2.0
//! Page header: title and the light/dark switch.

use crate::content;
use crate::domain::DisplayMode;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, text, Container, Row, Space},
    Element, Font, Length, Theme,
};

/// Contextual data needed to render the header.
pub struct ViewContext {
    pub display_mode: DisplayMode,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleDisplayMode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ToggleDisplayMode,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleDisplayMode => Event::ToggleDisplayMode,
    }
}

/// Render the header row.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let title = text(content::TITLE)
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::from_theme(theme).brand_primary),
        });

    // Shows the mode the button switches to.
    let glyph = if ctx.display_mode.is_dark() {
        icons::SUN
    } else {
        icons::MOON
    };

    let toggle = button(
        Container::new(text(glyph).size(sizing::ICON_SM))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::TOGGLE_BUTTON))
    .height(Length::Fixed(sizing::TOGGLE_BUTTON))
    .padding(spacing::XS)
    .style(styles::button::display_toggle)
    .on_press(Message::ToggleDisplayMode);

    Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_renders_in_both_modes() {
        let _light = view(ViewContext {
            display_mode: DisplayMode::Light,
        });
        let _dark = view(ViewContext {
            display_mode: DisplayMode::Dark,
        });
    }

    #[test]
    fn toggle_message_becomes_toggle_event() {
        assert_eq!(update(Message::ToggleDisplayMode), Event::ToggleDisplayMode);
    }
}
