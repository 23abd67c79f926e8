// SPDX-License-Identifier: MPL-2.0
//! Card container shared by the poster sections and the quiz.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    font::Weight,
    widget::{text, Column, Container, Text},
    Element, Font, Length, Theme,
};

/// Card with a bold title, a muted description and a body.
pub fn card<'a, M: 'a>(
    title: &'static str,
    description: &'static str,
    body: Element<'a, M>,
) -> Element<'a, M> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(title).size(typography::TITLE_MD).font(Font {
                weight: Weight::Semibold,
                ..Font::default()
            }),
        )
        .push(
            Text::new(description)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::from_theme(theme).text_muted),
                }),
        );

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}
