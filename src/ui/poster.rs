// SPDX-License-Identifier: MPL-2.0
//! Browsing view: the three poster tabs, the safety banner and the "Next" gate.

use crate::content::{self, IconKind, ItemStyle, SectionContent};
use crate::domain::{SectionId, ViewState};
use crate::ui::components;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, text, Column, Container, Row, Space, Text},
    Element, Font, Length, Theme,
};

/// Contextual data needed to render the poster.
pub struct ViewContext<'a> {
    pub state: &'a ViewState,
}

/// Messages emitted by the poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectSection(SectionId),
    Next,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SectionSelected(SectionId),
    AdvanceRequested,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SelectSection(id) => Event::SectionSelected(id),
        Message::Next => Event::AdvanceRequested,
    }
}

/// Whether the "Next" button accepts presses.
#[must_use]
pub fn next_enabled(state: &ViewState) -> bool {
    state.all_sections_visited()
}

/// Render the browsing view.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.state.active_section();

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(build_tab_list(ctx.state))
        .push(build_section_card(content::section(active)))
        .push(build_warning_banner())
        .push(build_footer(ctx.state))
        .into()
}

fn build_tab_list<'a>(state: &ViewState) -> Element<'a, Message> {
    let tabs = SectionId::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, id| {
            row.push(build_tab(
                id,
                id == state.active_section(),
                state.is_visited(id),
            ))
        });

    Container::new(tabs)
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(styles::container::tab_list)
        .into()
}

fn build_tab<'a>(id: SectionId, active: bool, visited: bool) -> Element<'a, Message> {
    let badge = Container::new(
        text(if visited { icons::CHECK } else { icons::CIRCLE }).size(sizing::ICON_XS),
    )
    .padding([0.0, spacing::XS])
    .style(styles::container::badge(visited));

    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(content::section(id).tab_label).size(typography::BODY))
        .push(badge);

    button(
        Container::new(label)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::FillPortion(1))
    .height(Length::Fixed(sizing::TAB_HEIGHT))
    .style(styles::button::tab(active))
    .on_press(Message::SelectSection(id))
    .into()
}

fn build_section_card<'a>(section: &'static SectionContent) -> Element<'a, Message> {
    let items = section
        .items
        .iter()
        .fold(Column::new().spacing(item_spacing(section.style)), |col, item| {
            col.push(build_item(section.style, item.icon, item.text))
        });

    components::card(section.title, section.description, items.into())
}

fn item_spacing(style: ItemStyle) -> f32 {
    match style {
        ItemStyle::Icon => spacing::MD,
        ItemStyle::Bullet => spacing::XS,
    }
}

fn build_item<'a>(
    style: ItemStyle,
    icon: Option<IconKind>,
    line: &'static str,
) -> Element<'a, Message> {
    let marker: Element<'a, Message> = match (style, icon) {
        (ItemStyle::Icon, Some(kind)) => icons::sized(kind, sizing::ICON_MD).into(),
        _ => text("•").size(typography::BODY).into(),
    };

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(marker)
                .width(Length::Fixed(sizing::ICON_COLUMN))
                .align_x(Horizontal::Center),
        )
        .push(Text::new(line).size(typography::BODY).width(Length::Fill))
        .into()
}

fn build_warning_banner<'a>() -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(IconKind::Warning, sizing::ICON_MD))
        .push(
            Text::new(content::WARNING_BANNER)
                .size(typography::BODY_SM)
                .width(Length::Fill),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::warning_banner)
        .into()
}

fn build_footer<'a>(state: &ViewState) -> Element<'a, Message> {
    let complete = next_enabled(state);

    let status = if complete {
        text(content::ALL_SECTIONS_COMPLETED)
            .size(typography::BODY_SM)
            .font(Font {
                weight: Weight::Semibold,
                ..Font::default()
            })
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::from_theme(theme).badge_visited),
            })
    } else {
        text(content::COMPLETE_ALL_SECTIONS)
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::from_theme(theme).text_muted),
            })
    };

    let next = button(text(format!("{} {}", content::NEXT_BUTTON, icons::ARROW_RIGHT)))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(complete.then_some(Message::Next));

    Row::new()
        .align_y(Vertical::Center)
        .push(status)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .into()
}
