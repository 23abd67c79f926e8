// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header is always shown; below it the poster or the quiz, depending
//! on the quiz phase.

use super::Message;
use crate::domain::{QuizPhase, ViewState};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::poster::{self, ViewContext as PosterViewContext};
use crate::ui::quiz::{self, ViewContext as QuizViewContext};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub state: &'a ViewState,
}

/// Renders the page for the current phase.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(HeaderViewContext {
        display_mode: ctx.state.display_mode(),
    })
    .map(Message::Header);

    let body: Element<'_, Message> = match ctx.state.phase() {
        QuizPhase::Browsing => {
            poster::view(PosterViewContext { state: ctx.state }).map(Message::Poster)
        }
        QuizPhase::QuizActive => {
            quiz::view(QuizViewContext { state: ctx.state }).map(Message::Quiz)
        }
    };

    let column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header_view)
        .push(body);

    let centered = Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center);

    Container::new(scrollable(centered))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SectionId;

    #[test]
    fn renders_in_both_phases() {
        let mut state = ViewState::new();
        let _ = view(ViewContext { state: &state });

        for id in SectionId::ALL {
            state.select_section(id);
        }
        assert!(state.advance_to_quiz());
        let _ = view(ViewContext { state: &state });
    }
}
