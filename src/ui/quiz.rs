// SPDX-License-Identifier: MPL-2.0
//! Quiz view: the knowledge-check question, its options and the feedback panel.

use crate::content;
use crate::domain::{Feedback, QuizQuestion, ViewState};
use crate::ui::components;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, radio, text, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the quiz.
pub struct ViewContext<'a> {
    pub state: &'a ViewState,
}

/// Messages emitted by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Radio option picked, by position in the option list.
    OptionPicked(usize),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    AnswerSelected(&'static str),
    SubmitRequested,
}

/// Translates a widget message into an event, resolving option positions
/// to their text.
#[must_use]
pub fn update(question: &QuizQuestion, message: Message) -> Event {
    match message {
        Message::OptionPicked(index) => question
            .options
            .get(index)
            .copied()
            .map_or(Event::None, Event::AnswerSelected),
        Message::Submit => Event::SubmitRequested,
    }
}

/// Render the quiz card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let question = ctx.state.question();
    let selected = question.option_index(ctx.state.selected_answer());

    let prompt = Text::new(question.prompt)
        .size(typography::BODY_LG)
        .font(Font {
            weight: Weight::Semibold,
            ..Font::default()
        });

    let options = question.options.iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |col, (index, option)| {
            col.push(
                radio(*option, index, selected, Message::OptionPicked)
                    .size(sizing::ICON_SM)
                    .text_size(typography::BODY)
                    .spacing(spacing::XS),
            )
        },
    );

    let submit = button(text(content::SUBMIT_BUTTON))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Submit);

    let mut body = Column::new()
        .spacing(spacing::MD)
        .push(prompt)
        .push(options)
        .push(submit);

    if let Some(feedback) = ctx.state.feedback() {
        body = body.push(build_feedback(feedback));
    }

    components::card(content::QUIZ_TITLE, content::QUIZ_DESCRIPTION, body.into())
}

fn build_feedback<'a>(feedback: Feedback) -> Element<'a, Message> {
    let (glyph, message) = match feedback {
        Feedback::Correct => (icons::CHECK, content::FEEDBACK_CORRECT.to_string()),
        Feedback::Incorrect { expected } => {
            (icons::WARNING, content::feedback_incorrect(expected))
        }
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(glyph).size(sizing::ICON_SM))
        .push(Text::new(message).size(typography::BODY).width(Length::Fill));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::feedback(feedback.is_correct()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SectionId;

    fn quiz_state() -> ViewState {
        let mut state = ViewState::new();
        for id in SectionId::ALL {
            state.select_section(id);
        }
        assert!(state.advance_to_quiz());
        state
    }

    #[test]
    fn picking_an_option_selects_its_text() {
        let question = QuizQuestion::LOADING_REQUIREMENTS;
        assert_eq!(
            update(&question, Message::OptionPicked(1)),
            Event::AnswerSelected("The load must be evenly distributed across the vehicle")
        );
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let question = QuizQuestion::LOADING_REQUIREMENTS;
        assert_eq!(update(&question, Message::OptionPicked(99)), Event::None);
    }

    #[test]
    fn submit_message_requests_submit() {
        let question = QuizQuestion::LOADING_REQUIREMENTS;
        assert_eq!(update(&question, Message::Submit), Event::SubmitRequested);
    }

    #[test]
    fn quiz_renders_before_and_after_feedback() {
        let mut state = quiz_state();
        let _ = view(ViewContext { state: &state });

        state.submit_answer();
        let _ = view(ViewContext { state: &state });

        state.select_answer(state.question().correct_answer);
        let _ = view(ViewContext { state: &state });
    }
}
