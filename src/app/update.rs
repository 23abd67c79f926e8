// SPDX-License-Identifier: MPL-2.0
//! Message handlers that apply view events to the session state.

use super::Message;
use crate::domain::ViewState;
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::poster::{self, Event as PosterEvent};
use crate::ui::quiz::{self, Event as QuizEvent};
use iced::Task;

/// Handles header messages.
pub fn handle_header_message(state: &mut ViewState, message: header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::ToggleDisplayMode => {
            let mode = state.toggle_display_mode();
            tracing::debug!(?mode, "display mode toggled");
        }
    }
    Task::none()
}

/// Handles tab selection and the "Next" button.
pub fn handle_poster_message(state: &mut ViewState, message: poster::Message) -> Task<Message> {
    match poster::update(message) {
        PosterEvent::SectionSelected(id) => {
            state.select_section(id);
            tracing::debug!(
                section = %id,
                visited = state.visits().visited_count(),
                "section selected"
            );
        }
        PosterEvent::AdvanceRequested => {
            if state.advance_to_quiz() {
                tracing::info!("all sections visited, quiz unlocked");
            } else {
                tracing::warn!(
                    visited = state.visits().visited_count(),
                    "advance requested before every section was visited"
                );
            }
        }
    }
    Task::none()
}

/// Handles answer selection and submission.
pub fn handle_quiz_message(state: &mut ViewState, message: quiz::Message) -> Task<Message> {
    match quiz::update(state.question(), message) {
        QuizEvent::None => {}
        QuizEvent::AnswerSelected(answer) => {
            state.select_answer(answer);
            tracing::debug!(answer, "answer selected");
        }
        QuizEvent::SubmitRequested => {
            state.submit_answer();
            tracing::info!(
                answer = state.selected_answer(),
                correct = state.is_correct(),
                "answer submitted"
            );
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayMode, Feedback, QuizPhase, SectionId};

    fn visit_all(state: &mut ViewState) {
        for id in SectionId::ALL {
            let _ = handle_poster_message(state, poster::Message::SelectSection(id));
        }
    }

    #[test]
    fn toggle_message_flips_display_mode() {
        let mut state = ViewState::new();
        let _ = handle_header_message(&mut state, header::Message::ToggleDisplayMode);
        assert_eq!(state.display_mode(), DisplayMode::Dark);
        let _ = handle_header_message(&mut state, header::Message::ToggleDisplayMode);
        assert_eq!(state.display_mode(), DisplayMode::Light);
    }

    #[test]
    fn next_is_ignored_until_all_sections_visited() {
        let mut state = ViewState::new();
        let _ = handle_poster_message(
            &mut state,
            poster::Message::SelectSection(SectionId::Principles),
        );
        let _ = handle_poster_message(&mut state, poster::Message::Next);
        assert_eq!(state.phase(), QuizPhase::Browsing);

        visit_all(&mut state);
        let _ = handle_poster_message(&mut state, poster::Message::Next);
        assert_eq!(state.phase(), QuizPhase::QuizActive);
    }

    #[test]
    fn picking_and_submitting_shows_feedback() {
        let mut state = ViewState::new();
        visit_all(&mut state);
        let _ = handle_poster_message(&mut state, poster::Message::Next);

        let _ = handle_quiz_message(&mut state, quiz::Message::OptionPicked(1));
        let _ = handle_quiz_message(&mut state, quiz::Message::Submit);
        assert_eq!(state.feedback(), Some(Feedback::Correct));

        let _ = handle_quiz_message(&mut state, quiz::Message::OptionPicked(0));
        assert!(matches!(
            state.feedback(),
            Some(Feedback::Incorrect { .. })
        ));
    }

    #[test]
    fn out_of_range_option_leaves_answer_unchanged() {
        let mut state = ViewState::new();
        let _ = handle_quiz_message(&mut state, quiz::Message::OptionPicked(2));
        let before = state.selected_answer().to_string();

        let _ = handle_quiz_message(&mut state, quiz::Message::OptionPicked(42));
        assert_eq!(state.selected_answer(), before);
    }
}
