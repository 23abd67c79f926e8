// SPDX-License-Identifier: MPL-2.0
//! Session state of the poster and the rules that move it forward.
//!
//! ```text
//! Browsing ──advance_to_quiz() [all sections visited]──► QuizActive
//!
//! (QuizActive) feedback: Hidden ──submit_answer()──► Visible ──submit_answer()──► Visible
//! ```
//!
//! There is no way back to `Browsing` and no way to hide the feedback again.
//! Every operation is total: the guards make illegal moves no-ops instead
//! of errors.

use super::display::{DisplayMode, DisplayModeToggle};
use super::quiz::{Feedback, QuizPhase, QuizQuestion};
use super::section::{SectionId, SectionVisits};

/// Owns all mutable state of one poster session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_section: SectionId,
    visits: SectionVisits,
    phase: QuizPhase,
    selected_answer: String,
    feedback_visible: bool,
    display: DisplayModeToggle,
    question: QuizQuestion,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Fresh session in light mode. No section counts as visited yet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_display_mode(DisplayMode::default())
    }

    #[must_use]
    pub fn with_display_mode(mode: DisplayMode) -> Self {
        Self {
            active_section: SectionId::default(),
            visits: SectionVisits::default(),
            phase: QuizPhase::default(),
            selected_answer: String::new(),
            feedback_visible: false,
            display: DisplayModeToggle::new(mode),
            question: QuizQuestion::LOADING_REQUIREMENTS,
        }
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    /// Shows `id` and records it as visited.
    pub fn select_section(&mut self, id: SectionId) {
        self.active_section = id;
        self.visits.mark_visited(id);
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    #[must_use]
    pub fn is_visited(&self, id: SectionId) -> bool {
        self.visits.is_visited(id)
    }

    #[must_use]
    pub fn visits(&self) -> SectionVisits {
        self.visits
    }

    /// Gate for [`advance_to_quiz`](Self::advance_to_quiz).
    #[must_use]
    pub fn all_sections_visited(&self) -> bool {
        self.visits.all_visited()
    }

    // ------------------------------------------------------------------
    // Quiz
    // ------------------------------------------------------------------

    /// Moves to the quiz if every section was visited.
    ///
    /// Returns whether the quiz is active afterwards. When the gate is
    /// closed nothing changes.
    pub fn advance_to_quiz(&mut self) -> bool {
        if self.all_sections_visited() {
            self.phase = QuizPhase::QuizActive;
        }
        self.phase.is_quiz_active()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn question(&self) -> &QuizQuestion {
        &self.question
    }

    /// Stores the chosen answer verbatim. Allowed after feedback is shown.
    pub fn select_answer(&mut self, text: impl Into<String>) {
        self.selected_answer = text.into();
    }

    /// Empty until the user picks an option.
    #[must_use]
    pub fn selected_answer(&self) -> &str {
        &self.selected_answer
    }

    /// Reveals the feedback. Submitting without an answer is allowed.
    pub fn submit_answer(&mut self) {
        self.feedback_visible = true;
    }

    #[must_use]
    pub fn is_feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    /// Compares the current answer with the correct one, exactly.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.question.is_correct(&self.selected_answer)
    }

    /// Feedback for the answer currently selected, once it has been revealed.
    ///
    /// Evaluated live: changing the answer after submitting changes the result
    /// without another submit.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        if !self.feedback_visible {
            return None;
        }
        Some(if self.is_correct() {
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                expected: self.question.correct_answer,
            }
        })
    }

    // ------------------------------------------------------------------
    // Display mode
    // ------------------------------------------------------------------

    /// Flips light/dark and returns the new mode.
    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display.toggle()
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display.mode()
    }
}
