// SPDX-License-Identifier: MPL-2.0
//! The knowledge-check question and its phase/feedback types.

/// Whether the user is still reading the poster or answering the quiz.
///
/// Only moves forward: `Browsing` → `QuizActive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    Browsing,
    QuizActive,
}

impl QuizPhase {
    #[must_use]
    pub fn is_quiz_active(self) -> bool {
        matches!(self, Self::QuizActive)
    }
}

/// A single multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct_answer: &'static str,
}

impl QuizQuestion {
    /// The question shown after the three poster sections.
    pub const LOADING_REQUIREMENTS: QuizQuestion = QuizQuestion {
        prompt: "Which of the following is NOT one of the key loading requirements for heavy vehicles?",
        options: &[
            "Load placement must not make the vehicle unsafe or unstable",
            "The load must be evenly distributed across the vehicle",
            "The load must be unlikely to fall or be dislodged",
            "An appropriate restraint system must be used",
        ],
        correct_answer: "The load must be evenly distributed across the vehicle",
    };

    /// Exact, case-sensitive match. No trimming.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    /// Position of `answer` among the options, if it is one of them.
    #[must_use]
    pub fn option_index(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|option| *option == answer)
    }
}

/// What the feedback panel shows once the answer has been submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { expected: &'static str },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIZ: QuizQuestion = QuizQuestion::LOADING_REQUIREMENTS;

    #[test]
    fn correct_answer_is_one_of_the_options() {
        assert_eq!(QUIZ.option_index(QUIZ.correct_answer), Some(1));
        assert_eq!(QUIZ.options.len(), 4);
    }

    #[test]
    fn only_the_exact_string_is_correct() {
        assert!(QUIZ.is_correct("The load must be evenly distributed across the vehicle"));
        assert!(!QUIZ.is_correct("the load must be evenly distributed across the vehicle"));
        assert!(!QUIZ.is_correct(" The load must be evenly distributed across the vehicle"));
        assert!(!QUIZ.is_correct("An appropriate restraint system must be used"));
        assert!(!QUIZ.is_correct(""));
    }

    #[test]
    fn unknown_answer_has_no_index() {
        assert_eq!(QUIZ.option_index("Something else"), None);
    }

    #[test]
    fn default_phase_is_browsing() {
        assert_eq!(QuizPhase::default(), QuizPhase::Browsing);
        assert!(!QuizPhase::Browsing.is_quiz_active());
        assert!(QuizPhase::QuizActive.is_quiz_active());
    }
}
