// SPDX-License-Identifier: MPL-2.0
//! Domain layer - session state and rules with ZERO external dependencies.
//!
//! Nothing here knows about Iced. The application shell drives
//! [`ViewState`] from widget messages and the UI reads it back.
//!
//! # Modules
//!
//! - [`section`]: poster tabs ([`SectionId`]) and their visited flags ([`SectionVisits`])
//! - [`quiz`]: the question ([`QuizQuestion`]), [`QuizPhase`] and [`Feedback`]
//! - [`display`]: [`DisplayMode`] and its [`DisplayModeToggle`]
//! - [`view_state`]: the [`ViewState`] controller tying them together

pub mod display;
pub mod quiz;
pub mod section;
pub mod view_state;

pub use display::{DisplayMode, DisplayModeToggle};
pub use quiz::{Feedback, QuizPhase, QuizQuestion};
pub use section::{SectionId, SectionVisits, UnknownSection};
pub use view_state::ViewState;
