// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared by the poster and the quiz.
//!
//! # Components
//!
//! - [`card`] - Bordered card with a title, a muted description and a body

pub mod card;

pub use card::card;
