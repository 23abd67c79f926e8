// SPDX-License-Identifier: MPL-2.0
//! `loading_poster` is an interactive training poster about heavy vehicle
//! loading requirements, built with the Iced GUI framework.
//!
//! The learner browses three sections, unlocks a one-question knowledge
//! check once every section has been visited, and gets immediate feedback
//! on the chosen answer. A light/dark switch is always available.
//!
//! # Layers
//!
//! - [`domain`] - Pure session state and its transitions
//! - [`content`] - Static poster text and icon choices
//! - [`ui`] - Views, styles and design tokens
//! - [`app`] - Iced wiring, startup configuration
//! - [`error`] - Errors of the ambient parts (config, CLI)

pub mod app;
pub mod content;
pub mod domain;
pub mod error;
pub mod ui;
