// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Each view follows the Elm-style "state down, messages up" pattern: it
//! renders from a `ViewContext`, emits a local `Message`, and its `update`
//! turns that into an `Event` the application applies to the session state.
//!
//! # Views
//!
//! - [`header`] - Title and light/dark switch
//! - [`poster`] - Section tabs, banner and the "Next" gate
//! - [`quiz`] - Knowledge check with feedback
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable widgets (card)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing, typography
//! - [`theming`] - Color schemes per display mode, startup mode preference
//! - [`icons`] - Glyphs and accent colors for content icons

pub mod components;
pub mod design_tokens;
pub mod header;
pub mod icons;
pub mod poster;
pub mod quiz;
pub mod styles;
pub mod theming;
