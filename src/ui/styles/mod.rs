// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the poster widgets.
//!
//! Style functions derive their colors from the Iced theme they receive, so
//! switching the window theme restyles everything without passing the
//! display mode around.

pub mod button;
pub mod container;
