// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::header;
use crate::ui::poster;
use crate::ui::quiz;
use crate::ui::theming::StartupDisplayMode;

/// Top-level messages consumed by `App::update`. Each variant forwards the
/// message of one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Header(header::Message),
    Poster(poster::Message),
    Quiz(quiz::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Display mode override; takes precedence over `settings.toml`.
    pub display_mode: Option<StartupDisplayMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LOADING_POSTER_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
