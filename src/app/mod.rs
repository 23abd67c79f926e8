// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced runtime wiring.
//!
//! `App` owns the single [`ViewState`] of the session. Startup policy
//! (config loading, display mode precedence, window size) lives here; the
//! transitions themselves live in the domain layer.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::content;
use crate::domain::{SectionId, ViewState};
use crate::ui::theming;
use config::Config;
use iced::{window, Element, Task, Theme};

/// Root Iced application state.
#[derive(Debug, Clone, Default)]
pub struct App {
    state: ViewState,
}

/// Builds the window settings from the loaded configuration.
#[must_use]
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.clamped_size();

    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Loads the config, logging a warning when it falls back to defaults.
fn load_config() -> Config {
    let (config, warning) = config::load();
    if let Some(message) = warning {
        tracing::warn!("{message}");
    }
    config
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let config = load_config();
    let settings = window_settings(&config);

    // iced 0.14 requires an Fn boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .run()
}

impl App {
    /// Builds the session state: resolves the startup display mode (CLI
    /// first, then the config file) and opens the first section, which
    /// marks it visited.
    fn new(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let startup_mode = flags
            .display_mode
            .unwrap_or(config.general.initial_display_mode);
        let mode = startup_mode.resolve();
        tracing::debug!(?startup_mode, ?mode, "startup display mode");

        let mut state = ViewState::with_display_mode(mode);
        state.select_section(SectionId::Requirements);

        (App { state }, Task::none())
    }

    fn title(&self) -> String {
        content::TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.state.display_mode())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut self.state, header_message)
            }
            Message::Poster(poster_message) => {
                update::handle_poster_message(&mut self.state, poster_message)
            }
            Message::Quiz(quiz_message) => {
                update::handle_quiz_message(&mut self.state, quiz_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext { state: &self.state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayMode, Feedback, QuizPhase};
    use crate::ui::theming::StartupDisplayMode;
    use crate::ui::{header, poster, quiz};

    fn boot(flags: Flags) -> App {
        let (app, _task) = App::new(flags, &Config::default());
        app
    }

    #[test]
    fn new_opens_first_section_as_visited() {
        let app = boot(Flags::default());
        assert_eq!(app.state.active_section(), SectionId::Requirements);
        assert!(app.state.is_visited(SectionId::Requirements));
        assert!(!app.state.is_visited(SectionId::Principles));
        assert_eq!(app.state.phase(), QuizPhase::Browsing);
    }

    #[test]
    fn cli_display_mode_overrides_config() {
        let config = Config {
            general: config::GeneralConfig {
                initial_display_mode: StartupDisplayMode::Light,
            },
            ..Config::default()
        };
        let flags = Flags {
            display_mode: Some(StartupDisplayMode::Dark),
            ..Flags::default()
        };

        let (app, _task) = App::new(flags, &config);
        assert_eq!(app.state.display_mode(), DisplayMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn config_display_mode_applies_without_flag() {
        let config = Config {
            general: config::GeneralConfig {
                initial_display_mode: StartupDisplayMode::Dark,
            },
            ..Config::default()
        };

        let (app, _task) = App::new(Flags::default(), &config);
        assert_eq!(app.state.display_mode(), DisplayMode::Dark);
    }

    #[test]
    fn title_is_poster_title() {
        assert_eq!(boot(Flags::default()).title(), content::TITLE);
    }

    #[test]
    fn theme_follows_toggle() {
        let mut app = boot(Flags::default());
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::Header(header::Message::ToggleDisplayMode));
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn full_walkthrough_reaches_correct_feedback() {
        let mut app = boot(Flags::default());

        let _ = app.update(Message::Poster(poster::Message::Next));
        assert_eq!(app.state.phase(), QuizPhase::Browsing);

        for id in [SectionId::Principles, SectionId::Assessment] {
            let _ = app.update(Message::Poster(poster::Message::SelectSection(id)));
        }
        let _ = app.update(Message::Poster(poster::Message::Next));
        assert_eq!(app.state.phase(), QuizPhase::QuizActive);

        let _ = app.update(Message::Quiz(quiz::Message::Submit));
        assert!(matches!(
            app.state.feedback(),
            Some(Feedback::Incorrect { .. })
        ));

        let _ = app.update(Message::Quiz(quiz::Message::OptionPicked(1)));
        assert_eq!(app.state.feedback(), Some(Feedback::Correct));
        let _ = app.view();
    }

    #[test]
    fn window_settings_use_clamped_config_size() {
        let mut config = Config::default();
        config.window.width = 100.0;

        let settings = window_settings(&config);
        assert_eq!(settings.size.width, config::MIN_WINDOW_WIDTH);
        assert_eq!(settings.size.height, config::WINDOW_DEFAULT_HEIGHT);
    }
}
