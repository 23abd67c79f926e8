// SPDX-License-Identifier: MPL-2.0
//! Light/dark display mode.
//!
//! The mode is purely cosmetic. It is handed to the rendering layer as an
//! explicit value and never feeds back into the quiz or section state.

/// Display mode of the whole window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite mode.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Holds the current [`DisplayMode`] and flips it on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayModeToggle {
    mode: DisplayMode,
}

impl DisplayModeToggle {
    #[must_use]
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(self) -> DisplayMode {
        self.mode
    }

    /// Inverts the mode and returns the new value.
    pub fn toggle(&mut self) -> DisplayMode {
        self.mode = self.mode.inverted();
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(DisplayModeToggle::default().mode(), DisplayMode::Light);
        assert!(!DisplayMode::default().is_dark());
    }

    #[test]
    fn toggle_alternates() {
        let mut toggle = DisplayModeToggle::default();
        assert_eq!(toggle.toggle(), DisplayMode::Dark);
        assert_eq!(toggle.mode(), DisplayMode::Dark);
        assert_eq!(toggle.toggle(), DisplayMode::Light);
        assert_eq!(toggle.mode(), DisplayMode::Light);
    }

    #[test]
    fn starts_in_requested_mode() {
        let toggle = DisplayModeToggle::new(DisplayMode::Dark);
        assert!(toggle.mode().is_dark());
    }
}
