// SPDX-License-Identifier: MPL-2.0
//! Static poster text.
//!
//! Which icon goes with which line is presentation data. It is kept here
//! as plain values so the UI only has to map [`IconKind`] to a glyph and a
//! color.

use crate::domain::SectionId;

/// Window and page title.
pub const TITLE: &str = "Heavy Vehicle Loading Requirements";

/// Safety reminder shown under the tabs.
pub const WARNING_BANNER: &str = "Remember: Poorly loaded vehicles can cause injuries and fatalities. \
     Always follow these guidelines and seek professional advice when needed.";

pub const ALL_SECTIONS_COMPLETED: &str = "All sections completed";
pub const COMPLETE_ALL_SECTIONS: &str = "Please complete all sections before proceeding";
pub const NEXT_BUTTON: &str = "Next";
pub const SUBMIT_BUTTON: &str = "Submit";

pub const QUIZ_TITLE: &str = "Knowledge Check";
pub const QUIZ_DESCRIPTION: &str = "Test your understanding of heavy vehicle loading requirements:";
pub const FEEDBACK_CORRECT: &str = "Correct! Well done.";

/// Message shown for a wrong (or missing) answer.
#[must_use]
pub fn feedback_incorrect(expected: &str) -> String {
    format!(
        "Incorrect. The correct answer is: \"{expected}\". Review the requirements and try again."
    )
}

/// Icon accompanying a line of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Truck,
    ShieldAlert,
    CheckCircle,
    Help,
    Warning,
}

/// How the lines of a card are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStyle {
    /// Each line carries its own icon.
    Icon,
    /// Plain bulleted list.
    Bullet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub icon: Option<IconKind>,
    pub text: &'static str,
}

impl Item {
    const fn icon(icon: IconKind, text: &'static str) -> Self {
        Self {
            icon: Some(icon),
            text,
        }
    }

    const fn plain(text: &'static str) -> Self {
        Self { icon: None, text }
    }
}

/// Content of one poster tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionContent {
    pub tab_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub style: ItemStyle,
    pub items: &'static [Item],
}

const REQUIREMENTS: SectionContent = SectionContent {
    tab_label: "Requirements",
    title: "Key Requirements",
    description: "The heavy vehicle must be loaded following these requirements:",
    style: ItemStyle::Icon,
    items: &[
        Item::icon(
            IconKind::Truck,
            "Load placement must not make the vehicle unsafe or unstable",
        ),
        Item::icon(
            IconKind::ShieldAlert,
            "Load must be unlikely to fall or be dislodged",
        ),
        Item::icon(
            IconKind::CheckCircle,
            "An appropriate restraint system must be used",
        ),
    ],
};

const PRINCIPLES: SectionContent = SectionContent {
    tab_label: "Principles",
    title: "Safe Loading Principles",
    description: "Follow these principles to ensure safe loading:",
    style: ItemStyle::Bullet,
    items: &[
        Item::plain("Choose suitable vehicles"),
        Item::plain("Determine proper load positioning"),
        Item::plain("Design effective restraint systems"),
        Item::plain("Use appropriate and sufficient equipment"),
        Item::plain("Ensure equipment is in good condition"),
        Item::plain("Provide comprehensive loading plans"),
    ],
};

const ASSESSMENT: SectionContent = SectionContent {
    tab_label: "Assessment",
    title: "Assess Your Loading",
    description: "Ask yourself these questions when evaluating your load:",
    style: ItemStyle::Icon,
    items: &[
        Item::icon(
            IconKind::Help,
            "Is the position of the load making the vehicle unsafe or unstable?",
        ),
        Item::icon(
            IconKind::Help,
            "Is the load restrained so it's unlikely to fall or be dislodged from the vehicle?",
        ),
        Item::icon(
            IconKind::Help,
            "Is the load restraint method used appropriate for the type of load?",
        ),
    ],
};

/// Content for a section.
#[must_use]
pub fn section(id: SectionId) -> &'static SectionContent {
    match id {
        SectionId::Requirements => &REQUIREMENTS,
        SectionId::Principles => &PRINCIPLES,
        SectionId::Assessment => &ASSESSMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_content() {
        for id in SectionId::ALL {
            let content = section(id);
            assert!(!content.items.is_empty(), "{id} has no items");
            assert!(!content.title.is_empty());
        }
    }

    #[test]
    fn icon_sections_give_every_line_an_icon() {
        for id in SectionId::ALL {
            let content = section(id);
            let with_icon = content.items.iter().filter(|i| i.icon.is_some()).count();
            match content.style {
                ItemStyle::Icon => assert_eq!(with_icon, content.items.len()),
                ItemStyle::Bullet => assert_eq!(with_icon, 0),
            }
        }
    }

    #[test]
    fn incorrect_feedback_quotes_the_expected_answer() {
        let text = feedback_incorrect("X");
        assert!(text.starts_with("Incorrect. The correct answer is: \"X\"."));
    }
}
