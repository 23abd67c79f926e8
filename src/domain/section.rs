// SPDX-License-Identifier: MPL-2.0
//! Poster sections and the per-session record of which ones were opened.

use std::fmt;
use std::str::FromStr;

/// One of the three tabs of the poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Requirements,
    Principles,
    Assessment,
}

impl SectionId {
    /// All sections in tab order.
    pub const ALL: [SectionId; 3] = [
        SectionId::Requirements,
        SectionId::Principles,
        SectionId::Assessment,
    ];

    /// Stable lowercase identifier (`"requirements"`, `"principles"`, `"assessment"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Requirements => "requirements",
            SectionId::Principles => "principles",
            SectionId::Assessment => "assessment",
        }
    }

    fn index(self) -> usize {
        match self {
            SectionId::Requirements => 0,
            SectionId::Principles => 1,
            SectionId::Assessment => 2,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the three sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Visited flag for every section.
///
/// All three flags always exist. A flag only ever goes from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionVisits {
    visited: [bool; 3],
}

impl SectionVisits {
    /// Marks a section as visited. Marking it again changes nothing.
    pub fn mark_visited(&mut self, id: SectionId) {
        self.visited[id.index()] = true;
    }

    #[must_use]
    pub fn is_visited(&self, id: SectionId) -> bool {
        self.visited[id.index()]
    }

    /// True once every section has been opened at least once.
    #[must_use]
    pub fn all_visited(&self) -> bool {
        self.visited.iter().all(|v| *v)
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }
}
