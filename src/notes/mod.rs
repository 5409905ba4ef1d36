//! Release notes - grouping classified commits into ordered sections.
//!
//! Separates concerns:
//! - This module - structured notes (title, sections, entries)
//! - `formatter` - markdown rendering of the structure

pub mod formatter;

use crate::config::NotesConfig;
use crate::domain::{ClassifiedCommit, CommitCategory};

pub use formatter::render;

/// One heading and its bullet entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: CommitCategory,
    pub title: String,
    /// Original commit messages, in supplied order
    pub entries: Vec<String>,
}

/// Structured release notes for a single version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub title: String,
    /// Non-empty sections in fixed category order
    pub sections: Vec<Section>,
    pub empty_notice: String,
}

impl ReleaseNotes {
    /// Group commits by category.
    ///
    /// Section order is fixed by [`CommitCategory::ALL`] and independent of
    /// the commit order; within a section entries keep the supplied order.
    /// Categories without commits get no section.
    pub fn build(version: &str, commits: &[ClassifiedCommit], config: &NotesConfig) -> Self {
        let sections = CommitCategory::ALL
            .iter()
            .filter_map(|category| {
                let entries: Vec<String> = commits
                    .iter()
                    .filter(|commit| commit.category() == *category)
                    .map(|commit| commit.message().to_string())
                    .collect();

                (!entries.is_empty()).then(|| Section {
                    category: *category,
                    title: config.section_title(*category).to_string(),
                    entries,
                })
            })
            .collect();

        ReleaseNotes {
            title: config.title_for(version),
            sections,
            empty_notice: config.empty_notice.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, category: CommitCategory) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Entry count per emitted section, for summary output
    pub fn count_by_section(&self) -> Vec<(String, usize)> {
        self.sections
            .iter()
            .map(|s| (s.title.clone(), s.entries.len()))
            .collect()
    }

    /// Render as markdown
    pub fn render(&self) -> String {
        render(self)
    }
}

/// Build and render release notes with default settings
pub fn format(version: &str, commits: &[ClassifiedCommit]) -> String {
    ReleaseNotes::build(version, commits, &NotesConfig::default()).render()
}
