use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Fixed commit taxonomy, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommitCategory {
    Breaking,
    Feature,
    Fix,
    Docs,
    Chore,
    Other,
}

impl CommitCategory {
    /// All categories in release-note section order
    pub const ALL: [CommitCategory; 6] = [
        CommitCategory::Breaking,
        CommitCategory::Feature,
        CommitCategory::Fix,
        CommitCategory::Docs,
        CommitCategory::Chore,
        CommitCategory::Other,
    ];

    /// Key used in configuration files (`[notes.sections]`)
    pub fn key(&self) -> &'static str {
        match self {
            CommitCategory::Breaking => "breaking",
            CommitCategory::Feature => "feature",
            CommitCategory::Fix => "fix",
            CommitCategory::Docs => "docs",
            CommitCategory::Chore => "chore",
            CommitCategory::Other => "other",
        }
    }

    /// Default release-note section title
    pub fn section_title(&self) -> &'static str {
        match self {
            CommitCategory::Breaking => "Breaking Changes",
            CommitCategory::Feature => "New Features",
            CommitCategory::Fix => "Bug Fixes",
            CommitCategory::Docs => "Documentation",
            CommitCategory::Chore => "Maintenance & Refactoring",
            CommitCategory::Other => "Other Changes",
        }
    }
}

impl fmt::Display for CommitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

static BREAKING_FOOTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)BREAKING CHANGE:").expect("breaking footer pattern is valid"));

// Checked against the first line only, first match wins.
static SUBJECT_RULES: Lazy<Vec<(CommitCategory, Regex)>> = Lazy::new(|| {
    [
        (CommitCategory::Breaking, r"(?i)^[a-z0-9_-]+(\([^)]*\))?!:"),
        (CommitCategory::Feature, r"(?i)^feat"),
        (CommitCategory::Fix, r"(?i)^fix"),
        (CommitCategory::Docs, r"(?i)^docs?"),
        (CommitCategory::Chore, r"(?i)^(chore|refactor|style|test|ci|build)"),
    ]
    .into_iter()
    .map(|(category, pattern)| {
        (
            category,
            Regex::new(pattern).expect("subject rule pattern is valid"),
        )
    })
    .collect()
});

/// Classify a single commit message (subject and body).
///
/// Total over all input: anything unrecognised, including an empty message,
/// is `Other`. A `BREAKING CHANGE:` footer anywhere in the message outranks
/// every subject rule.
pub fn classify(message: &str) -> CommitCategory {
    let message = message.trim_start();
    if BREAKING_FOOTER.is_match(message) {
        return CommitCategory::Breaking;
    }

    let subject = message.lines().next().unwrap_or_default();
    SUBJECT_RULES
        .iter()
        .find(|(_, rule)| rule.is_match(subject))
        .map(|(category, _)| *category)
        .unwrap_or(CommitCategory::Other)
}

/// A commit message paired with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    message: String,
    category: CommitCategory,
}

impl ClassifiedCommit {
    /// Classify a message and keep its original text
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let category = classify(&message);
        ClassifiedCommit { message, category }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> CommitCategory {
        self.category
    }
}

/// Per-category tally over a set of classified commits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub breaking: usize,
    pub feature: usize,
    pub fix: usize,
    pub docs: usize,
    pub chore: usize,
    pub other: usize,
}

impl CategoryCounts {
    /// Count commits per category
    pub fn tally<'a>(commits: impl IntoIterator<Item = &'a ClassifiedCommit>) -> Self {
        let mut counts = CategoryCounts::default();
        for commit in commits {
            counts.record(commit.category());
        }
        counts
    }

    fn record(&mut self, category: CommitCategory) {
        match category {
            CommitCategory::Breaking => self.breaking += 1,
            CommitCategory::Feature => self.feature += 1,
            CommitCategory::Fix => self.fix += 1,
            CommitCategory::Docs => self.docs += 1,
            CommitCategory::Chore => self.chore += 1,
            CommitCategory::Other => self.other += 1,
        }
    }

    pub fn get(&self, category: CommitCategory) -> usize {
        match category {
            CommitCategory::Breaking => self.breaking,
            CommitCategory::Feature => self.feature,
            CommitCategory::Fix => self.fix,
            CommitCategory::Docs => self.docs,
            CommitCategory::Chore => self.chore,
            CommitCategory::Other => self.other,
        }
    }

    pub fn total(&self) -> usize {
        CommitCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}
