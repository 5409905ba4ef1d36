use crate::domain::{CategoryCounts, ClassifiedCommit, Version, VersionBump};
use crate::error::Result;
use tracing::debug;

/// Classified view of the commits since the last release marker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitAnalysis {
    /// Non-empty commits in the order they were supplied
    pub commits: Vec<ClassifiedCommit>,
    pub counts: CategoryCounts,
    /// Blank or whitespace-only messages dropped before classification
    pub skipped_empty: usize,
}

impl CommitAnalysis {
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Bump implied by these commits, `None` when there is nothing to release
    pub fn bump_type(&self) -> Option<VersionBump> {
        (!self.is_empty()).then(|| determine_bump(&self.counts))
    }
}

/// Classify every non-empty message, preserving order
pub fn analyze_messages<S: AsRef<str>>(messages: &[S]) -> CommitAnalysis {
    let mut analysis = CommitAnalysis::default();

    for message in messages {
        let message = message.as_ref();
        if message.trim().is_empty() {
            analysis.skipped_empty += 1;
            continue;
        }

        let commit = ClassifiedCommit::new(message);
        debug!(
            category = %commit.category(),
            subject = message.lines().next().unwrap_or_default(),
            "classified commit"
        );
        analysis.commits.push(commit);
    }

    analysis.counts = CategoryCounts::tally(&analysis.commits);
    analysis
}

/// Highest-severity change dominates; only presence of breaking or feature commits matters
pub fn determine_bump(counts: &CategoryCounts) -> VersionBump {
    if counts.breaking > 0 {
        VersionBump::Major
    } else if counts.feature > 0 {
        VersionBump::Minor
    } else {
        VersionBump::Patch
    }
}

/// Next base version for a release containing `counts`
pub fn bump(base: Version, counts: &CategoryCounts) -> Result<Version> {
    base.bump(determine_bump(counts))
}
