use std::fmt;

use crate::domain::Version;

/// Non-fatal anomalies recovered during a resolution.
/// These are reported back to the caller alongside the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// No last version was supplied, base defaulted to 0.0.0
    MissingTag,
    /// Last version exists but cannot be parsed, base defaulted to 0.0.0
    UnparsableTag { tag: String, reason: String },
    /// No qualifying commits since the last release marker
    NoNewCommits { base: Version },
    /// Blank commit messages dropped before classification
    EmptyMessagesSkipped { count: usize },
    /// A release was requested on a branch other than the default one
    ReleaseIgnored { branch: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MissingTag => {
                write!(f, "No previous version tag, starting from 0.0.0")
            }
            Advisory::UnparsableTag { tag, reason } => {
                write!(
                    f,
                    "Cannot parse tag '{}': {} (starting from 0.0.0)",
                    tag, reason
                )
            }
            Advisory::NoNewCommits { base } => {
                write!(f, "No new commits since {}, version left unchanged", base)
            }
            Advisory::EmptyMessagesSkipped { count } => {
                write!(f, "Skipped {} empty commit message(s)", count)
            }
            Advisory::ReleaseIgnored { branch } => {
                write!(
                    f,
                    "Release requested on non-default branch '{}' was ignored",
                    branch
                )
            }
        }
    }
}
