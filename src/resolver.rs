//! Release resolution workflow
//!
//! Composes commit analysis, the version bump, the build scenario and the
//! release notes into one result. Performs no I/O: commits, the last version
//! and the build context are supplied by the caller.

use tracing::{info, warn};

use crate::advisory::Advisory;
use crate::analyzer::{analyze_messages, bump};
use crate::config::{Config, NotesConfig};
use crate::domain::{resolve_scenario, BuildContext, Scenario, Version};
use crate::error::Result;
use crate::notes::ReleaseNotes;

/// Outcome of a single resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    /// Base version plus the scenario suffix, e.g. `1.4.3-rc2+abc123`
    pub version: String,
    pub base_version: Version,
    pub scenario: Scenario,
    pub release_notes: String,
    /// Recovered anomalies worth showing to the user
    pub advisories: Vec<Advisory>,
}

impl ResolutionResult {
    /// Final version as a semver value
    pub fn semver(&self) -> std::result::Result<semver::Version, semver::Error> {
        semver::Version::parse(&self.version)
    }
}

/// Resolves versions and release notes with a fixed notes configuration
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    notes: NotesConfig,
}

impl Resolver {
    pub fn new(config: &Config) -> Self {
        Resolver {
            notes: config.notes.clone(),
        }
    }

    /// Resolve the next version and its release notes.
    ///
    /// 1. Parse `last_version`, defaulting to 0.0.0 with an advisory
    /// 2. Pick the build scenario (fails on a pull request without id)
    /// 3. Classify the non-empty commit messages
    /// 4. With no commits, return the base version unchanged and unsuffixed
    /// 5. Otherwise bump, append the suffix and render the notes
    pub fn resolve<S: AsRef<str>>(
        &self,
        last_version: &str,
        commits: &[S],
        ctx: &BuildContext,
    ) -> Result<ResolutionResult> {
        let mut advisories = Vec::new();

        let base = parse_base_version(last_version, &mut advisories);
        let (scenario, suffix) = resolve_scenario(ctx)?;
        if scenario == Scenario::NonDefaultBranch && ctx.is_release_requested {
            advisories.push(Advisory::ReleaseIgnored {
                branch: ctx.current_branch.clone(),
            });
        }

        let analysis = analyze_messages(commits);
        if analysis.skipped_empty > 0 {
            advisories.push(Advisory::EmptyMessagesSkipped {
                count: analysis.skipped_empty,
            });
        }

        let (base_version, version) = if analysis.is_empty() {
            advisories.push(Advisory::NoNewCommits { base });
            (base, base.to_string())
        } else {
            let next = bump(base, &analysis.counts)?;
            (next, format!("{}{}", next, suffix))
        };

        let notes = ReleaseNotes::build(&version, &analysis.commits, &self.notes);

        for advisory in &advisories {
            warn!("{}", advisory);
        }
        info!(%version, %scenario, commits = analysis.commits.len(), "resolved release version");

        Ok(ResolutionResult {
            version,
            base_version,
            scenario,
            release_notes: notes.render(),
            advisories,
        })
    }
}

/// Resolve with default configuration
pub fn resolve<S: AsRef<str>>(
    last_version: &str,
    commits: &[S],
    ctx: &BuildContext,
) -> Result<ResolutionResult> {
    Resolver::default().resolve(last_version, commits, ctx)
}

fn parse_base_version(last_version: &str, advisories: &mut Vec<Advisory>) -> Version {
    if last_version.trim().is_empty() {
        advisories.push(Advisory::MissingTag);
        return Version::default();
    }

    Version::parse(last_version).unwrap_or_else(|e| {
        advisories.push(Advisory::UnparsableTag {
            tag: last_version.to_string(),
            reason: e.to_string(),
        });
        Version::default()
    })
}
