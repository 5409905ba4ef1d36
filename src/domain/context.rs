//! Build context and the scenario decision list that picks a version suffix

use crate::config::{ContextConfig, ContextVars};
use crate::error::{ReleaseError, Result};
use std::fmt;
use tracing::debug;

/// Where and how the current build is running
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildContext {
    pub is_pull_request: bool,
    pub pull_request_id: Option<String>,
    pub current_branch: String,
    pub default_branch: String,
    pub is_release_requested: bool,
    pub short_revision: String,
    pub commit_count: u64,
}

impl BuildContext {
    /// Push build on `branch`, with `default_branch` as the repository's main line
    pub fn new(
        branch: impl Into<String>,
        default_branch: impl Into<String>,
        short_revision: impl Into<String>,
    ) -> Self {
        BuildContext {
            current_branch: branch.into(),
            default_branch: default_branch.into(),
            short_revision: short_revision.into(),
            ..Default::default()
        }
    }

    /// Mark as a pull request build
    pub fn pull_request(mut self, id: Option<impl Into<String>>) -> Self {
        self.is_pull_request = true;
        self.pull_request_id = id.map(Into::into);
        self
    }

    /// Mark as an explicitly requested release
    pub fn release(mut self) -> Self {
        self.is_release_requested = true;
        self
    }

    pub fn commit_count(mut self, count: u64) -> Self {
        self.commit_count = count;
        self
    }

    /// Build a context from named variables.
    ///
    /// `lookup` resolves a variable name to its value. Missing flags are false,
    /// a missing commit count is zero, and a missing default branch falls back
    /// to the configured one.
    pub fn from_vars<F>(config: &ContextConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars: &ContextVars = &config.vars;
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let commit_count = match read(&vars.commit_count) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                ReleaseError::context(format!(
                    "{} must be a non-negative integer, got '{}'",
                    vars.commit_count, raw
                ))
            })?,
            None => 0,
        };

        Ok(BuildContext {
            is_pull_request: read(&vars.pull_request).is_some_and(|v| is_truthy(&v)),
            pull_request_id: read(&vars.pull_request_id),
            current_branch: read(&vars.branch).unwrap_or_default(),
            default_branch: read(&vars.default_branch)
                .unwrap_or_else(|| config.default_branch.clone()),
            is_release_requested: read(&vars.release).is_some_and(|v| is_truthy(&v)),
            short_revision: read(&vars.revision).unwrap_or_default(),
            commit_count,
        })
    }

    /// Build a context from the process environment
    pub fn from_env(config: &ContextConfig) -> Result<Self> {
        Self::from_vars(config, |name| std::env::var(name).ok())
    }

    pub fn is_default_branch(&self) -> bool {
        self.current_branch == self.default_branch
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Mutually exclusive build classification driving the suffix shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    PullRequest,
    NonDefaultBranch,
    Release,
    MainBuild,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::PullRequest => write!(f, "pull-request"),
            Scenario::NonDefaultBranch => write!(f, "non-default-branch"),
            Scenario::Release => write!(f, "release"),
            Scenario::MainBuild => write!(f, "main-build"),
        }
    }
}

/// Pick the scenario and its version suffix.
///
/// First matching rule wins: pull request, non-default branch, release,
/// then main build. A release flag on a non-default branch is ignored.
pub fn resolve_scenario(ctx: &BuildContext) -> Result<(Scenario, String)> {
    let (scenario, suffix) = pick_scenario(ctx)?;
    debug!(
        %scenario,
        suffix = suffix.as_str(),
        branch = ctx.current_branch.as_str(),
        "picked build scenario"
    );
    Ok((scenario, suffix))
}

fn pick_scenario(ctx: &BuildContext) -> Result<(Scenario, String)> {
    if ctx.is_pull_request {
        let id = ctx
            .pull_request_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ReleaseError::context("pull request build without an identifier"))?;
        return Ok((
            Scenario::PullRequest,
            format!("-pr{}+{}", id, ctx.short_revision),
        ));
    }

    if !ctx.is_default_branch() {
        return Ok((
            Scenario::NonDefaultBranch,
            format!("-br+{}", ctx.short_revision),
        ));
    }

    if ctx.is_release_requested {
        return Ok((Scenario::Release, String::new()));
    }

    Ok((
        Scenario::MainBuild,
        format!("-rc{}+{}", ctx.commit_count, ctx.short_revision),
    ))
}
