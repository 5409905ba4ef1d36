//! Conventional-commit version resolution and release-note generation.
//!
//! Given the commit messages since the last release tag and the build
//! context, [`resolve`] classifies each commit, computes the next semantic
//! version, appends a build suffix and renders categorized release notes.

pub mod advisory;
pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod notes;
pub mod resolver;

pub use advisory::Advisory;
pub use domain::{classify, BuildContext, ClassifiedCommit, CommitCategory, Scenario, Version};
pub use error::{ReleaseError, Result};
pub use resolver::{resolve, ResolutionResult, Resolver};
