use crate::domain::CommitCategory;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "release-notes.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".release-notes.toml";

/// Represents the complete configuration for release resolution.
///
/// Contains build-context wiring and release-note rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub context: ContextConfig,

    #[serde(default)]
    pub notes: NotesConfig,
}

fn default_branch() -> String {
    "main".to_string()
}

/// Configuration for building a [`BuildContext`](crate::domain::BuildContext)
/// from CI variables.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ContextConfig {
    /// Used when the environment does not name the default branch
    #[serde(default = "default_branch")]
    pub default_branch: String,

    #[serde(default)]
    pub vars: ContextVars,
}

impl Default for ContextConfig {
    fn default() -> Self {
        ContextConfig {
            default_branch: default_branch(),
            vars: ContextVars::default(),
        }
    }
}

/// Names of the variables read by the context adapter
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContextVars {
    pub pull_request: String,
    pub pull_request_id: String,
    pub branch: String,
    pub default_branch: String,
    pub release: String,
    pub revision: String,
    pub commit_count: String,
}

impl Default for ContextVars {
    fn default() -> Self {
        ContextVars {
            pull_request: "IS_PULL_REQUEST".to_string(),
            pull_request_id: "PULL_REQUEST_ID".to_string(),
            branch: "BRANCH_NAME".to_string(),
            default_branch: "DEFAULT_BRANCH".to_string(),
            release: "RELEASE_REQUESTED".to_string(),
            revision: "SHORT_REVISION".to_string(),
            commit_count: "COMMIT_COUNT".to_string(),
        }
    }
}

fn default_title() -> String {
    "Release {version}".to_string()
}

fn default_empty_notice() -> String {
    "No changes since last release.".to_string()
}

/// Configuration for release-note rendering.
///
/// Section titles are keyed by category (`breaking`, `feature`, `fix`,
/// `docs`, `chore`, `other`); unknown keys are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NotesConfig {
    /// Document title, `{version}` is replaced with the final version
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_empty_notice")]
    pub empty_notice: String,

    #[serde(default)]
    pub sections: HashMap<String, String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        NotesConfig {
            title: default_title(),
            empty_notice: default_empty_notice(),
            sections: HashMap::new(),
        }
    }
}

impl NotesConfig {
    /// Title for the document of `version`
    pub fn title_for(&self, version: &str) -> String {
        self.title.replace("{version}", version)
    }

    /// Section heading for a category, honoring overrides
    pub fn section_title(&self, category: CommitCategory) -> &str {
        self.sections
            .get(category.key())
            .map(String::as_str)
            .unwrap_or_else(|| category.section_title())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `release-notes.toml` in current directory
/// 3. `.release-notes.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.context.default_branch, "main");
        assert_eq!(config.context.vars.pull_request_id, "PULL_REQUEST_ID");
        assert_eq!(config.notes.title_for("1.2.3"), "Release 1.2.3");
        assert_eq!(config.notes.empty_notice, "No changes since last release.");
    }

    #[test]
    fn test_section_title_override() {
        let mut notes = NotesConfig::default();
        notes
            .sections
            .insert("fix".to_string(), "Fixes".to_string());
        assert_eq!(notes.section_title(CommitCategory::Fix), "Fixes");
        assert_eq!(notes.section_title(CommitCategory::Docs), "Documentation");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[context.vars]
branch = "CI_COMMIT_REF_NAME"
"#,
        )
        .unwrap();
        assert_eq!(config.context.vars.branch, "CI_COMMIT_REF_NAME");
        assert_eq!(config.context.vars.revision, "SHORT_REVISION");
        assert_eq!(config.context.default_branch, "main");
        assert_eq!(config.notes, NotesConfig::default());
    }
}
