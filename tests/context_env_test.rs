// tests/context_env_test.rs
use git_release_notes::config::load_config;
use git_release_notes::{resolve, BuildContext, ReleaseError, Scenario};
use serial_test::serial;
use std::env;

const VARS: [&str; 7] = [
    "CI_IS_PR",
    "CI_PR_NUMBER",
    "CI_BRANCH",
    "CI_SHORT_SHA",
    "CI_COMMITS_SINCE_TAG",
    // Left at their default names by the fixture
    "DEFAULT_BRANCH",
    "RELEASE_REQUESTED",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_pull_request() {
    clear_vars();
    let config = load_config(Some("tests/fixtures/config_with_context.toml")).unwrap();
    env::set_var("CI_IS_PR", "true");
    env::set_var("CI_PR_NUMBER", "42");
    env::set_var("CI_BRANCH", "feature/login");
    env::set_var("CI_SHORT_SHA", "f00d");

    let ctx = BuildContext::from_env(&config.context).unwrap();
    clear_vars();

    assert!(ctx.is_pull_request);
    assert_eq!(ctx.default_branch, "trunk");
    let result = resolve("v1.0.0", &["feat: x"], &ctx).unwrap();
    assert_eq!(result.version, "1.1.0-pr42+f00d");
    assert_eq!(result.scenario, Scenario::PullRequest);
}

#[test]
#[serial]
fn test_from_env_main_build() {
    clear_vars();
    let config = load_config(Some("tests/fixtures/config_with_context.toml")).unwrap();
    env::set_var("CI_BRANCH", "trunk");
    env::set_var("CI_SHORT_SHA", "abc123");
    env::set_var("CI_COMMITS_SINCE_TAG", "3");

    let ctx = BuildContext::from_env(&config.context).unwrap();
    clear_vars();

    let result = resolve("v0.4.0", &["fix: a", "chore: b", "docs: c"], &ctx).unwrap();
    assert_eq!(result.version, "0.4.1-rc3+abc123");
    assert_eq!(result.scenario, Scenario::MainBuild);
}

#[test]
#[serial]
fn test_from_env_ignores_cleared_default_names() {
    clear_vars();
    let config = load_config(Some("tests/fixtures/config_with_context.toml")).unwrap();
    env::set_var("DEFAULT_BRANCH", "main");
    env::set_var("RELEASE_REQUESTED", "true");
    clear_vars();
    env::set_var("CI_BRANCH", "trunk");

    let ctx = BuildContext::from_env(&config.context).unwrap();
    clear_vars();

    assert_eq!(ctx.default_branch, "trunk");
    assert!(!ctx.is_release_requested);
}

#[test]
#[serial]
fn test_from_env_bad_commit_count() {
    clear_vars();
    let config = load_config(Some("tests/fixtures/config_with_context.toml")).unwrap();
    env::set_var("CI_COMMITS_SINCE_TAG", "-1");

    let result = BuildContext::from_env(&config.context);
    clear_vars();

    assert!(matches!(result, Err(ReleaseError::MalformedContext(_))));
}
