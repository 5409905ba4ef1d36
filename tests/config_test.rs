// tests/config_test.rs
use git_release_notes::config::{load_config, Config};
use git_release_notes::CommitCategory;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.context.default_branch, "main");
    assert_eq!(config.context.vars.branch, "BRANCH_NAME");
    assert_eq!(config.notes.title, "Release {version}");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[context]
default_branch = "master"

[notes]
empty_notice = "Nothing new."
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.context.default_branch, "master");
    assert_eq!(config.notes.empty_notice, "Nothing new.");
    // Untouched keys keep their defaults
    assert_eq!(config.notes.title, "Release {version}");
    assert_eq!(config.context.vars.revision, "SHORT_REVISION");
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/config_with_context.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.context.default_branch, "trunk");
    assert_eq!(config.context.vars.pull_request_id, "CI_PR_NUMBER");
    assert_eq!(config.context.vars.release, "RELEASE_REQUESTED");
    assert_eq!(config.notes.section_title(CommitCategory::Feature), "Added");
    assert_eq!(
        config.notes.section_title(CommitCategory::Breaking),
        "Breaking Changes"
    );
}

#[test]
fn test_load_missing_file_fails() {
    let err = load_config(Some("tests/fixtures/does_not_exist.toml")).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.toml"));
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[context\ndefault_branch = ").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}
