use thiserror::Error;

/// Unified error type for release resolution
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Malformed version tag: {0}")]
    MalformedVersionTag(String),

    #[error("Malformed build context: {0}")]
    MalformedContext(String),

    #[error("Version overflow: {0}")]
    VersionOverflow(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version tag error with context
    pub fn version_tag(msg: impl Into<String>) -> Self {
        ReleaseError::MalformedVersionTag(msg.into())
    }

    /// Create a build context error with context
    pub fn context(msg: impl Into<String>) -> Self {
        ReleaseError::MalformedContext(msg.into())
    }

    /// Create an overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        ReleaseError::VersionOverflow(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::context("pull request id missing");
        assert_eq!(
            err.to_string(),
            "Malformed build context: pull request id missing"
        );
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::version_tag("x"), "Malformed version tag"),
            (ReleaseError::context("x"), "Malformed build context"),
            (ReleaseError::overflow("x"), "Version overflow"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            ReleaseError::version_tag(""),
            ReleaseError::context(""),
            ReleaseError::overflow(""),
        ];

        for err in errors {
            // The error type prefix is present even with an empty message
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with 'quotes'",
            "message with \\ backslash",
            "message with unicode: ñ",
        ];

        for msg in special_chars {
            let err = ReleaseError::version_tag(msg);
            assert!(err.to_string().contains(msg));
        }
    }
}
