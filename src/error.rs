use thiserror::Error;

/// Unified error type for gh-release operations
#[derive(Error, Debug)]
pub enum GhReleaseError {
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gh-release
pub type Result<T> = std::result::Result<T, GhReleaseError>;

impl GhReleaseError {
    /// Create an API error with context
    pub fn api(msg: impl Into<String>) -> Self {
        GhReleaseError::Api(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GhReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GhReleaseError::Version(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GhReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GhReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(GhReleaseError::version("test")
            .to_string()
            .contains("Version"));
        assert!(GhReleaseError::api("test").to_string().contains("API"));
    }

    #[test]
    fn test_error_all_variants() {
        let errors = vec![
            GhReleaseError::api("api issue"),
            GhReleaseError::config("config issue"),
            GhReleaseError::version("version issue"),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GhReleaseError::api("x"), "GitHub API error"),
            (GhReleaseError::config("x"), "Configuration error"),
            (GhReleaseError::version("x"), "Version parsing error"),
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
}
