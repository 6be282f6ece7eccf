use thiserror::Error;

/// Top-level error type for the Insight system.
///
/// Subsystem crates return this type directly so that the `?` operator works
/// across crate boundaries. The API layer maps it onto HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InsightError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for InsightError {
    fn from(err: toml::de::Error) -> Self {
        InsightError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Insight operations.
pub type Result<T> = std::result::Result<T, InsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let cases: Vec<(InsightError, &str)> = vec![
            (
                InsightError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                InsightError::Storage("lock poisoned".to_string()),
                "Storage error: lock poisoned",
            ),
            (
                InsightError::Api("failed to bind".to_string()),
                "API error: failed to bind",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: InsightError = io_err.into();
        assert!(matches!(err, InsightError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let err: std::result::Result<toml::Value, _> = toml::from_str("invalid = [[[");
        let insight_err: InsightError = err.unwrap_err().into();
        assert!(matches!(insight_err, InsightError::Config(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(format!("got {}", value))
        }

        assert_eq!(inner().unwrap(), "got 42");
    }
}
