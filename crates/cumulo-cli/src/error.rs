//! CLI error types.

use cumulo_api::ApiError;
use thiserror::Error;

/// CLI-specific errors.
///
/// API errors pass through unchanged; the remaining variants cover the
/// command layer's own failure modes.
#[derive(Debug, Error)]
pub enum CliError {
    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_passes_through_unchanged() {
        let err = CliError::from(ApiError::Status {
            status: 403,
            body: r#"{"error":"quota exceeded"}"#.to_string(),
        });
        assert_eq!(
            err.to_string(),
            r#"api returned HTTP 403: {"error":"quota exceeded"}"#
        );
    }

    #[test]
    fn config_error_display() {
        let err = CliError::Config("no api token configured".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: no api token configured"
        );
    }

    #[test]
    fn invalid_argument_display() {
        let err = CliError::InvalidArgument("no instance matching `xyz`".to_string());
        assert_eq!(err.to_string(), "invalid argument: no instance matching `xyz`");
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CliError::from(io_err);
        assert!(matches!(err, CliError::Io(_)));
    }
}
