//! Error types for API calls.

use thiserror::Error;

/// Errors that can occur while issuing an API call or reading its response.
///
/// Every error is terminal for the invocation: callers propagate these
/// unchanged, and only the command layer turns one into a user-facing
/// message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection-level failure: DNS, TCP or TLS.
    #[error("network error: {reason}")]
    Network {
        /// Description of the underlying transport failure.
        reason: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("api returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, preserved verbatim.
        body: String,
    },

    /// The response body is not well-formed JSON.
    #[error("malformed response: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },

    /// A required field is absent or has the wrong type.
    #[error("decode error at `{path}`: {reason}")]
    Decode {
        /// Field path that failed to decode.
        path: String,
        /// Why the field could not be decoded.
        reason: String,
    },
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_network() {
        let err = ApiError::Network {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn error_display_status_carries_body() {
        let err = ApiError::Status {
            status: 403,
            body: r#"{"error":"quota exceeded"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"api returned HTTP 403: {"error":"quota exceeded"}"#
        );
    }

    #[test]
    fn error_display_parse() {
        let err = ApiError::Parse {
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.to_string().starts_with("malformed response:"));
    }

    #[test]
    fn error_display_decode_names_the_path() {
        let err = ApiError::Decode {
            path: "hostname".to_string(),
            reason: "expected string, found number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "decode error at `hostname`: expected string, found number"
        );
    }
}
