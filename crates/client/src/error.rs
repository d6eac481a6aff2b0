//! Error types for the Viewpoint client.

use thiserror::Error;

/// Errors that can occur when querying the reporting API.
///
/// Every failure originates at the remote API or the transport underneath
/// it; the facade propagates them unchanged, with no retry or translation.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection error (network failure, DNS resolution, etc.).
    #[error("connection error: {0}")]
    Connection(String),

    /// Non-2xx HTTP response without a parseable API error envelope.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// Error envelope returned by the reporting API.
    #[error("analytics API error [{code}]: {message}")]
    Api {
        /// Numeric error code from the envelope.
        code: u16,
        /// Error message from the envelope.
        message: String,
    },

    /// The API returned HTTP 429 (Too Many Requests).
    #[error("rate limited by the analytics API")]
    RateLimited,

    /// The response body or a result row did not have the expected shape.
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),
}

impl Error {
    /// Returns `true` if retrying the request could succeed.
    ///
    /// Connection errors, rate limiting, and server-side (5xx) failures are
    /// retryable; everything else indicates a caller-side problem.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) | Self::RateLimited => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Api { code, .. } => *code >= 500,
            Self::Deserialization(_) => false,
        }
    }

    /// Returns `true` if this is a connection error.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the API error code if the remote API returned an envelope.
    pub fn api_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_is_retryable() {
        let err = Error::Connection("timeout".to_string());
        assert!(err.is_retryable());
        assert!(err.is_connection_error());
    }

    #[test]
    fn rate_limited_is_retryable() {
        assert!(Error::RateLimited.is_retryable());
    }

    #[test]
    fn http_5xx_is_retryable() {
        let err = Error::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn http_4xx_is_not_retryable() {
        let err = Error::Http {
            status: 400,
            message: "Bad Request".to_string(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn api_error_exposes_code() {
        let err = Error::Api {
            code: 403,
            message: "User does not have sufficient permissions".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.api_code(), Some(403));
    }

    #[test]
    fn deserialization_error_not_retryable() {
        let err = Error::Deserialization("invalid JSON".to_string());
        assert!(!err.is_retryable());
        assert_eq!(err.api_code(), None);
    }
}
