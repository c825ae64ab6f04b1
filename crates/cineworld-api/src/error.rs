//! Error types for the Cineworld API client.

use thiserror::Error;

/// Errors returned by [`CineworldClient`](crate::quickbook::CineworldClient)
/// operations.
#[derive(Debug, Error)]
pub enum CineworldError {
    /// The API key is empty or was never set. Raised before any I/O.
    #[error("API key cannot be empty")]
    InvalidCredentials,

    /// A required argument is missing or empty. Carries the argument name.
    /// Raised before any I/O.
    #[error("missing required argument: {0}")]
    InvalidArgument(&'static str),

    /// Network failure or non-success HTTP status, propagated from the
    /// transport unmodified.
    #[error("transport failure")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON of the expected shape.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),

    /// The base URL or endpoint path could not be parsed.
    #[error("invalid request URL")]
    Url(#[from] url::ParseError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CineworldError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_invalid_argument_names_the_field() {
        // Arrange & Act
        let err = CineworldError::InvalidArgument("cinema_id");

        // Assert
        assert_eq!(err.to_string(), "missing required argument: cinema_id");
    }

    #[test]
    fn test_decode_error_wraps_serde_json() {
        // Arrange
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();

        // Act
        let err = CineworldError::from(json_err);

        // Assert
        assert!(matches!(err, CineworldError::Decode(_)));
    }
}
