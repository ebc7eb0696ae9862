//! Error normalization for remote operations.
//!
//! # Design
//! - Every failure collapses to one displayable string per operation.
//! - Aborted requests are distinguishable so callers can settle silently.
//! - Unauthorized responses are distinguishable so the shell can end the session.

use rahla_api_models::Envelope;

/// Fallback copy used when neither the server nor the transport said anything useful.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// HTTP/envelope code that ends the session.
pub const UNAUTHORIZED_CODE: i64 = 401;

/// Failure surfaced by the API client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {0}")]
    Transport(String),
    /// The request was cancelled by the caller.
    #[error("request aborted")]
    Aborted,
    /// The server answered with a non-success envelope.
    #[error("server error {code}")]
    Server {
        /// Envelope or HTTP status code.
        code: i64,
        /// Localized message when the server supplied one.
        message: Option<String>,
    },
    /// The session is missing, expired, or rejected by the server.
    #[error("session expired")]
    Unauthorized,
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success envelope.
    #[must_use]
    pub fn from_envelope<T>(envelope: &Envelope<T>) -> Self {
        Self::from_status(envelope.code, envelope.message.preferred())
    }

    /// Classify a status code plus optional server message.
    #[must_use]
    pub fn from_status(code: i64, message: Option<&str>) -> Self {
        if code == UNAUTHORIZED_CODE {
            return Self::Unauthorized;
        }
        Self::Server {
            code,
            message: message
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(ToString::to_string),
        }
    }

    /// Message shown to the user: server text, then transport text, then a generic fallback.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Transport(detail) | Self::Decode(detail) if !detail.trim().is_empty() => {
                detail.trim().to_string()
            }
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    /// Whether the request was cancelled rather than failed.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// Whether the failure should end the current session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rahla_api_models::ApiMessage;

    #[test]
    fn server_message_wins() {
        let envelope: Envelope<()> = Envelope {
            code: 422,
            data: None,
            message: ApiMessage {
                arabic: "الاسم مطلوب".to_string(),
                english: "Name is required".to_string(),
            },
            total_items: None,
            total_pages: None,
        };
        let err = ApiError::from_envelope(&envelope);
        assert_eq!(err.display_message(), "Name is required");
    }

    #[test]
    fn empty_server_message_falls_back_to_generic() {
        let err = ApiError::from_status(500, Some("   "));
        assert_eq!(
            err,
            ApiError::Server {
                code: 500,
                message: None
            }
        );
        assert_eq!(err.display_message(), GENERIC_FAILURE);
    }

    #[test]
    fn transport_text_is_used_when_present() {
        assert_eq!(
            ApiError::Transport("Failed to fetch".to_string()).display_message(),
            "Failed to fetch"
        );
        assert_eq!(
            ApiError::Transport(String::new()).display_message(),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn unauthorized_is_classified() {
        let err = ApiError::from_status(UNAUTHORIZED_CODE, Some("jwt expired"));
        assert!(err.is_unauthorized());
        assert!(!err.is_aborted());
        assert!(ApiError::Aborted.is_aborted());
        assert!(!err.display_message().is_empty());
    }
}
