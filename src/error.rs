//! Unified error model for the client.
//!
//! Every failed call reports exactly one of these; `Unauthorized` is never
//! reported before the session has been cleared.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The structured `{code, message}` payload the service attaches to a
/// rejected call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiFailure {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl ApiFailure {
    /// Stand-in for responses whose body carries no parseable payload.
    pub fn generic(status: u16) -> Self {
        ApiFailure {
            code: i64::from(status),
            message: "request failed".to_string(),
        }
    }
}

impl Display for ApiFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Errors surfaced by the gateway and the typed API wrappers.
#[derive(Debug, Error)]
pub enum Error {
    /// The service no longer accepts our credential. By the time the
    /// caller sees this, the session has been logged out and the
    /// navigator has been sent to the unauthenticated entry point.
    #[error("unauthorized")]
    Unauthorized,

    /// The request never produced a usable response: connection failure,
    /// timeout, or an unreadable body.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status and this payload.
    #[error("service rejected the call: {0}")]
    Rejected(ApiFailure),

    /// A successful response whose payload did not match the declared type.
    #[error("unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The session record could not be persisted.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl Error {
    /// The line a user-facing surface should display for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Error::Rejected(failure) => failure.message.clone(),
            other => other.to_string(),
        }
    }
}

/// Failures of the durable session storage.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write session record: {0}")]
    Persist(#[from] std::io::Error),
    #[error("failed to encode session record: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_payload_from_wire() {
        let failure: ApiFailure =
            serde_json::from_str(r#"{"code": 500, "message": "boom"}"#).unwrap();
        assert_eq!(failure.code, 500);
        assert_eq!(failure.message, "boom");
    }

    /// Bodies without the expected fields still decode to a usable payload.
    #[test]
    fn test_failure_payload_tolerates_missing_fields() {
        let failure: ApiFailure = serde_json::from_str("{}").unwrap();
        assert_eq!(failure.code, 0);
        assert!(failure.message.is_empty());
    }

    #[test]
    fn test_user_message_prefers_service_payload() {
        let err = Error::Rejected(ApiFailure {
            code: 400,
            message: "name already taken".to_string(),
        });
        assert_eq!(err.user_message(), "name already taken");
        assert_eq!(Error::Unauthorized.user_message(), "unauthorized");
    }
}
