use thiserror::Error;

/// Errors returned by purchase verification and subscription management.
#[derive(Debug, Error)]
pub enum IapError {
    /// The caller's input (payment, key object or deferral info) is malformed.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The service account token exchange failed.
    #[error("Google Play API authentication failed: {message} ({debug})")]
    Auth { message: String, debug: String },

    /// The request could not be sent, or the response could not be read.
    #[error("Error calling out to Google Play Developer API ({operation}): {debug}")]
    Transport { operation: String, debug: String },

    /// The API answered with a status code other than the expected one.
    #[error("Received {status} status code from {operation} with body: {body}")]
    UnexpectedStatus {
        operation: String,
        status: u16,
        body: String,
    },

    /// The response body was not the JSON we expected.
    #[error("Failed to parse {operation} response: {debug}")]
    Parse { operation: String, debug: String },
}

impl IapError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        IapError::Validation(message.into())
    }

    pub(crate) fn auth(message: &str, e: &impl std::fmt::Debug) -> Self {
        IapError::Auth {
            message: message.to_string(),
            debug: format!("{:?}", e),
        }
    }

    pub(crate) fn transport(operation: &str, e: &impl std::fmt::Debug) -> Self {
        IapError::Transport {
            operation: operation.to_string(),
            debug: format!("{:?}", e),
        }
    }

    pub(crate) fn parse(operation: &str, e: &impl std::fmt::Display) -> Self {
        IapError::Parse {
            operation: operation.to_string(),
            debug: e.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, IapError::Validation(_))
    }

    /// HTTP status code, if the error came from an unexpected API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            IapError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
