use thiserror::Error;

/// Message shown to the user when the authentication service fails without explaining why
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// All possible error types that may occur while talking to the authentication service or acting
/// on its responses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvError {
    #[error("Authentication service rejected the request ({status})\n{}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("Could not reach the authentication service\n{0}")]
    Transport(String),
    #[error("Authentication service returned an unexpected body\n{0}")]
    UnexpectedBody(String),
    #[error("JSON error\n{0}")]
    Decode(String),
    #[error("Navigation to `{route}` failed\n{reason}")]
    Navigation { route: String, reason: String },
}

impl AvError {
    /// Text to surface to the user for this error. Only the authentication service's own message
    /// is ever shown, anything else collapses to [GENERIC_ERROR_MESSAGE].
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}

impl From<serde_json::Error> for AvError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Generic [Result][std::result::Result] type where the error is always [AvError]
pub type AvResult<T> = std::result::Result<T, AvError>;
