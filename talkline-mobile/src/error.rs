//! Mobile-friendly error types.

use talkline_core::TalklineError;

/// Mobile-friendly error type.
///
/// Only push submission, push ingestion and malformed payloads ever fail;
/// every other plugin method acknowledges success even when messaging is
/// unconfigured.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PluginError {
    #[error("{0}")]
    InvalidPush(String),

    #[error("Failed to handle received push: {0}")]
    PushFailed(String),

    #[error("Failed to send push token: {0}")]
    PushTokenFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TalklineError> for PluginError {
    fn from(err: TalklineError) -> Self {
        match err {
            TalklineError::PushPayload(message) => PluginError::InvalidPush(message),
            TalklineError::PushToken(cause) => PluginError::PushTokenFailed(cause),
            TalklineError::PushHandling(cause) => PluginError::PushFailed(cause),
            TalklineError::Serialization(cause) => PluginError::SerializationError(cause),
            TalklineError::Configuration(message) => PluginError::InvalidInput(message),
            TalklineError::InvalidArgument(message) => PluginError::InvalidInput(message),
            other => PluginError::Internal(other.to_string()),
        }
    }
}
