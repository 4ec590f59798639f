//! Classified failures of OpenAI-compatible API calls.
//!
//! Callers use [`ClientError::is_transient`] to tell a hiccup worth degrading over from a
//! failure that needs operator attention (bad key, exhausted quota, malformed request).

use async_openai::error::OpenAIError;
use thiserror::Error;

/// Error type (API type field) the service uses when the account has no credit left.
const INSUFFICIENT_QUOTA: &str = "insufficient_quota";

/// Failure of a single remote call.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or HTTP-level failure before a usable response arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with an error object.
    #[error("API error: {message}")]
    Api {
        message: String,
        kind: Option<String>,
    },

    /// The account ran out of quota.
    #[error("Quota exceeded: {0}")]
    Quota(String),

    /// The response could not be decoded or carried no usable payload.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request was rejected locally before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// True when retrying later might succeed without operator intervention.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Api { .. })
    }
}

impl From<OpenAIError> for ClientError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => ClientError::Transport(e.to_string()),
            OpenAIError::ApiError(api) => {
                if api.r#type.as_deref() == Some(INSUFFICIENT_QUOTA) {
                    ClientError::Quota(api.message)
                } else {
                    ClientError::Api {
                        message: api.message,
                        kind: api.r#type,
                    }
                }
            }
            OpenAIError::JSONDeserialize(e) => ClientError::MalformedResponse(e.to_string()),
            OpenAIError::InvalidArgument(msg) => ClientError::InvalidRequest(msg),
            other => ClientError::Transport(other.to_string()),
        }
    }
}
