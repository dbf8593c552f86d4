use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by a chat-completion call.
///
/// Nothing here is retried or recovered. Every variant keeps the underlying
/// cause so callers can decide for themselves.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    /// The request could not be expressed on the wire.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    /// The API answered with a non-success status (auth failure, rate limit, ...).
    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },

    /// The response held an empty `choices` list.
    #[error("API response contained no choices")]
    EmptyChoices,

    /// The first choice carried no `message.content`.
    #[error("First choice has no message content")]
    MissingContent,
}

impl LlmError {
    /// HTTP status code returned by the API, if the failure came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
