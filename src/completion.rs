//! One-call helpers backed by an [`OpenAiClient`] configured from the environment.
//!
//! Each call builds a fresh client, so connections are not pooled between
//! calls. When making many requests, build one [`OpenAiClient`] and reuse it.

use crate::core::{ChatProvider, CompletionOptions, LlmError, Message};
use crate::provider::OpenAiClient;

/// Complete a single user prompt.
///
/// Reads `OPENAI_API_KEY` (and optionally `OPENAI_BASE_URL`, `OPENAI_ORGANIZATION`).
pub async fn complete(prompt: &str, options: &CompletionOptions) -> Result<String, LlmError> {
    OpenAiClient::from_env()?.complete(prompt, options).await
}

/// Complete a conversation, sent as given.
pub async fn complete_conversation(
    messages: &[Message],
    options: &CompletionOptions,
) -> Result<String, LlmError> {
    OpenAiClient::from_env()?
        .complete_conversation(messages, options)
        .await
}
