use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{CompletionOptions, Message},
};

/// A backend that turns a conversation into the text of its first choice.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send `messages` verbatim and return the content of the first choice.
    async fn complete_conversation(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, LlmError>;

    /// Send `prompt` as a single user message.
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Result<String, LlmError> {
        let messages = [Message::user(prompt)];
        self.complete_conversation(&messages, options).await
    }
}
