//! # promptkit
//!
//! Send a prompt, or a whole conversation, to a chat-completion API and get
//! the text of the first choice back.
//!
//! Each call makes exactly one request. Nothing is retried or cached, and
//! every failure is handed back as an [`LlmError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promptkit::{CompletionOptions, Message, complete, complete_conversation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fact = complete("Share a fun fact about Rust.", &CompletionOptions::default()).await?;
//!
//!     let reply = complete_conversation(
//!         &[
//!             Message::system("You are a concise, upbeat assistant."),
//!             Message::user("Summarize this in five words: ".to_string() + &fact),
//!         ],
//!         &CompletionOptions::new().with_model("gpt-4o-mini").with_temperature(0.7),
//!     )
//!     .await?;
//!
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!
//! For a custom endpoint or credential, build an [`OpenAiClient`] from an
//! [`OpenAiConfig`] and call the [`ChatProvider`] methods on it:
//!
//! ```rust,no_run
//! use promptkit::{ApiKey, ChatProvider, CompletionOptions, OpenAiClient, OpenAiConfig};
//!
//! # async fn run() -> Result<(), promptkit::LlmError> {
//! let config = OpenAiConfig::from_api_key(ApiKey::Custom("sk-...".to_string()))?;
//! let client = OpenAiClient::new(config)?;
//! let text = client.complete("Hello!", &CompletionOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod completion;
pub mod core;
pub mod provider;

pub use completion::{complete, complete_conversation};
pub use crate::core::{
    ChatProvider, ChatRole, CompletionOptions, DEFAULT_MODEL, DEFAULT_TEMPERATURE, HttpClientConfig,
    Inspector, InspectorConfig, LlmError, Message,
};
pub use provider::{ApiKey, OpenAiClient, OpenAiConfig, Provider};
