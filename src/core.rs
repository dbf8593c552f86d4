pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig, Inspector, InspectorConfig};
pub use traits::ChatProvider;
pub use types::{ChatRole, CompletionOptions, DEFAULT_MODEL, DEFAULT_TEMPERATURE, Message};
