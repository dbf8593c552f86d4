//! OpenAI chat-completions provider.
//!
//! Works against any endpoint that speaks the same `/chat/completions` wire
//! format; point `base_url` elsewhere to use one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ChatProvider, CompletionOptions, HttpClient, HttpClientConfig, InspectorConfig, LlmError,
    Message,
};
use crate::provider::constants::openai;
use crate::provider::{ApiKey, Provider};

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    /// Sent as the `OpenAI-Organization` header when set.
    pub organization: Option<String>,
    pub http_config: HttpClientConfig,
    pub user_agent: Option<String>,
    pub inspector_config: Option<InspectorConfig>,
}

impl OpenAiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: openai::API_BASE.to_string(),
            organization: None,
            http_config: HttpClientConfig::default(),
            user_agent: None,
            inspector_config: None,
        }
    }

    /// Build a config from an explicit key or the provider's default variable.
    pub fn from_api_key(api_key: ApiKey) -> Result<Self, LlmError> {
        Ok(Self::new(api_key.resolve(Provider::OpenAI)?))
    }

    /// Build a config from `OPENAI_API_KEY`, plus `OPENAI_BASE_URL` and
    /// `OPENAI_ORGANIZATION` when present.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = ApiKey::Default.resolve_with(Provider::OpenAI, &lookup)?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(openai::BASE_URL_ENV_VAR).filter(|v| !v.is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(organization) = lookup(openai::ORGANIZATION_ENV_VAR).filter(|v| !v.is_empty())
        {
            config = config.with_organization(organization);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_organization(mut self, organization: String) -> Self {
        self.organization = Some(organization);
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    pub fn with_inspector_config(mut self, config: InspectorConfig) -> Self {
        self.inspector_config = Some(config);
        self
    }

    fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, openai::CHAT_COMPLETIONS_ENDPOINT)
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )];

        if let Some(organization) = &self.organization {
            headers.push((
                openai::ORGANIZATION_HEADER.to_string(),
                organization.clone(),
            ));
        }

        headers
    }
}

pub struct OpenAiClient {
    config: OpenAiConfig,
    http: HttpClient,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let http = HttpClient::new(
            config.http_config.clone(),
            config.user_agent.as_deref(),
            config.inspector_config.clone(),
        )?;

        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(OpenAiConfig::from_env()?)
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    #[tracing::instrument(
        name = "chat_completion",
        skip(self, messages, options),
        fields(provider = %Provider::OpenAI, model = %options.model, messages = messages.len()),
        err
    )]
    async fn send_chat(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        // serde_json writes NaN and infinities as `null`.
        if !options.temperature.is_finite() {
            return Err(LlmError::InvalidRequest(format!(
                "temperature must be finite, got {}",
                options.temperature
            )));
        }

        let request = ChatCompletionRequest {
            model: &options.model,
            messages,
            temperature: options.temperature,
        };

        let response: ChatCompletionResponse = self
            .http
            .post_json(&self.config.endpoint_url(), &self.config.headers(), &request)
            .await?;

        debug!(
            id = response.id.as_deref().unwrap_or_default(),
            model = response.model.as_deref().unwrap_or_default(),
            choices = response.choices.len(),
            "Received chat completion"
        );

        first_choice_content(response)
    }
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    async fn complete_conversation(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        self.send_chat(messages, options).await
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn first_choice_content(response: ChatCompletionResponse) -> Result<String, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyChoices)?;

    choice.message.content.ok_or(LlmError::MissingContent)
}
