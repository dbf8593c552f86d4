//! Thin JSON-over-HTTP client shared by providers.
//!
//! Every call is a single attempt. Failures are returned to the caller as-is.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::LlmError;

/// Callback that observes raw JSON traffic.
pub type Inspector = Arc<dyn Fn(&serde_json::Value) + Send + Sync>;

/// Optional hooks for looking at request and response bodies.
#[derive(Clone, Default)]
pub struct InspectorConfig {
    pub request_inspector: Option<Inspector>,
    pub response_inspector: Option<Inspector>,
}

impl InspectorConfig {
    pub fn with_request_inspector<F>(mut self, inspector: F) -> Self
    where
        F: Fn(&serde_json::Value) + Send + Sync + 'static,
    {
        self.request_inspector = Some(Arc::new(inspector));
        self
    }

    pub fn with_response_inspector<F>(mut self, inspector: F) -> Self
    where
        F: Fn(&serde_json::Value) + Send + Sync + 'static,
    {
        self.response_inspector = Some(Arc::new(inspector));
        self
    }
}

impl fmt::Debug for InspectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectorConfig")
            .field("request_inspector", &self.request_inspector.is_some())
            .field("response_inspector", &self.response_inspector.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Whole-request timeout. `None` waits as long as the server does.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

pub struct HttpClient {
    client: reqwest::Client,
    inspector_config: Option<InspectorConfig>,
}

impl HttpClient {
    pub fn new(
        config: HttpClientConfig,
        user_agent: Option<&str>,
        inspector_config: Option<InspectorConfig>,
    ) -> Result<Self, LlmError> {
        let default_ua = format!("promptkit/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let mut builder = reqwest::Client::builder().user_agent(ua);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
        })?;

        Ok(Self {
            client,
            inspector_config,
        })
    }

    /// POST `body` as JSON and deserialize the response.
    ///
    /// Non-2xx statuses become [`LlmError::Api`] carrying the raw error body.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let body_value = serde_json::to_value(body).map_err(|e| LlmError::Parse {
            message: "Failed to serialize request body".to_string(),
            source: Box::new(e),
        })?;

        self.inspect_request(&body_value);

        let mut req_builder = self.client.post(url).json(&body_value);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| LlmError::Network {
            message: "Request failed".to_string(),
            source: Box::new(e),
        })?;

        let status = res.status();
        let response_text = res.text().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        if !status.is_success() {
            warn!(status = %status, "API returned error status");

            let error_value = serde_json::from_str(&response_text).unwrap_or_else(|_| {
                serde_json::json!({
                    "error": response_text,
                    "status_code": status.as_u16()
                })
            });
            self.inspect_response(&error_value);

            return Err(LlmError::Api {
                message: format!("{status}: {response_text}"),
                status_code: Some(status.as_u16()),
            });
        }

        debug!(status = %status, "HTTP request successful");

        let response_value: serde_json::Value =
            serde_json::from_str(&response_text).map_err(|e| LlmError::Parse {
                message: "Failed to parse response as JSON".to_string(),
                source: Box::new(e),
            })?;

        self.inspect_response(&response_value);

        serde_json::from_value(response_value).map_err(|e| LlmError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Box::new(e),
        })
    }

    fn inspect_request(&self, value: &serde_json::Value) {
        if let Some(inspector) = self
            .inspector_config
            .as_ref()
            .and_then(|config| config.request_inspector.as_ref())
        {
            inspector(value);
        }
    }

    fn inspect_response(&self, value: &serde_json::Value) {
        if let Some(inspector) = self
            .inspector_config
            .as_ref()
            .and_then(|config| config.response_inspector.as_ref())
        {
            inspector(value);
        }
    }
}
