pub(crate) mod constants;
pub(crate) mod openai;

pub use openai::{OpenAiClient, OpenAiConfig};

use crate::core::LlmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenAI => write!(f, "OpenAI"),
        }
    }
}

impl Provider {
    /// Get the default environment variable name for this provider's API key
    pub fn default_api_key_env_var(&self) -> &'static str {
        match self {
            Provider::OpenAI => constants::openai::API_KEY_ENV_VAR,
        }
    }
}

/// Where the API credential comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read the provider's default environment variable.
    Default,
    Custom(String),
}

impl ApiKey {
    pub fn resolve(&self, provider: Provider) -> Result<String, LlmError> {
        self.resolve_with(provider, |name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_with<F>(&self, provider: Provider, lookup: F) -> Result<String, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            ApiKey::Custom(key) => Ok(key.clone()),
            ApiKey::Default => {
                let var = provider.default_api_key_env_var();
                lookup(var)
                    .filter(|key| !key.is_empty())
                    .ok_or_else(|| LlmError::ProviderConfiguration(format!("{var} not set.")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_key_ignores_environment() {
        let key = ApiKey::Custom("sk-custom".to_string())
            .resolve_with(Provider::OpenAI, |_| Some("sk-env".to_string()))
            .unwrap();

        assert_eq!(key, "sk-custom");
    }

    #[test]
    fn test_default_key_reads_provider_variable() {
        let key = ApiKey::Default
            .resolve_with(Provider::OpenAI, |name| {
                (name == "OPENAI_API_KEY").then(|| "sk-env".to_string())
            })
            .unwrap();

        assert_eq!(key, "sk-env");
    }

    #[test]
    fn test_missing_or_empty_key_is_configuration_error() {
        for value in [None, Some(String::new())] {
            let result = ApiKey::Default.resolve_with(Provider::OpenAI, |_| value.clone());

            match result {
                Err(LlmError::ProviderConfiguration(message)) => {
                    assert_eq!(message, "OPENAI_API_KEY not set.")
                }
                other => panic!("Expected ProviderConfiguration error, got {:?}", other),
            }
        }
    }
}
