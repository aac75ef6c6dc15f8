//! OpenRouter provider using the OpenAI-compatible completions API.
//!
//! Hosted fallback for machines without a local inference server. The
//! "model" is already loaded remotely, so `load()` only checks that an
//! API key is configured.

use async_trait::async_trait;
use log::{info, warn};

use super::completions::send_completion;
use crate::inference::{GenerationRequest, ProviderError, TextGenerator};

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// OpenRouter API provider
pub struct OpenRouterProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenRouterProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let final_url = base_url.unwrap_or_else(|| DEFAULT_OPENROUTER_BASE_URL.to_string());

        Self {
            api_key,
            base_url: final_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn load(&self) -> Result<(), ProviderError> {
        if self.api_key.trim().is_empty() {
            warn!("OpenRouter selected without an API key");
            return Err(ProviderError::Config(
                "OpenRouter API key must be set (config file or OPENROUTER_API_KEY)".to_string(),
            ));
        }
        Ok(())
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        info!(
            "OpenRouter completions request: model={}, prompt_len={}, max_tokens={}",
            request.model,
            request.prompt.len(),
            request.params.max_new_tokens
        );

        let builder = self
            .client
            .post(format!("{}/completions", self.base_url))
            .bearer_auth(&self.api_key);
        send_completion(builder, &request, self.name()).await
    }
}
