//! LM Studio provider using the OpenAI-compatible completions API.
//!
//! LM Studio serves whatever model the user has downloaded on a local port.
//! There is no auth. Loading a model is the expensive step, so `load()`
//! only verifies that the configured model is listed by `/models`.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::completions::{ModelList, send_completion};
use crate::inference::{GenerationRequest, ProviderError, TextGenerator};

pub const DEFAULT_LMSTUDIO_BASE_URL: &str = "http://localhost:1234/v1";

/// LM Studio API provider (local inference server)
pub struct LmStudioProvider {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl LmStudioProvider {
    pub fn new(base_url: Option<String>, model: String) -> Self {
        let final_url = base_url.unwrap_or_else(|| DEFAULT_LMSTUDIO_BASE_URL.to_string());

        Self {
            base_url: final_url.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TextGenerator for LmStudioProvider {
    fn name(&self) -> &str {
        "lmstudio"
    }

    async fn load(&self) -> Result<(), ProviderError> {
        info!("Checking LM Studio for model '{}' at {}", self.model, self.base_url);

        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("LM Studio /models failed: {} - {}", status, message);
            return Err(ProviderError::Api { status, message });
        }

        let models: ModelList = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;
        debug!("LM Studio lists {} models", models.data.len());

        if models.data.iter().any(|m| m.id == self.model) {
            Ok(())
        } else {
            warn!("Model '{}' is not loaded in LM Studio", self.model);
            Err(ProviderError::Unavailable(self.model.clone()))
        }
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        info!(
            "LM Studio completions request: model={}, prompt_len={}, max_tokens={}",
            request.model,
            request.prompt.len(),
            request.params.max_new_tokens
        );

        let builder = self
            .client
            .post(format!("{}/completions", self.base_url));
        send_completion(builder, &request, self.name()).await
    }
}
