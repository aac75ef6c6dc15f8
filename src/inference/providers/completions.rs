//! Wire types for the OpenAI-compatible legacy completions endpoint.
//!
//! Both LM Studio and OpenRouter accept `POST /completions` with a raw
//! prompt, which is the closest match to a plain text-generation pipeline:
//! no roles, no chat template, just "continue this text".

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::inference::{GenerationRequest, ProviderError};

/// The request body for `/completions`.
#[derive(Serialize, Debug)]
pub(super) struct CompletionsRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

impl<'a> From<&GenerationRequest<'a>> for CompletionsRequest<'a> {
    fn from(request: &GenerationRequest<'a>) -> Self {
        Self {
            model: request.model,
            prompt: request.prompt,
            max_tokens: request.params.max_new_tokens,
            temperature: request.params.temperature(),
            stream: false,
        }
    }
}

#[derive(Deserialize, Debug)]
pub(super) struct CompletionsResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub(super) struct Choice {
    #[serde(default)]
    pub text: String,
}

/// `GET /models` listing, used to verify a model is loaded.
#[derive(Deserialize, Debug)]
pub(super) struct ModelList {
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

#[derive(Deserialize, Debug)]
pub(super) struct ModelInfo {
    pub id: String,
}

/// Picks the first candidate and applies `return_full_text`.
pub(super) fn first_generated_text(
    request: &GenerationRequest<'_>,
    response: CompletionsResponse,
) -> Result<String, ProviderError> {
    let Some(first) = response.choices.into_iter().next() else {
        return Err(ProviderError::Parse("response contained no choices".to_string()));
    };
    debug!("First candidate: {} bytes", first.text.len());

    if request.params.return_full_text {
        Ok(format!("{}{}", request.prompt, first.text))
    } else {
        Ok(first.text)
    }
}

/// Sends a prepared request and maps transport/status/body failures onto
/// `ProviderError`, the same way for every completions-style provider.
pub(super) async fn send_completion(
    builder: reqwest::RequestBuilder,
    request: &GenerationRequest<'_>,
    provider: &str,
) -> Result<String, ProviderError> {
    let response = builder
        .json(&CompletionsRequest::from(request))
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    debug!("{} response status: {}", provider, response.status());

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let err_body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        warn!("{} API error: {} - {}", provider, status, err_body);
        return Err(ProviderError::Api {
            status,
            message: err_body,
        });
    }

    let body: CompletionsResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::Parse(e.to_string()))?;

    first_generated_text(request, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::GenerationParams;

    fn response_with(texts: &[&str]) -> CompletionsResponse {
        CompletionsResponse {
            choices: texts
                .iter()
                .map(|t| Choice {
                    text: t.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_request_body_carries_fixed_params() {
        let request = GenerationRequest::new("Explain entropy", "distilgpt2");
        let body = serde_json::to_value(CompletionsRequest::from(&request)).unwrap();
        assert_eq!(body["model"], "distilgpt2");
        assert_eq!(body["prompt"], "Explain entropy");
        assert_eq!(body["max_tokens"], 50);
        assert_eq!(body["temperature"], 1.0);
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn test_full_text_prefixes_prompt() {
        let request = GenerationRequest::new("Entropy is", "m");
        let text = first_generated_text(&request, response_with(&[" disorder."])).unwrap();
        assert_eq!(text, "Entropy is disorder.");
    }

    #[test]
    fn test_continuation_only_when_full_text_disabled() {
        let request = GenerationRequest {
            prompt: "Entropy is",
            model: "m",
            params: GenerationParams {
                return_full_text: false,
                ..Default::default()
            },
        };
        let text = first_generated_text(&request, response_with(&[" a", " b"])).unwrap();
        assert_eq!(text, " a");
    }

    #[test]
    fn test_empty_choices_is_parse_error() {
        let request = GenerationRequest::new("Entropy is", "m");
        let err = first_generated_text(&request, response_with(&[])).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
