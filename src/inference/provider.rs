use std::fmt;

use async_trait::async_trait;

use super::types::GenerationRequest;

/// Errors that can occur while loading or invoking a generator.
/// None of them are retried; the user resubmits.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response, or it carried no candidates.
    Parse(String),
    /// The requested model is not available on the server.
    Unavailable(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
            ProviderError::Unavailable(model) => write!(f, "model unavailable: {model}"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the name of the generator.
    fn name(&self) -> &str;

    /// Prepares whatever heavyweight resource backs the generator.
    async fn load(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    /// Runs one generation and returns the first candidate's text.
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError>;
}
