//! # Engine
//!
//! Lazily-initialized, memoized handle to the text generator.
//!
//! The first `generate()` builds the concrete provider and calls `load()`.
//! Subsequent calls reuse the cached instance. A failed initialization is
//! not cached, so the next request tries again from scratch.
//!
//! The engine is constructed once in `main` and handed to `App` as an
//! `Arc<dyn TextGenerator>`, so nothing in the session depends on global
//! state and tests can substitute any generator.

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use tokio::sync::OnceCell;

use crate::core::config::ResolvedConfig;
use crate::inference::{
    GenerationRequest, LmStudioProvider, OpenRouterProvider, ProviderError, TextGenerator,
};

type Factory = Box<dyn Fn() -> Result<Arc<dyn TextGenerator>, ProviderError> + Send + Sync>;

pub struct Engine {
    name: String,
    factory: Factory,
    instance: OnceCell<Arc<dyn TextGenerator>>,
}

impl Engine {
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn TextGenerator>, ProviderError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Box::new(factory),
            instance: OnceCell::new(),
        }
    }

    /// Builds an engine for the provider named in the resolved config.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let provider = config.provider.clone();
        let model = config.model_name.clone();
        let lmstudio_base_url = config.lmstudio_base_url.clone();
        let openrouter_api_key = config.openrouter_api_key.clone();
        let openrouter_base_url = config.openrouter_base_url.clone();

        Engine::new(provider.clone(), move || -> Result<Arc<dyn TextGenerator>, ProviderError> {
            match provider.as_str() {
                "lmstudio" => Ok(Arc::new(LmStudioProvider::new(
                    Some(lmstudio_base_url.clone()),
                    model.clone(),
                ))),
                "openrouter" => Ok(Arc::new(OpenRouterProvider::new(
                    openrouter_api_key.clone().unwrap_or_default(),
                    Some(openrouter_base_url.clone()),
                ))),
                other => Err(ProviderError::Config(format!("unknown provider '{other}'"))),
            }
        })
    }

    /// True once a generator has been built and loaded.
    pub fn is_loaded(&self) -> bool {
        self.instance.initialized()
    }

    async fn instance(&self) -> Result<&Arc<dyn TextGenerator>, ProviderError> {
        self.instance
            .get_or_try_init(|| async {
                info!("Initializing {} generator", self.name);
                let generator = (self.factory)()?;
                if let Err(e) = generator.load().await {
                    warn!("Failed to load {} generator: {}", self.name, e);
                    return Err(e);
                }
                info!("{} generator ready", self.name);
                Ok(generator)
            })
            .await
    }
}

#[async_trait]
impl TextGenerator for Engine {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<(), ProviderError> {
        self.instance().await.map(|_| ())
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        let generator = self.instance().await?;
        generator.generate(request).await
    }
}
