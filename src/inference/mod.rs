pub mod engine;
pub mod provider;
pub mod providers;
pub mod types;

pub use engine::Engine;
pub use provider::{ProviderError, TextGenerator};
pub use providers::{LmStudioProvider, OpenRouterProvider};
pub use types::{GenerationParams, GenerationRequest, MAX_NEW_TOKENS};
