mod completions;
pub mod lmstudio;
pub mod openrouter;

pub use lmstudio::{DEFAULT_LMSTUDIO_BASE_URL, LmStudioProvider};
pub use openrouter::{DEFAULT_OPENROUTER_BASE_URL, OpenRouterProvider};
