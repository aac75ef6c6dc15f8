//! Study Copilot library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod inference;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    #[default]
    LmStudio,
    OpenRouter,
}

impl Provider {
    /// Name used in config files and `STUDY_COPILOT_PROVIDER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::LmStudio => "lmstudio",
            Provider::OpenRouter => "openrouter",
        }
    }
}
