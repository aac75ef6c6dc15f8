//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.study-copilot/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::inference::providers::{DEFAULT_LMSTUDIO_BASE_URL, DEFAULT_OPENROUTER_BASE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CopilotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub lmstudio: LmStudioConfig,
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_provider: Option<String>,
    pub default_model: Option<String>,
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LmStudioConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OpenRouterConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON key-value file holding saved notes.
    pub path: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROVIDER: &str = "lmstudio";
pub const DEFAULT_MODEL: &str = "distilgpt2";
const CONFIG_DIR: &str = ".study-copilot";
const STORAGE_FILE: &str = "storage.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider: String,
    pub model_name: String,
    pub dark_mode: bool,
    pub lmstudio_base_url: String,
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: String,
    pub storage_path: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.study-copilot/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.study-copilot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.study-copilot/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CopilotConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CopilotConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CopilotConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. Same semantics as `load_config`.
pub fn load_config_from(path: &Path) -> Result<CopilotConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CopilotConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CopilotConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Study Copilot Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_provider = "lmstudio"      # "lmstudio" or "openrouter"
# default_model = "distilgpt2"
# dark_mode = true

# [lmstudio]
# base_url = "http://localhost:1234/v1"

# [openrouter]
# api_key = "sk-or-..."              # Or set OPENROUTER_API_KEY env var
# base_url = "https://openrouter.ai/api/v1"

# [storage]
# path = "/home/you/.study-copilot/storage.json"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_provider` and `cli_model` are from CLI flags (None = not specified).
pub fn resolve(
    config: &CopilotConfig,
    cli_provider: Option<&str>,
    cli_model: Option<&str>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_provider, cli_model, |key| std::env::var(key).ok())
}

/// Same as `resolve`, with the environment lookup injected.
pub fn resolve_with_env<E>(
    config: &CopilotConfig,
    cli_provider: Option<&str>,
    cli_model: Option<&str>,
    env: E,
) -> ResolvedConfig
where
    E: Fn(&str) -> Option<String>,
{
    // Provider: CLI → env → config → default
    let provider = cli_provider
        .map(|s| s.to_string())
        .or_else(|| env("STUDY_COPILOT_PROVIDER"))
        .or_else(|| config.general.default_provider.clone())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    // Model: CLI → env → config → default
    let model_name = cli_model
        .map(|s| s.to_string())
        .or_else(|| env("STUDY_COPILOT_MODEL"))
        .or_else(|| config.general.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let lmstudio_base_url = env("LM_STUDIO_BASE_URL")
        .or_else(|| config.lmstudio.base_url.clone())
        .unwrap_or_else(|| DEFAULT_LMSTUDIO_BASE_URL.to_string());

    let openrouter_api_key = env("OPENROUTER_API_KEY").or_else(|| config.openrouter.api_key.clone());

    let openrouter_base_url = env("OPENROUTER_BASE_URL")
        .or_else(|| config.openrouter.base_url.clone())
        .unwrap_or_else(|| DEFAULT_OPENROUTER_BASE_URL.to_string());

    // Storage: env → config → ~/.study-copilot/storage.json → ./storage.json
    let storage_path = env("STUDY_COPILOT_STORAGE")
        .map(PathBuf::from)
        .or_else(|| config.storage.path.clone())
        .or_else(|| config_dir().map(|d| d.join(STORAGE_FILE)))
        .unwrap_or_else(|| PathBuf::from(STORAGE_FILE));

    ResolvedConfig {
        provider,
        model_name,
        dark_mode: config.general.dark_mode.unwrap_or(true),
        lmstudio_base_url,
        openrouter_api_key,
        openrouter_base_url,
        storage_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = CopilotConfig::default();
        assert!(config.general.default_provider.is_none());
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = CopilotConfig::default();
        let resolved = resolve_with_env(&config, None, None, no_env);
        assert_eq!(resolved.provider, DEFAULT_PROVIDER);
        assert_eq!(resolved.model_name, DEFAULT_MODEL);
        assert!(resolved.dark_mode);
        assert_eq!(resolved.lmstudio_base_url, DEFAULT_LMSTUDIO_BASE_URL);
        assert_eq!(resolved.openrouter_base_url, DEFAULT_OPENROUTER_BASE_URL);
        assert!(resolved.openrouter_api_key.is_none());
        assert!(resolved.storage_path.ends_with(STORAGE_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CopilotConfig {
            general: GeneralConfig {
                default_provider: Some("openrouter".to_string()),
                default_model: Some("my-model".to_string()),
                dark_mode: Some(false),
            },
            storage: StorageConfig {
                path: Some(PathBuf::from("/tmp/notes.json")),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, None, no_env);
        assert_eq!(resolved.provider, "openrouter");
        assert_eq!(resolved.model_name, "my-model");
        assert!(!resolved.dark_mode);
        assert_eq!(resolved.storage_path, PathBuf::from("/tmp/notes.json"));
    }

    #[test]
    fn test_env_wins_over_config_and_cli_wins_over_env() {
        let config = CopilotConfig {
            general: GeneralConfig {
                default_provider: Some("lmstudio".to_string()),
                default_model: Some("file-model".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("STUDY_COPILOT_PROVIDER", "openrouter"),
            ("STUDY_COPILOT_MODEL", "env-model"),
            ("OPENROUTER_API_KEY", "sk-env"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, None, None, lookup);
        assert_eq!(resolved.provider, "openrouter");
        assert_eq!(resolved.model_name, "env-model");
        assert_eq!(resolved.openrouter_api_key.as_deref(), Some("sk-env"));

        let resolved = resolve_with_env(&config, Some("lmstudio"), Some("cli-model"), lookup);
        assert_eq!(resolved.provider, "lmstudio");
        assert_eq!(resolved.model_name, "cli-model");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_provider = "openrouter"
default_model = "gpt2"
dark_mode = false

[lmstudio]
base_url = "http://192.168.1.100:1234/v1"

[openrouter]
api_key = "sk-test-123"

[storage]
path = "/var/tmp/storage.json"
"#;
        let config: CopilotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_provider.as_deref(), Some("openrouter"));
        assert_eq!(config.general.dark_mode, Some(false));
        assert_eq!(
            config.lmstudio.base_url.as_deref(),
            Some("http://192.168.1.100:1234/v1")
        );
        assert_eq!(config.openrouter.api_key.as_deref(), Some("sk-test-123"));
        assert_eq!(
            config.storage.path.as_deref(),
            Some(Path::new("/var/tmp/storage.json"))
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[general]
default_model = "my-model"
"#;
        let config: CopilotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_model.as_deref(), Some("my-model"));
        assert!(config.general.default_provider.is_none());
        assert!(config.openrouter.api_key.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_model.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Study Copilot Configuration"));
        // Everything is commented out, so it parses back to defaults
        let reparsed: CopilotConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.general.default_provider.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nbroken").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
