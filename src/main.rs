use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use study_copilot::Provider;
use study_copilot::core::config::{self, CopilotConfig};
use study_copilot::core::store::{JsonFileStore, KeyValueStore, MemoryStore};
use study_copilot::inference::Engine;
use study_copilot::tui;

#[derive(Parser)]
#[command(name = "study-copilot", about = "Summarize and explain study notes with a local LLM")]
struct Args {
    /// Text generation provider (overrides config and STUDY_COPILOT_PROVIDER)
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Model name passed to the provider
    #[arg(short, long)]
    model: Option<String>,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Keep saved notes in memory only
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to study-copilot.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("study-copilot.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Falling back to default config: {}", e);
        CopilotConfig::default()
    });
    let mut resolved = config::resolve(
        &file_config,
        args.provider.map(|p| p.as_str()),
        args.model.as_deref(),
    );
    if args.light {
        resolved.dark_mode = false;
    }

    info!(
        "Study Copilot starting up with provider: {}, model: {}",
        resolved.provider, resolved.model_name
    );

    let store: Arc<dyn KeyValueStore> = if args.ephemeral {
        info!("Ephemeral run: saved notes stay in memory");
        Arc::new(MemoryStore::new())
    } else {
        info!("Saved notes at {}", resolved.storage_path.display());
        Arc::new(JsonFileStore::new(resolved.storage_path.clone()))
    };
    let engine = Arc::new(Engine::from_config(&resolved));

    tui::run(&resolved, engine, store)
}
