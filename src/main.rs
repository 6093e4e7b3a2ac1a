use anyhow::{Context, Result};
use std::sync::Arc;
use trivialist::api::{HttpQuestionsApi, QuestionsApi};
use trivialist::config::Config;
use trivialist::logger::{init_logging, Logger};
use trivialist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        if path.exists() {
            eprintln!("❌ Config file already exists: {}", path.display());
            return Ok(());
        }
        return Config::generate_default_config(&path);
    }

    let config = Config::load().context("Failed to load configuration")?;

    let logger = Logger::new();
    if let Some(path) = init_logging(&logger, config.logging.enabled)? {
        logger.log(format!("Writing logs to {}", path.display()));
    }

    let api: Arc<dyn QuestionsApi> = Arc::new(
        HttpQuestionsApi::new(config.api.base_url.clone(), config.api.timeout())
            .context("Failed to create HTTP client")?,
    );

    ui::run_app(api, &config.ui, logger).await?;

    Ok(())
}
