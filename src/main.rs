use anyhow::{anyhow, Context, Result};
use language_translator::{
    config::Config,
    form::TranslatorForm,
    gui,
    translation::{GoogleTranslateClient, TranslationClient},
};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_translator=info".parse()?),
        )
        .init();

    info!("Starting language translator");

    // Load configuration from environment
    let config = Config::from_env()?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    // Without a working client there is nothing to show
    let client: Arc<dyn TranslationClient> = Arc::new(
        GoogleTranslateClient::new(&config).context("Translation client is unavailable")?,
    );

    let form = runtime.block_on(TranslatorForm::initialize(client));

    gui::run(&config, form, runtime.handle().clone())
        .map_err(|e| anyhow!("Translator window failed: {}", e))?;

    info!("Window closed, shutting down");
    Ok(())
}
