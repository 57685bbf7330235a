//! Terminal menu demo entry point.

use anyhow::Result;
use menu_cli::{CliApp, CliConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _log_guard = logging::setup_logging()?;

    CliApp::load(config)?.run().await
}
