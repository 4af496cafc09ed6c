use anyhow::Context;
use clap::Parser;
use multiwin_config::Config;

mod cli;
mod logging;

use self::cli::Cli;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; only malformed ones are worth reporting
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);

    logging::init(&config.log).context("failed to initialize logging")?;

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!("failed to load .env: {e}");
        }
    }
    tracing::debug!(
        config = %serde_json::to_string(&config)?,
        "configuration loaded"
    );

    multiwin_ui::ui_loop(&config.ui).context("UI loop failed")?;

    tracing::info!("Shutdown complete");
    Ok(())
}
