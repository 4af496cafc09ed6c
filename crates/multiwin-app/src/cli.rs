use clap::Parser;
use multiwin_config::Config;

/// Open, title and close independent windows from a File menu
#[derive(Debug, Parser)]
#[command(name = "multiwin", version)]
pub struct Cli {
    /// Keep running after the last window is closed
    #[arg(long)]
    pub keep_alive: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "multiwin_core=trace")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Flags win over environment and defaults
    pub fn apply(&self, config: &mut Config) {
        if self.keep_alive {
            config.ui.quit_when_empty = false;
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if self.log_json {
            config.log.json = true;
        }
    }
}
