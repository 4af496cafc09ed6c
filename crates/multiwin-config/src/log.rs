use serde::{Deserialize, Serialize};

use crate::{env_flag, env_or};

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of the compact text format
    pub json: bool,
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            level: env_or("MULTIWIN_LOG", default_level()),
            json: env_flag("MULTIWIN_LOG_JSON", false),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}
