use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::ui::UiConfig;

pub mod log;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults overridden by `MULTIWIN_*` environment variables
    pub fn new() -> Self {
        Config {
            ui: UiConfig::new(),
            log: LogConfig::new(),
        }
    }
}

/// Reads `key` from the environment, keeping `default` when unset or unparsable
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok(), default)
}

/// Like [`env_or`] but also accepts `1`/`0`, `yes`/`no` and `on`/`off`
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    parse_flag_or(env::var(key).ok(), default)
}

pub(crate) fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

pub(crate) fn parse_flag_or(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
