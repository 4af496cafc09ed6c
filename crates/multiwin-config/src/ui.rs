use serde::{Deserialize, Serialize};

use crate::{env_flag, env_or};

fn default_quit_when_empty() -> bool {
    true
}

fn default_initial_title() -> String {
    "Initial window".to_string()
}

fn default_title_prefix() -> String {
    "Window".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Stop the event loop once the last window is gone
    #[serde(default = "default_quit_when_empty")]
    pub quit_when_empty: bool,
    /// Title of the window opened at startup
    #[serde(default = "default_initial_title")]
    pub initial_title: String,
    /// New windows are titled `"<prefix> <count>"`
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            quit_when_empty: env_flag("MULTIWIN_QUIT_WHEN_EMPTY", default_quit_when_empty()),
            initial_title: env_or("MULTIWIN_INITIAL_TITLE", default_initial_title()),
            title_prefix: env_or("MULTIWIN_TITLE_PREFIX", default_title_prefix()),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            quit_when_empty: default_quit_when_empty(),
            initial_title: default_initial_title(),
            title_prefix: default_title_prefix(),
        }
    }
}
