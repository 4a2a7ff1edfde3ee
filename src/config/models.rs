use serde::{Deserialize, Serialize};

use super::defaults::*;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Configuration {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogConfig {
    #[serde(default = "log_level")]
    pub level: Option<String>,

    #[serde(default)]
    pub file: LogFile,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogFile {
    #[serde(default = "log_file_path")]
    pub path: String,

    #[serde(default)]
    pub append: bool,
}

/// Where task list resources are fetched from. The panel only ever requests
/// relative paths; this base supplies the origin.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "base_url")]
    pub base_url: String,

    #[serde(default = "fetch_timeout_secs")]
    pub timeout_secs: Option<usize>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UiConfig {
    #[serde(default = "max_input_rows")]
    pub max_input_rows: u16,

    #[serde(default = "compact_width")]
    pub compact_width: u16,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: log_level(),
            file: LogFile::default(),
        }
    }
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            path: log_file_path(),
            append: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: base_url(),
            timeout_secs: fetch_timeout_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_input_rows: max_input_rows(),
            compact_width: compact_width(),
        }
    }
}
