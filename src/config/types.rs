use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the classification service lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service (scheme + host + port, no trailing path).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds. Unset means the transport default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Article URL pre-filled in the input field.
    #[serde(default = "default_article_url")]
    pub default_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_article_url() -> String {
    "https://www.foxnews.com/live-news/anti-trump-no-kings-protests-october-18-2025".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            default_url: default_article_url(),
        }
    }
}
