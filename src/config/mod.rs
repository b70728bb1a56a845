mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ServiceConfig, UiConfig, DEFAULT_BASE_URL};
