use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "newsbias",
    version,
    about = "Terminal client for the news bias classification service"
)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/newsbias/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the classification service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Article URL to pre-fill in the input field
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        if let Some(url) = &self.url {
            config.ui.default_url = url.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
