use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use recipe_core::config::CatalogConfig;
use serde::Deserialize;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Layer `base.yaml`, `<environment>.yaml` and `RECIPE_*` variables.
///
/// Both files are optional so the binary also runs outside the crate directory.
pub fn read_config() -> Result<Settings> {
    let config_directory = match std::env::var("RECIPE_CONFIG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir()
            .context("Failed to determine the current directory")?
            .join("config"),
    };

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .context("Failed to parse APP_ENVIRONMENT")?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("RECIPE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize configuration")
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
