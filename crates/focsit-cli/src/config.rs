use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_DIR: &str = ".focsit";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    /// Explicit API base URL, skips host based resolution
    pub base_url: Option<String>,
    /// URL of the page requests are made for
    pub page_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: Api,
}

impl Settings {
    #[must_use]
    pub fn new<P>(config_file_name: Option<P>) -> Self
    where
        P: Into<PathBuf>,
    {
        let default_settings = Self::default();
        // attempt to construct settings with file
        let from_file = Self::new_from_default(&default_settings, config_file_name);
        match from_file {
            Ok(f) => f,
            Err(e) => {
                tracing::error!(
                    "Error reading config file, falling back to defaults. Error: {e:?}"
                );
                default_settings
            }
        }
    }

    fn new_from_default<P>(
        default: &Settings,
        config_file_name: Option<P>,
    ) -> Result<Self, ConfigError>
    where
        P: Into<PathBuf>,
    {
        // An explicitly named file must exist, the default one is optional
        let (config, required) = match config_file_name {
            Some(value) => (value.into(), true),
            None => {
                let default_config_file_name = home::home_dir()
                    .ok_or(ConfigError::NotFound("Config Path".to_string()))?
                    .join(DEFAULT_WORK_DIR)
                    .join(CONFIG_FILE_NAME);
                (default_config_file_name, false)
            }
        };

        let config: Config = Config::builder()
            // use defaults
            .add_source(Config::try_from(default)?)
            // override with file contents
            .add_source(File::from(config).required(required))
            .build()?;

        config.try_deserialize()
    }
}
