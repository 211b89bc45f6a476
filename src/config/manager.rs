use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::config::{Config, ConfigError, Theme};
use crate::utils::fs::write_atomic;

const DEFAULT_DIR_NAME: &str = ".family_ledger";
const HOME_ENV: &str = "FAMILY_LEDGER_HOME";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Resolves `$FAMILY_LEDGER_HOME`, falling back to `~/.family_ledger`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match env::var_os(HOME_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_DIR_NAME),
        };
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            tracing::debug!(path = %self.config_path.display(), "loading config");
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.config_path, &json)?;
        tracing::debug!(path = %self.config_path.display(), "saved config");
        Ok(())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<Config, ConfigError> {
        let mut config = self.load()?;
        config.theme = theme;
        self.save(&config)?;
        tracing::info!(%theme, "theme updated");
        Ok(config)
    }

    pub fn toggle_theme(&self) -> Result<Config, ConfigError> {
        let current = self.load()?.theme;
        self.set_theme(current.toggled())
    }
}
