use crate::{
    AdminConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DialogueConfig, LogLevel, LoggingConfig, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub admin: AdminConfig,
    pub dialogue: DialogueConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Read `.env`, then `config.toml` from [`Config::config_dir`] (created
    /// when missing), then `REG_*` environment overrides. A missing file means
    /// defaults.
    ///
    /// Nothing is checked here; run [`Config::validate`] before use.
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = match config_path.try_exists() {
            Ok(true) => Self::load_toml(&config_path)?,
            Ok(false) => Self::default(),
            Err(e) => return Err(ConfigError::io(&config_path, e)),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `REG_CONFIG_DIR` when set, else `.reg` under the working directory.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Check every section, failing on the first bad setting.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.store.validate()?;
        self.dialogue.validate()?;

        if self.logging.file.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(ConfigError::logging("logging.file must not be empty"));
        }

        Ok(())
    }

    /// Absolute path to the registration store file.
    pub fn store_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.store.dir).join(&self.store.file_name))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Effective configuration:");
        info!("  store: {}/{}", self.store.dir, self.store.file_name);
        info!("  admin: {} id(s)", self.admin.ids.len());
        info!(
            "  dialogue: list_limit={}, export_file_name={}",
            self.dialogue.list_limit, self.dialogue.export_file_name
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        let text = Some::<String>;

        override_from_env("REG_STORE_DIR", &mut self.store.dir, text);
        override_from_env("REG_STORE_FILE_NAME", &mut self.store.file_name, text);

        // The bare ADMIN_IDS name is still honored; REG_ADMIN_IDS wins when both are set
        for var in ["ADMIN_IDS", "REG_ADMIN_IDS"] {
            override_from_env(var, &mut self.admin.ids, |raw| {
                Some(AdminConfig::parse_ids(&raw))
            });
        }

        override_from_env("REG_LIST_LIMIT", &mut self.dialogue.list_limit, |value| {
            value.trim().parse().ok()
        });
        override_from_env("REG_EXPORT_FILE_NAME", &mut self.dialogue.export_file_name, text);
        override_from_env("REG_WELCOME_IMAGE", &mut self.dialogue.welcome_image, text);

        override_from_env("REG_LOG_LEVEL", &mut self.logging.level, |value| {
            Some(LogLevel::parse(&value))
        });
        override_from_env("REG_LOG_COLORED", &mut self.logging.colored, |value| {
            Some(value == "true" || value == "1")
        });
        override_from_env("REG_LOG_FILE", &mut self.logging.file, |value| Some(Some(value)));
        override_from_env("REG_LOG_DIR", &mut self.logging.dir, text);
    }
}

/// Replace `target` when `var` is set and `convert` accepts its value.
fn override_from_env<T>(var: &str, target: &mut T, convert: impl FnOnce(String) -> Option<T>) {
    if let Some(value) = std::env::var(var).ok().and_then(convert) {
        *target = value;
    }
}
