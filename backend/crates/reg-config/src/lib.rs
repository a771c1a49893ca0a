mod admin_config;
mod config;
mod dialogue_config;
mod error;
mod log_level;
mod logging_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use admin_config::AdminConfig;
pub use config::Config;
pub use dialogue_config::DialogueConfig;
pub use error::{ConfigError, ConfigErrorResult, Section};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

const CONFIG_DIR_ENV: &str = "REG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".reg";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_STORE_DIR: &str = "data";
const DEFAULT_STORE_FILE_NAME: &str = "registrations.csv";

const DEFAULT_LIST_LIMIT: usize = 20;
const MIN_LIST_LIMIT: usize = 1;
const MAX_LIST_LIMIT: usize = 100;
const DEFAULT_EXPORT_FILE_NAME: &str = "registrations.csv";
const DEFAULT_WELCOME_IMAGE: &str = "assets/welcome.png";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
