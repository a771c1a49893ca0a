use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORE_DIR, DEFAULT_STORE_FILE_NAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Data directory, relative to the config dir
    pub dir: String,
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORE_DIR),
            file_name: String::from(DEFAULT_STORE_FILE_NAME),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::store(
                "store.dir must be relative and cannot contain '..'",
            ));
        }

        let file_name = self.file_name.trim();
        if file_name.is_empty() || file_name.contains('/') || file_name.contains('\\') {
            return Err(ConfigError::store(format!(
                "store.file_name must be a plain file name, got '{}'",
                self.file_name
            )));
        }

        Ok(())
    }
}
