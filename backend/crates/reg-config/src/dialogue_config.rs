use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EXPORT_FILE_NAME, DEFAULT_LIST_LIMIT,
    DEFAULT_WELCOME_IMAGE, MAX_LIST_LIMIT, MIN_LIST_LIMIT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Number of registrations shown by the admin list
    pub list_limit: usize,
    /// File name attached to the admin export
    pub export_file_name: String,
    /// Image sent with the welcome text, relative to the working dir
    pub welcome_image: String,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
            export_file_name: String::from(DEFAULT_EXPORT_FILE_NAME),
            welcome_image: String::from(DEFAULT_WELCOME_IMAGE),
        }
    }
}

impl DialogueConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_LIST_LIMIT..=MAX_LIST_LIMIT).contains(&self.list_limit) {
            return Err(ConfigError::dialogue(format!(
                "dialogue.list_limit must be {}-{}, got {}",
                MIN_LIST_LIMIT, MAX_LIST_LIMIT, self.list_limit
            )));
        }

        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::dialogue(
                "dialogue.export_file_name must not be empty",
            ));
        }

        Ok(())
    }
}
