use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Config section an invalid setting belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    General,
    Store,
    Dialogue,
    Logging,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::General => "config",
            Self::Store => "store",
            Self::Dialogue => "dialogue",
            Self::Logging => "logging",
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {section} setting: {message} {location}")]
    Invalid {
        section: Section,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn invalid(section: Section, message: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::invalid(Section::General, message)
    }

    #[track_caller]
    pub fn store(message: impl Into<String>) -> Self {
        Self::invalid(Section::Store, message)
    }

    #[track_caller]
    pub fn dialogue(message: impl Into<String>) -> Self {
        Self::invalid(Section::Dialogue, message)
    }

    #[track_caller]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::invalid(Section::Logging, message)
    }

    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Section of an invalid setting, `None` for file errors
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Invalid { section, .. } => Some(*section),
            Self::Io { .. } | Self::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
