use reg_core::CoreError;

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Identity already registered: {identity} {location}")]
    DuplicateIdentity {
        identity: String,
        location: ErrorLocation,
    },

    #[error("Phone already registered: {phone} {location}")]
    DuplicatePhone {
        phone: String,
        location: ErrorLocation,
    },

    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store unavailable at {path}: {source} {location}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed store content: {source} {location}")]
    Csv {
        #[source]
        source: csv::Error,
        location: ErrorLocation,
    },

    #[error("Refusing to modify store with unrecognized header [{header}] {location}")]
    UnsupportedFormat {
        header: String,
        location: ErrorLocation,
    },
}

impl LedgerError {
    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::StoreUnavailable {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<csv::Error> for LedgerError {
    #[track_caller]
    fn from(source: csv::Error) -> Self {
        Self::Csv {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for LedgerError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::InvalidInput {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
