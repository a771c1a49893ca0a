//! Registration record - one participant signed up for the event.

use crate::{CoreError, Region, Result as CoreErrorResult, normalize_phone};

use std::panic::Location;

use chrono::{Local, NaiveDateTime, Timelike};
use error_location::ErrorLocation;

/// On-disk timestamp layout (local time, second precision)
pub const REGISTERED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A participant's registration.
///
/// `identity` is `None` for records carried over from the legacy layout until
/// an administrator binds one by phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub identity: Option<String>,
    pub full_name: String,
    /// Digits only
    pub phone: String,
    pub region: Region,
    pub registered_at: NaiveDateTime,
}

impl Registration {
    /// Create a new registration stamped with the current local time.
    ///
    /// Fails when the name is blank or the phone has no digits.
    #[track_caller]
    pub fn new(
        identity: &str,
        full_name: &str,
        phone: &str,
        region: Region,
    ) -> CoreErrorResult<Self> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(CoreError::Validation {
                message: "full_name must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let phone = normalize_phone(phone);
        if phone.is_empty() {
            return Err(CoreError::Validation {
                message: "phone must contain digits".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let identity = identity.trim();
        let now = Local::now().naive_local();
        // Second precision so the value survives a store round trip
        let registered_at = now.with_nanosecond(0).unwrap_or(now);

        Ok(Self {
            identity: (!identity.is_empty()).then(|| identity.to_string()),
            full_name: full_name.to_string(),
            phone,
            region,
            registered_at,
        })
    }

    /// Parse a stored timestamp. Accepts the store layout and RFC 3339.
    #[track_caller]
    pub fn parse_registered_at(value: &str) -> CoreErrorResult<NaiveDateTime> {
        let value = value.trim();
        NaiveDateTime::parse_from_str(value, REGISTERED_AT_FORMAT)
            .or_else(|_| {
                chrono::DateTime::parse_from_rfc3339(value).map(|dt| dt.naive_local())
            })
            .map_err(|_| CoreError::InvalidTimestamp {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
        timestamp.format(REGISTERED_AT_FORMAT).to_string()
    }

    /// Timestamp in the store layout
    pub fn registered_at_display(&self) -> String {
        Self::format_timestamp(&self.registered_at)
    }

    /// Identity as stored (empty when unbound)
    pub fn identity_str(&self) -> &str {
        self.identity.as_deref().unwrap_or("")
    }

    /// Check whether the record belongs to `identity` (trimmed compare)
    pub fn belongs_to(&self, identity: &str) -> bool {
        let identity = identity.trim();
        !identity.is_empty() && self.identity_str() == identity
    }
}
