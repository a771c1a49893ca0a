use reg_core::{Registration, Result as CoreErrorResult, normalize_phone};

use csv::StringRecord;

/// One data row of the store, kept as written.
///
/// Rows stay raw so blank or unreadable lines survive a rewrite and still
/// take part in duplicate scans. Use [`StoredRow::to_registration`] for the
/// typed view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredRow {
    pub identity: String,
    pub full_name: String,
    pub phone: String,
    pub region: String,
    pub registered_at: String,
}

/// Column name candidates, looked up by header name so unknown layouts can
/// still be read on a best-effort basis.
const IDENTITY_COLUMNS: &[&str] = &["telegram_id"];
const FULL_NAME_COLUMNS: &[&str] = &["full_name", "fullname"];
const PHONE_COLUMNS: &[&str] = &["phone"];
const REGION_COLUMNS: &[&str] = &["region"];
const REGISTERED_AT_COLUMNS: &[&str] = &["registered_at", "created_at"];

impl StoredRow {
    pub fn from_record(header: &[String], record: &StringRecord) -> Self {
        let column = |names: &[&str]| -> String {
            header
                .iter()
                .position(|h| names.contains(&h.as_str()))
                .and_then(|idx| record.get(idx))
                .unwrap_or_default()
                .to_string()
        };

        Self {
            identity: column(IDENTITY_COLUMNS),
            full_name: column(FULL_NAME_COLUMNS),
            phone: column(PHONE_COLUMNS),
            region: column(REGION_COLUMNS),
            registered_at: column(REGISTERED_AT_COLUMNS),
        }
    }

    /// Every field empty after trimming
    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|f| f.trim().is_empty())
    }

    pub fn identity_key(&self) -> &str {
        self.identity.trim()
    }

    pub fn phone_key(&self) -> String {
        normalize_phone(&self.phone)
    }

    /// Legacy row rewritten for the current layout: phone normalized, the
    /// rest trimmed, identity left empty.
    pub fn migrated(&self) -> Self {
        Self {
            identity: String::new(),
            full_name: self.full_name.trim().to_string(),
            phone: normalize_phone(&self.phone),
            region: self.region.trim().to_string(),
            registered_at: self.registered_at.trim().to_string(),
        }
    }

    pub fn to_registration(&self) -> CoreErrorResult<Registration> {
        let identity = self.identity_key();

        Ok(Registration {
            identity: (!identity.is_empty()).then(|| identity.to_string()),
            full_name: self.full_name.trim().to_string(),
            phone: self.phone_key(),
            region: self.region.trim().parse()?,
            registered_at: Registration::parse_registered_at(&self.registered_at)?,
        })
    }

    /// Fields in current header order
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.identity,
            &self.full_name,
            &self.phone,
            &self.region,
            &self.registered_at,
        ]
    }
}

impl From<&Registration> for StoredRow {
    fn from(registration: &Registration) -> Self {
        Self {
            identity: registration.identity_str().to_string(),
            full_name: registration.full_name.clone(),
            phone: registration.phone.clone(),
            region: registration.region.to_string(),
            registered_at: registration.registered_at_display(),
        }
    }
}
