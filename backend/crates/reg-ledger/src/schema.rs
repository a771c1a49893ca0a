//! Store header signatures.

/// Header of the current store layout
pub const CURRENT_HEADER: [&str; 5] = [
    "telegram_id",
    "full_name",
    "phone",
    "region",
    "registered_at",
];

/// Header of the layout used before identities were recorded
pub const LEGACY_HEADER: [&str; 4] = ["fullname", "phone", "region", "created_at"];

/// Layout of a store file, decided by exact header match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    /// File exists with neither header nor rows
    Empty,
    Current,
    Legacy,
    Unknown,
}

impl StoreFormat {
    pub fn detect<S: AsRef<str>>(header: &[S]) -> Self {
        let header: Vec<&str> = header.iter().map(|h| h.as_ref()).collect();

        if header.is_empty() || header.iter().all(|h| h.is_empty()) {
            Self::Empty
        } else if header == CURRENT_HEADER {
            Self::Current
        } else if header == LEGACY_HEADER {
            Self::Legacy
        } else {
            Self::Unknown
        }
    }

    pub fn is_writable(&self) -> bool {
        matches!(self, Self::Current | Self::Empty)
    }
}
