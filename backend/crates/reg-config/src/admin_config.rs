use serde::Deserialize;

/// Identities allowed to list and export registrations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub ids: Vec<String>,
}

impl AdminConfig {
    /// Parse a comma-separated id list. Entries that are not all digits are skipped.
    pub fn parse_ids(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()))
            .map(String::from)
            .collect()
    }

    pub fn is_admin(&self, identity: &str) -> bool {
        let identity = identity.trim();
        !identity.is_empty() && self.ids.iter().any(|id| id.trim() == identity)
    }
}
