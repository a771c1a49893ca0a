use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Regions a participant can register from, in keyboard order.
pub const REGIONS: [Region; 14] = [
    Region::ToshkentViloyati,
    Region::ToshkentShahri,
    Region::Samarqand,
    Region::Andijon,
    Region::Fargona,
    Region::Namangan,
    Region::Buxoro,
    Region::Xorazm,
    Region::Qashqadaryo,
    Region::Surxondaryo,
    Region::Jizzax,
    Region::Sirdaryo,
    Region::Navoiy,
    Region::Qoraqalpogiston,
];

/// The fixed set of regions. Stored and displayed by exact label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ToshkentViloyati,
    ToshkentShahri,
    Samarqand,
    Andijon,
    Fargona,
    Namangan,
    Buxoro,
    Xorazm,
    Qashqadaryo,
    Surxondaryo,
    Jizzax,
    Sirdaryo,
    Navoiy,
    Qoraqalpogiston,
}

impl Region {
    /// Label shown on the keyboard and written to the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToshkentViloyati => "Toshkent viloyati",
            Self::ToshkentShahri => "Toshkent shahri",
            Self::Samarqand => "Samarqand",
            Self::Andijon => "Andijon",
            Self::Fargona => "Farg‘ona",
            Self::Namangan => "Namangan",
            Self::Buxoro => "Buxoro",
            Self::Xorazm => "Xorazm",
            Self::Qashqadaryo => "Qashqadaryo",
            Self::Surxondaryo => "Surxondaryo",
            Self::Jizzax => "Jizzax",
            Self::Sirdaryo => "Sirdaryo",
            Self::Navoiy => "Navoiy",
            Self::Qoraqalpogiston => "Qoraqalpog‘iston Respublikasi",
        }
    }
}

impl FromStr for Region {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        REGIONS
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| CoreError::InvalidRegion {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
