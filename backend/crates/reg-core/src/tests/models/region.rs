use crate::{REGIONS, Region};

use std::str::FromStr;

#[test]
fn test_region_from_str_round_trips_every_label() {
    for region in REGIONS {
        assert_eq!(Region::from_str(region.as_str()).unwrap(), region);
    }
}

#[test]
fn test_region_from_str_rejects_free_text() {
    assert!(Region::from_str("Moskva").is_err());
    assert!(Region::from_str("samarqand").is_err());
    assert!(Region::from_str("").is_err());
}

#[test]
fn test_region_labels_keep_typographic_apostrophe() {
    assert_eq!(Region::Fargona.as_str(), "Farg‘ona");
    assert_eq!(
        Region::Qoraqalpogiston.to_string(),
        "Qoraqalpog‘iston Respublikasi"
    );
}
