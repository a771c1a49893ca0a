use crate::{Region, Registration};

use chrono::{NaiveDate, Timelike};
use googletest::prelude::*;

#[test]
fn given_valid_fields_when_new_then_fields_are_normalized() {
    // When
    let registration =
        Registration::new(" 42 ", " Ali Valiyev ", "+998 90 111-22-33", Region::Samarqand)
            .unwrap();

    // Then
    assert_that!(registration.identity.as_deref(), some(eq("42")));
    assert_that!(registration.full_name, eq("Ali Valiyev"));
    assert_that!(registration.phone, eq("998901112233"));
    assert_that!(registration.region, eq(Region::Samarqand));
    assert_that!(registration.registered_at.nanosecond(), eq(0));
}

#[test]
fn given_blank_identity_when_new_then_identity_is_none() {
    let registration =
        Registration::new("", "Ali Valiyev", "998901112233", Region::Andijon).unwrap();

    assert_that!(registration.identity.as_deref(), none());
    assert_that!(registration.identity_str(), eq(""));
    assert!(!registration.belongs_to(""));
}

#[test]
fn given_phone_without_digits_when_new_then_err() {
    let result = Registration::new("1", "Ali Valiyev", "+ -", Region::Andijon);

    assert_that!(result, err(anything()));
}

#[test]
fn given_blank_name_when_new_then_err() {
    let result = Registration::new("1", "   ", "998901112233", Region::Andijon);

    assert_that!(result, err(anything()));
}

#[test]
fn given_store_timestamp_when_parsed_then_round_trips() {
    let parsed = Registration::parse_registered_at("2024-01-01 10:00:00").unwrap();

    let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    assert_that!(parsed, eq(expected));
    assert_that!(
        Registration::format_timestamp(&parsed),
        eq("2024-01-01 10:00:00")
    );
}

#[test]
fn given_garbage_timestamp_when_parsed_then_err() {
    assert_that!(
        Registration::parse_registered_at("yesterday"),
        err(anything())
    );
}

#[test]
fn given_record_when_checking_owner_then_compares_trimmed_identity() {
    let registration =
        Registration::new("555", "Ali Valiyev", "998901112233", Region::Navoiy).unwrap();

    assert!(registration.belongs_to(" 555 "));
    assert!(!registration.belongs_to("556"));
}
