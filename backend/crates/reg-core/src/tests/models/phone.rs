use crate::normalize_phone;

use googletest::prelude::*;

#[test]
fn given_formatted_number_when_normalized_then_only_digits_remain() {
    assert_that!(normalize_phone("+998 93-123-45-67"), eq("998931234567"));
}

#[test]
fn given_number_with_parentheses_when_normalized_then_only_digits_remain() {
    assert_that!(normalize_phone("(90) 111 22 33"), eq("901112233"));
}

#[test]
fn given_text_without_digits_when_normalized_then_empty() {
    assert_that!(normalize_phone("no phone"), eq(""));
    assert_that!(normalize_phone(""), eq(""));
}
