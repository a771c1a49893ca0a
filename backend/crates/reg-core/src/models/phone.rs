/// Reduce a phone number to its ASCII digits.
///
/// `"+998 93-123-45-67"` becomes `"998931234567"`. Normalizing an already
/// normalized value returns it unchanged.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
