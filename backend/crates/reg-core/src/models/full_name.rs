const MIN_NAME_TOKENS: usize = 2;
const MIN_NAME_CHARS: usize = 5;

/// A full name needs at least two words and five characters once trimmed.
pub fn is_valid_full_name(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.split_whitespace().count() >= MIN_NAME_TOKENS
        && trimmed.chars().count() >= MIN_NAME_CHARS
}
