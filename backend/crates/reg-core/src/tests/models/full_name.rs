use crate::is_valid_full_name;

#[test]
fn test_single_word_is_invalid() {
    assert!(!is_valid_full_name("Sardor"));
}

#[test]
fn test_two_words_is_valid() {
    assert!(is_valid_full_name("Ali Valiyev"));
    assert!(is_valid_full_name("  Aliyev   Sardor  "));
}

#[test]
fn test_two_short_words_is_invalid() {
    assert!(!is_valid_full_name(" A B "));
}

#[test]
fn test_blank_is_invalid() {
    assert!(!is_valid_full_name(""));
    assert!(!is_valid_full_name("     "));
}
