// Tests for word tokenization and the built-in source text.

use funnel_core::{tokenize, DEFAULT_TEXT};

#[test]
fn tokenize_collapses_whitespace_runs() {
    assert_eq!(tokenize("  a   b  c "), vec!["a", "b", "c"]);
    assert_eq!(tokenize("one\ttwo\nthree\r\nfour"), vec!["one", "two", "three", "four"]);
}

#[test]
fn tokenize_empty_or_blank_yields_no_words() {
    // Chosen boundary: no words at all, never a single empty word
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t\n  ").is_empty());
}

#[test]
fn tokenize_keeps_punctuation_attached() {
    assert_eq!(tokenize("amet, elit."), vec!["amet,", "elit."]);
}

#[test]
fn tokenize_is_idempotent_over_rejoin() {
    let first = tokenize(DEFAULT_TEXT);
    let second = tokenize(&first.join(" "));
    assert_eq!(first, second);
}

#[test]
fn default_text_word_count() {
    let words = tokenize(DEFAULT_TEXT);
    assert_eq!(words.len(), 25);
    assert_eq!(words.first().map(String::as_str), Some("Lorem"));
    assert_eq!(words.last().map(String::as_str), Some("lacinia."));
}
