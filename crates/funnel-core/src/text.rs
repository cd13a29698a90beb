//! Source text and word tokenization.

/// Built-in text shown when the host supplies none.
pub const DEFAULT_TEXT: &str = "Lorem ipsum odor amet, consectetuer adipiscing elit. \
Sapien augue iaculis potenti, cubilia lacinia senectus aenean integer vehicula. \
Donec turpis ut venenatis velit netus, magnis lacinia.";

/// Split `text` into words on runs of whitespace.
///
/// Leading and trailing whitespace is ignored. Empty or all-whitespace input
/// yields an empty list rather than a single empty word.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
