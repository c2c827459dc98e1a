//! Whitespace tokenisation and span helpers shared by every stage.

use std::borrow::Cow;

/// `s` without any NUL characters. Extractor output pads fields with NULs,
/// and every key or match over raw assertion text goes through this.
pub fn strip_nul(s: &str) -> Cow<'_, str> {
    if s.contains('\0') {
        Cow::Owned(s.replace('\0', ""))
    } else {
        Cow::Borrowed(s)
    }
}

/// Whitespace tokens of `s`.
pub fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Whether `word` appears as a standalone whitespace token of `s`.
pub fn contains_token(s: &str, word: &str) -> bool {
    s.split_whitespace().any(|t| t == word)
}

/// `items[start..end]`, clamped to the slice bounds.
pub fn span<T>(items: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(items.len());
    let start = start.min(end);
    &items[start..end]
}

/// Characters `start..end` of `s`, counted in Unicode scalar values.
pub fn char_slice(s: &str, start: usize, end: usize) -> String {
    if end <= start {
        return String::new();
    }
    s.chars().skip(start).take(end - start).collect()
}
