//! Character-aware string helpers.
//!
//! Prefix lengths are counted in `char`s. Slicing a `&str` by bytes would
//! panic (or worse, succeed on the wrong boundary) for multi-byte text.

/// The first `max_chars` characters of `s`, borrowed.
///
/// Returns `s` unchanged when it is already short enough.
#[inline]
pub fn prefix_key(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_end, _)) => &s[..byte_end],
        None => s,
    }
}

/// Number of characters (not bytes) in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Every prefix of `s` from the empty string up to `max_chars` characters.
///
/// A term of `L <= max_chars` characters yields `L + 1` prefixes; a longer
/// one yields `max_chars + 1`. `usize::MAX` means no limit.
pub fn prefixes(s: &str, max_chars: usize) -> impl Iterator<Item = &str> {
    std::iter::once(0)
        .chain(s.char_indices().skip(1).map(|(i, _)| i))
        .chain(std::iter::once(s.len()).filter(move |_| !s.is_empty()))
        .take(max_chars.saturating_add(1))
        .map(move |end| &s[..end])
}
