//! UTF-8 caret utilities.
//!
//! Display strings produced by the formatter are ASCII, but the raw text an
//! adapter hands in may contain anything the user managed to type or paste.
//! Every offset the core reads or writes goes through these helpers so it
//! always lands on a character boundary.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use mask_core::clamp_to_char_boundary;
///
/// let s = "+7(€)";
/// assert_eq!(clamp_to_char_boundary(s, 3), 3); // start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 3); // mid '€'
/// assert_eq!(clamp_to_char_boundary(s, 100), s.len());
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Find the previous caret position (character boundary) before `i`.
///
/// Returns 0 if already at the start.
///
/// # Examples
///
/// ```
/// use mask_core::prev_cursor_boundary;
///
/// let s = "1€2";
/// assert_eq!(prev_cursor_boundary(s, 5), 4);
/// assert_eq!(prev_cursor_boundary(s, 4), 1);
/// assert_eq!(prev_cursor_boundary(s, 0), 0);
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Find the next caret position (character boundary) after `i`.
///
/// Returns `s.len()` if already at or beyond the end.
///
/// # Examples
///
/// ```
/// use mask_core::next_cursor_boundary;
///
/// let s = "1€2";
/// assert_eq!(next_cursor_boundary(s, 0), 1);
/// assert_eq!(next_cursor_boundary(s, 1), 4);
/// assert_eq!(next_cursor_boundary(s, 5), 5);
/// ```
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i >= s.len() {
        return s.len();
    }

    let mut it = s[i..].char_indices();
    let _ = it.next(); // current char at 0
    it.next().map(|(idx, _)| i + idx).unwrap_or(s.len())
}

/// The character immediately before `caret`, if any.
pub(crate) fn char_before(s: &str, caret: usize) -> Option<char> {
    let caret = clamp_to_char_boundary(s, caret);
    s[..caret].chars().next_back()
}

/// The character immediately after `caret`, if any.
pub(crate) fn char_after(s: &str, caret: usize) -> Option<char> {
    let caret = clamp_to_char_boundary(s, caret);
    s[caret..].chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_boundary_basic() {
        let s = "a€b";
        assert_eq!(clamp_to_char_boundary(s, 0), 0);
        assert_eq!(clamp_to_char_boundary(s, 1), 1);
        assert_eq!(clamp_to_char_boundary(s, 2), 1);
        assert_eq!(clamp_to_char_boundary(s, 3), 1);
        assert_eq!(clamp_to_char_boundary(s, 4), 4);
        assert_eq!(clamp_to_char_boundary(s, 5), 5);
        assert_eq!(clamp_to_char_boundary(s, 100), 5);
    }

    #[test]
    fn prev_next_cursor_basic() {
        let s = "a€b";
        assert_eq!(prev_cursor_boundary(s, 5), 4);
        assert_eq!(prev_cursor_boundary(s, 4), 1);
        assert_eq!(prev_cursor_boundary(s, 1), 0);
        assert_eq!(prev_cursor_boundary(s, 0), 0);

        assert_eq!(next_cursor_boundary(s, 0), 1);
        assert_eq!(next_cursor_boundary(s, 1), 4);
        assert_eq!(next_cursor_boundary(s, 4), 5);
        assert_eq!(next_cursor_boundary(s, 5), 5);
    }

    #[test]
    fn neighbours_of_caret() {
        let s = "+7(9";
        assert_eq!(char_before(s, 0), None);
        assert_eq!(char_before(s, 3), Some('('));
        assert_eq!(char_after(s, 3), Some('9'));
        assert_eq!(char_after(s, 4), None);
        // Out-of-range carets clamp to the end.
        assert_eq!(char_before(s, 99), Some('9'));
    }
}
