//! Caret reconciliation across reformatting.
//!
//! The caret is carried as a digit count ("how many digits sit to its left")
//! rather than a byte offset, since separators move around on every keystroke.

/// Map a caret intent onto `display`.
///
/// Returns the offset right after the `digits_before_caret`-th digit. An
/// intent of 0 maps to offset 0; an intent the string cannot satisfy maps to
/// the end of the string.
///
/// # Examples
///
/// ```
/// use mask_core::reconcile_position;
///
/// let display = "+7(999) 123-45-67";
/// assert_eq!(reconcile_position(display, 0), 0);
/// assert_eq!(reconcile_position(display, 1), 2); // after "+7"
/// assert_eq!(reconcile_position(display, 4), 6); // after "+7(999"
/// assert_eq!(reconcile_position(display, 5), 9); // after "+7(999) 1"
/// assert_eq!(reconcile_position(display, 99), display.len());
/// ```
pub fn reconcile_position(display: &str, digits_before_caret: usize) -> usize {
    if digits_before_caret == 0 {
        return 0;
    }

    let mut seen = 0usize;
    for (idx, ch) in display.char_indices() {
        if ch.is_ascii_digit() {
            seen += 1;
            if seen == digits_before_caret {
                return idx + ch.len_utf8();
            }
        }
    }
    display.len()
}
