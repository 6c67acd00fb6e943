//! In-memory text field state.
//!
//! This is the surface [`MaskedFieldStore`](crate::MaskedFieldStore) keeps per
//! field. Adapters bound to a real widget implement
//! [`EditSurface`](crate::EditSurface) on their own type instead.

use crate::text::clamp_to_char_boundary;

/// A single-line text value with a caret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    /// The current text value.
    value: String,

    /// Monotonic revision counter, incremented on any text change.
    /// Useful for cache invalidation.
    value_rev: u64,

    /// Caret position as a byte index into `value` (always on a UTF-8 char boundary).
    caret: usize,
}

impl TextField {
    /// A field holding `value` with the caret at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.len();
        Self {
            value,
            value_rev: 0,
            caret,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn revision(&self) -> u64 {
        self.value_rev
    }

    /// Move the caret, clamped to a valid boundary.
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = clamp_to_char_boundary(&self.value, caret);
    }

    /// Replace the value and caret.
    ///
    /// The revision only advances when the text actually changes.
    pub fn replace(&mut self, value: String, caret: usize) {
        if value != self.value {
            self.value = value;
            self.value_rev = self.value_rev.wrapping_add(1);
        }
        self.set_caret(caret);
    }
}
