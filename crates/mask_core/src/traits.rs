//! The seam between the masking core and whatever input surface it drives.
//!
//! The core never reads caret or text from ambient platform state: an adapter
//! exposes them through [`EditSurface`], and the core hands the result back
//! through the same trait.
//!
//! # Integration Pattern
//!
//! ```ignore
//! impl EditSurface for MyWidget {
//!     fn text(&self) -> &str { &self.buffer }
//!     fn caret(&self) -> usize { self.selection.head }
//!     fn replace(&mut self, text: String, caret: usize) {
//!         self.buffer = text;
//!         self.selection = Selection::collapsed(caret);
//!     }
//! }
//!
//! let mut binding = mask.bind(widget);
//! let outcome = binding.handle(&EditEvent::Backspace);
//! if outcome.suppress_default_edit {
//!     native_event.prevent_default();
//! }
//! ```

use crate::field::TextField;

/// A text surface the core can read from and write back to.
pub trait EditSurface {
    /// The text currently displayed.
    fn text(&self) -> &str;

    /// Caret as a byte offset into [`text`](Self::text).
    fn caret(&self) -> usize;

    /// Overwrite text and caret in one step.
    ///
    /// `caret` is always a char boundary of `text`.
    fn replace(&mut self, text: String, caret: usize);
}

impl EditSurface for TextField {
    #[inline]
    fn text(&self) -> &str {
        self.value()
    }

    #[inline]
    fn caret(&self) -> usize {
        TextField::caret(self)
    }

    #[inline]
    fn replace(&mut self, text: String, caret: usize) {
        TextField::replace(self, text, caret)
    }
}

impl<S: EditSurface + ?Sized> EditSurface for &mut S {
    #[inline]
    fn text(&self) -> &str {
        (**self).text()
    }

    #[inline]
    fn caret(&self) -> usize {
        (**self).caret()
    }

    #[inline]
    fn replace(&mut self, text: String, caret: usize) {
        (**self).replace(text, caret)
    }
}
