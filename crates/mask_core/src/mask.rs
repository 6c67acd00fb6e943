//! The masking core as a cheap, shareable handle, and the per-field binding
//! it hands out.

use std::sync::Arc;

use crate::caret::reconcile_position;
use crate::digits::{count_digits, extract_digits};
use crate::event::{EditEvent, EditOutcome};
use crate::format::format_digits;
use crate::plan::NumberingPlan;
use crate::policy::evaluate;
use crate::traits::EditSurface;

/// Formatter, reconciler and edit policy bound to one numbering plan.
///
/// Clones share the plan. A `PhoneMask` holds no per-field state, so one
/// instance can serve any number of fields, on any number of threads.
///
/// # Example
///
/// ```
/// use mask_core::{EditEvent, PhoneMask, TextField};
///
/// let mask = PhoneMask::default();
/// assert_eq!(mask.format("9991234567"), "+7(999) 123-45-67");
///
/// let mut field = mask.bind(TextField::new(""));
/// field.handle(&EditEvent::Paste("8 (999) 123".into()));
/// assert_eq!(field.surface().value(), "+7(999) 123");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PhoneMask {
    plan: Arc<NumberingPlan>,
}

impl PhoneMask {
    pub fn new(plan: NumberingPlan) -> Self {
        Self {
            plan: Arc::new(plan),
        }
    }

    pub fn plan(&self) -> &NumberingPlan {
        &self.plan
    }

    /// Render a digit string (or raw text) for display.
    pub fn format(&self, digits: &str) -> String {
        format_digits(&self.plan, digits)
    }

    /// Evaluate one edit event. See [`evaluate`](crate::evaluate).
    pub fn evaluate(&self, raw_text: &str, caret_offset: usize, event: &EditEvent) -> EditOutcome {
        evaluate(&self.plan, raw_text, caret_offset, event)
    }

    /// Produce an independent binding for one field.
    ///
    /// A non-empty initial value is formatted right away; a value without any
    /// digits is cleared.
    pub fn bind<S: EditSurface>(&self, surface: S) -> MaskBinding<S> {
        let mut binding = MaskBinding {
            mask: self.clone(),
            surface,
        };
        binding.reformat_initial();
        binding
    }
}

/// One field driven by a [`PhoneMask`].
#[derive(Debug)]
pub struct MaskBinding<S> {
    mask: PhoneMask,
    surface: S,
}

impl<S: EditSurface> MaskBinding<S> {
    /// Apply an event to the surface and report what was done.
    pub fn handle(&mut self, event: &EditEvent) -> EditOutcome {
        let outcome = self
            .mask
            .evaluate(self.surface.text(), self.surface.caret(), event);
        self.surface
            .replace(outcome.new_display_text.clone(), outcome.new_caret_offset);
        outcome
    }

    /// Digits currently shown, separators stripped.
    pub fn digits(&self) -> String {
        extract_digits(self.surface.text())
    }

    pub fn mask(&self) -> &PhoneMask {
        &self.mask
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn reformat_initial(&mut self) {
        let raw = self.surface.text();
        if raw.is_empty() {
            return;
        }
        let text = self.mask.format(raw);
        let caret = reconcile_position(&text, count_digits(&text));
        log::debug!(
            target: "phonemask.binding",
            "initial value {raw:?} rendered as {text:?}"
        );
        self.surface.replace(text, caret);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EditAction;
    use crate::field::TextField;

    #[test]
    fn bind_formats_prepopulated_value() {
        let mask = PhoneMask::default();
        let binding = mask.bind(TextField::new("8 999 123-45-67"));
        assert_eq!(binding.surface().value(), "+7(999) 123-45-67");
        assert_eq!(binding.surface().caret(), "+7(999) 123-45-67".len());
        assert_eq!(binding.digits(), "79991234567");
    }

    #[test]
    fn bind_clears_value_without_digits() {
        let binding = PhoneMask::default().bind(TextField::new("n/a"));
        assert_eq!(binding.surface().value(), "");
        assert_eq!(binding.surface().caret(), 0);
    }

    #[test]
    fn bind_leaves_empty_field_untouched() {
        let binding = PhoneMask::default().bind(TextField::new(""));
        assert_eq!(binding.surface().revision(), 0);
    }

    #[test]
    fn bindings_from_one_mask_are_independent() {
        let mask = PhoneMask::default();
        let mut a = mask.bind(TextField::new(""));
        let mut b = mask.bind(TextField::new(""));

        a.handle(&EditEvent::KeyStroke('9'));
        b.handle(&EditEvent::KeyStroke('4'));

        assert_eq!(a.surface().value(), "+7(9");
        assert_eq!(b.surface().value(), "+4");
    }

    #[test]
    fn handle_writes_back_skip() {
        let mask = PhoneMask::default();
        let mut binding = mask.bind(TextField::new("+7(999) 1"));
        binding.surface_mut().set_caret(7);

        let out = binding.handle(&EditEvent::Backspace);
        assert_eq!(out.action, EditAction::Skip);
        assert_eq!(binding.surface().caret(), 6);
        assert_eq!(binding.surface().value(), "+7(999) 1");
    }

    #[test]
    fn binding_over_borrowed_surface() {
        let mask = PhoneMask::new(NumberingPlan::trunk_eight());
        let mut field = TextField::new("");
        {
            let mut binding = mask.bind(&mut field);
            for ch in "79991".chars() {
                binding.handle(&EditEvent::KeyStroke(ch));
            }
        }
        assert_eq!(field.value(), "8 (999) 1");
    }

    #[test]
    fn mask_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PhoneMask>();
    }
}
