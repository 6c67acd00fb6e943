//! Central store for masked fields.
//!
//! One entry per matched input surface, each an independent
//! [`MaskBinding`] over a [`TextField`]. The store shares a single
//! [`PhoneMask`] between entries; there is no other shared state.

use std::collections::HashMap;

use crate::event::{EditEvent, EditOutcome};
use crate::field::TextField;
use crate::id::FieldId;
use crate::mask::{MaskBinding, PhoneMask};

/// Per-field masking state keyed by [`FieldId`].
///
/// # Example
///
/// ```
/// use mask_core::{EditEvent, FieldId, MaskedFieldStore};
///
/// let mut store = MaskedFieldStore::default();
/// let id = FieldId::from_raw(1);
///
/// store.attach(id, "");
/// for ch in "9991234567".chars() {
///     store.apply(id, &EditEvent::KeyStroke(ch));
/// }
///
/// assert_eq!(store.get(id), Some("+7(999) 123-45-67"));
/// ```
#[derive(Debug, Default)]
pub struct MaskedFieldStore {
    mask: PhoneMask,
    fields: HashMap<FieldId, MaskBinding<TextField>>,
}

impl MaskedFieldStore {
    pub fn new(mask: PhoneMask) -> Self {
        Self {
            mask,
            fields: HashMap::new(),
        }
    }

    pub fn mask(&self) -> &PhoneMask {
        &self.mask
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Bind a field if it is not bound yet, formatting `initial`.
    ///
    /// Returns `false` and leaves the existing entry alone if `id` is already
    /// attached.
    pub fn attach(&mut self, id: FieldId, initial: &str) -> bool {
        if self.fields.contains_key(&id) {
            return false;
        }
        let binding = self.mask.bind(TextField::new(initial));
        log::debug!(
            target: "phonemask.store",
            "attached {id} with {:?}",
            binding.surface().value()
        );
        self.fields.insert(id, binding);
        true
    }

    /// Attach every `(id, initial)` pair. Returns how many were new.
    pub fn attach_all<I, T>(&mut self, fields: I) -> usize
    where
        I: IntoIterator<Item = (FieldId, T)>,
        T: AsRef<str>,
    {
        let mut added = 0;
        for (id, initial) in fields {
            if self.attach(id, initial.as_ref()) {
                added += 1;
            }
        }
        added
    }

    /// Drop a field, returning its last displayed value.
    pub fn detach(&mut self, id: FieldId) -> Option<String> {
        let binding = self.fields.remove(&id)?;
        log::debug!(target: "phonemask.store", "detached {id}");
        Some(binding.into_surface().value().to_string())
    }

    /// Clear all fields.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Returns the displayed value for this field, if any.
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|b| b.surface().value())
    }

    /// Returns the caret byte index for this field, if any.
    pub fn caret(&self, id: FieldId) -> Option<usize> {
        self.fields.get(&id).map(|b| b.surface().caret())
    }

    /// Place the caret (clamped to a valid boundary).
    pub fn set_caret(&mut self, id: FieldId, caret: usize) {
        if let Some(binding) = self.fields.get_mut(&id) {
            binding.surface_mut().set_caret(caret);
        }
    }

    /// Monotonic revision counter for the field's value.
    ///
    /// Increments on any text change. Useful for cache invalidation.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.fields
            .get(&id)
            .map(|b| b.surface().revision())
            .unwrap_or(0)
    }

    /// The digit stream currently shown in this field.
    pub fn digits(&self, id: FieldId) -> Option<String> {
        self.fields.get(&id).map(MaskBinding::digits)
    }

    /// Route an edit event to one field.
    ///
    /// Returns `None` if the field is not attached.
    pub fn apply(&mut self, id: FieldId, event: &EditEvent) -> Option<EditOutcome> {
        let binding = self.fields.get_mut(&id)?;
        let outcome = binding.handle(event);
        log::trace!(
            target: "phonemask.store",
            "{id}: {} -> {:?}",
            event.kind(),
            outcome.action
        );
        Some(outcome)
    }

    /// Assign a value from code, formatted like any other edit.
    pub fn set(&mut self, id: FieldId, value: &str) -> Option<EditOutcome> {
        self.apply(id, &EditEvent::ProgrammaticSet(value.to_string()))
    }
}
