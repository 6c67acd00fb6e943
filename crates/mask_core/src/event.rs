//! Edit events coming from an adapter, and what the core answers with.

/// A platform edit event, already decoded by the adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditEvent {
    /// A typed character. Whether it is a digit is derived from the char.
    KeyStroke(char),
    /// Delete the character before the caret.
    Backspace,
    /// Delete the character after the caret.
    ForwardDelete,
    /// Clipboard text dropped into the field.
    Paste(String),
    /// The field's value was assigned by code rather than typed.
    ProgrammaticSet(String),
}

impl EditEvent {
    /// Short, stable name for logs and scripts.
    pub fn kind(&self) -> &'static str {
        match self {
            EditEvent::KeyStroke(_) => "key",
            EditEvent::Backspace => "backspace",
            EditEvent::ForwardDelete => "delete",
            EditEvent::Paste(_) => "paste",
            EditEvent::ProgrammaticSet(_) => "set",
        }
    }
}

/// Which branch of the edit policy produced an [`EditOutcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// The digit stream changed (or was re-rendered) and the caret was
    /// reconciled against the new text.
    Reformat,
    /// The edit was refused; the pre-edit digits were re-rendered.
    Reject,
    /// The caret stepped over a separator; no digit was removed.
    Skip,
    /// The field was emptied.
    Clear,
    /// Nothing to do (e.g. backspace at offset 0).
    Noop,
}

/// Result of evaluating one edit event.
///
/// Adapters write `new_display_text` and `new_caret_offset` back to the
/// surface unconditionally. `suppress_default_edit` tells them whether the
/// platform's own handling of the event must be prevented: it is `false` only
/// when letting the native edit happen and then reformatting would yield this
/// exact state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    pub new_display_text: String,
    /// Byte offset into `new_display_text`, on a char boundary.
    pub new_caret_offset: usize,
    pub suppress_default_edit: bool,
    pub action: EditAction,
}

impl EditOutcome {
    pub(crate) fn cleared() -> Self {
        Self {
            new_display_text: String::new(),
            new_caret_offset: 0,
            suppress_default_edit: true,
            action: EditAction::Clear,
        }
    }

    /// Text untouched, caret moved.
    pub(crate) fn caret_only(text: &str, caret: usize, action: EditAction, suppress: bool) -> Self {
        Self {
            new_display_text: text.to_string(),
            new_caret_offset: caret,
            suppress_default_edit: suppress,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kinds_are_distinct() {
        let events = [
            EditEvent::KeyStroke('1'),
            EditEvent::Backspace,
            EditEvent::ForwardDelete,
            EditEvent::Paste(String::new()),
            EditEvent::ProgrammaticSet(String::new()),
        ];
        let kinds: std::collections::HashSet<_> = events.iter().map(EditEvent::kind).collect();
        assert_eq!(kinds.len(), events.len());
    }
}
