//! Edit-event policy.
//!
//! Given the field's current text, the caret and one edit event, decide the
//! new digit stream and hand it to the formatter and the caret reconciler.
//! Each event is judged on its own; nothing is remembered between calls.

use crate::caret::reconcile_position;
use crate::digits::{DigitStream, count_digits, digits_before, extract_digits};
use crate::event::{EditAction, EditEvent, EditOutcome};
use crate::format::render;
use crate::plan::{Normalized, NumberingPlan};
use crate::text::{
    char_after, char_before, clamp_to_char_boundary, next_cursor_boundary, prev_cursor_boundary,
};

/// Evaluate one edit event against the field's pre-edit state.
///
/// `raw_text` is what the field shows right now and `caret_offset` a byte
/// offset into it (clamped to a char boundary). The returned outcome is the
/// complete post-event state.
///
/// # Examples
///
/// ```
/// use mask_core::{EditAction, EditEvent, NumberingPlan, evaluate};
///
/// let plan = NumberingPlan::plus_seven();
/// let out = evaluate(&plan, "+7(999", 6, &EditEvent::KeyStroke('1'));
/// assert_eq!(out.new_display_text, "+7(999) 1");
/// assert_eq!(out.new_caret_offset, 9);
/// assert_eq!(out.action, EditAction::Reformat);
/// ```
pub fn evaluate(
    plan: &NumberingPlan,
    raw_text: &str,
    caret_offset: usize,
    event: &EditEvent,
) -> EditOutcome {
    let caret = clamp_to_char_boundary(raw_text, caret_offset);
    let outcome = match event {
        EditEvent::KeyStroke(ch) => keystroke(plan, raw_text, caret, *ch),
        EditEvent::Backspace => backspace(plan, raw_text, caret),
        EditEvent::ForwardDelete => forward_delete(plan, raw_text, caret),
        EditEvent::Paste(clipboard) => paste(plan, raw_text, caret, clipboard),
        EditEvent::ProgrammaticSet(text) => programmatic_set(plan, text),
    };

    log::trace!(
        target: "phonemask.policy",
        "{} at {caret} in {raw_text:?}: {:?} -> {:?} @{} (suppress={})",
        event.kind(),
        outcome.action,
        outcome.new_display_text,
        outcome.new_caret_offset,
        outcome.suppress_default_edit,
    );
    outcome
}

fn keystroke(plan: &NumberingPlan, raw: &str, caret: usize, ch: char) -> EditOutcome {
    if !ch.is_ascii_digit() {
        // A bare marker may start an empty field before any digit arrives.
        if raw.is_empty() && is_marker(plan, ch) {
            let marker = plan.international_prefix();
            return EditOutcome::caret_only(marker, marker.len(), EditAction::Reformat, false);
        }
        return reject(plan, raw, caret);
    }

    let intent = digits_before(raw, caret);
    let mut digits = DigitStream::from_text(raw);
    digits.insert(intent, ch);

    let normalized = plan.normalize(digits.as_str());
    if normalized.truncated > 0 {
        log::trace!(
            target: "phonemask.policy",
            "digit {ch:?} refused: {:?} stream is full at {} digits",
            normalized.class,
            plan.max_digits(normalized.class),
        );
        return reject(plan, raw, caret);
    }
    let intent = normalized.map_intent(intent + 1);
    settle(plan, &normalized, intent, EditAction::Reformat, false)
}

fn backspace(plan: &NumberingPlan, raw: &str, caret: usize) -> EditOutcome {
    if count_digits(raw) <= 1 {
        return EditOutcome::cleared();
    }
    let Some(prev_char) = char_before(raw, caret) else {
        return EditOutcome::caret_only(raw, caret, EditAction::Noop, false);
    };

    let prev = prev_cursor_boundary(raw, caret);
    if plan.is_separator(prev_char) {
        return EditOutcome::caret_only(raw, prev, EditAction::Skip, true);
    }

    let mut edited = raw.to_string();
    edited.replace_range(prev..caret, "");
    reformat(plan, &edited, prev, EditAction::Reformat, false)
}

fn forward_delete(plan: &NumberingPlan, raw: &str, caret: usize) -> EditOutcome {
    if count_digits(raw) <= 1 {
        return EditOutcome::cleared();
    }
    let Some(next_char) = char_after(raw, caret) else {
        return EditOutcome::caret_only(raw, caret, EditAction::Noop, false);
    };

    let next = next_cursor_boundary(raw, caret);
    if plan.is_separator(next_char) {
        return EditOutcome::caret_only(raw, next, EditAction::Skip, true);
    }

    let mut edited = raw.to_string();
    edited.replace_range(caret..next, "");
    reformat(plan, &edited, caret, EditAction::Reformat, false)
}

fn paste(plan: &NumberingPlan, raw: &str, caret: usize, clipboard: &str) -> EditOutcome {
    let mut digits = DigitStream::from_text(raw);
    let before = digits.len();
    // Appended, not inserted at the caret.
    digits.extend_from_text(clipboard);

    if digits.len() == before {
        let mut outcome = reject(plan, raw, caret);
        outcome.action = EditAction::Noop;
        return outcome;
    }

    let normalized = plan.normalize(digits.as_str());
    let intent = normalized.digits.len();
    settle(plan, &normalized, intent, EditAction::Reformat, true)
}

fn programmatic_set(plan: &NumberingPlan, text: &str) -> EditOutcome {
    let normalized = plan.normalize(&extract_digits(text));
    let intent = normalized.digits.len();
    settle(plan, &normalized, intent, EditAction::Reformat, true)
}

/// Re-render the pre-edit digits and keep the caret on the same digit.
fn reject(plan: &NumberingPlan, raw: &str, caret: usize) -> EditOutcome {
    let digits = extract_digits(raw);
    if digits.is_empty() {
        let text = if raw == plan.international_prefix() {
            raw
        } else {
            ""
        };
        let caret = clamp_to_char_boundary(text, caret);
        return EditOutcome::caret_only(text, caret, EditAction::Reject, true);
    }

    let normalized = plan.normalize(&digits);
    let intent = normalized.map_intent(digits_before(raw, caret));
    settle(plan, &normalized, intent, EditAction::Reject, true)
}

/// Render arbitrary text, carrying the caret by digit count.
fn reformat(
    plan: &NumberingPlan,
    text: &str,
    caret: usize,
    action: EditAction,
    suppress: bool,
) -> EditOutcome {
    let normalized = plan.normalize(&extract_digits(text));
    let intent = normalized.map_intent(digits_before(text, caret));
    settle(plan, &normalized, intent, action, suppress)
}

fn settle(
    plan: &NumberingPlan,
    normalized: &Normalized,
    intent: usize,
    action: EditAction,
    suppress: bool,
) -> EditOutcome {
    let text = render(plan, normalized);
    let caret = reconcile_position(&text, intent);
    EditOutcome {
        new_display_text: text,
        new_caret_offset: caret,
        suppress_default_edit: suppress,
        action,
    }
}

fn is_marker(plan: &NumberingPlan, ch: char) -> bool {
    let mut marker = plan.international_prefix().chars();
    marker.next() == Some(ch) && marker.next().is_none()
}
