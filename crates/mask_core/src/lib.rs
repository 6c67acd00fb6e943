//! # mask_core
//!
//! UI-agnostic phone-number masking for single-line text fields.
//!
//! The crate is three pure pieces and a thin binding layer:
//! - [`format_digits`]: renders a digit stream through a [`NumberingPlan`]
//! - [`reconcile_position`]: maps "caret after the k-th digit" onto a
//!   formatted string
//! - [`evaluate`]: turns one [`EditEvent`] plus the field's current text and
//!   caret into an [`EditOutcome`]
//!
//! [`PhoneMask`] bundles the three with a shared plan, [`MaskBinding`] drives
//! one [`EditSurface`], and [`MaskedFieldStore`] keeps many in-memory fields
//! keyed by [`FieldId`].
//!
//! ## Design Principles
//!
//! This crate does not depend on any UI toolkit, DOM or platform event
//! loop. Adapters decode native events into [`EditEvent`], call the core,
//! write the outcome back, and cancel the native edit when
//! [`EditOutcome::suppress_default_edit`] says so.
//!
//! Caret offsets are byte offsets into UTF-8 text, always clamped to a char
//! boundary.
//!
//! ## Features
//!
//! - `config`: load [`NumberingPlan`]s from TOML (`serde` + `toml`).

mod caret;
mod digits;
mod event;
mod field;
mod format;
mod id;
mod mask;
mod plan;
mod policy;
mod store;
mod text;
mod traits;

#[cfg(feature = "config")]
pub mod config;

pub use caret::reconcile_position;
pub use digits::{DigitStream, count_digits, digits_before, extract_digits};
pub use event::{EditAction, EditEvent, EditOutcome};
pub use field::TextField;
pub use format::format_digits;
pub use id::FieldId;
pub use mask::{MaskBinding, PhoneMask};
pub use plan::{
    INTERNATIONAL_MAX_DIGITS, LeadRewrite, LeadingAlias, Normalized, NumberingClass,
    NumberingPlan, PlanError, SLOT,
};
pub use policy::evaluate;
pub use store::MaskedFieldStore;
pub use traits::EditSurface;

// Caret helpers for adapters that move the caret themselves.
pub use text::{clamp_to_char_boundary, next_cursor_boundary, prev_cursor_boundary};
