//! Edit scripts for `phonemask replay`.
//!
//! ```toml
//! plan = "plus7"
//! initial = "8 999 12"
//!
//! [[steps]]
//! kind = "caret"
//! offset = 6
//!
//! [[steps]]
//! kind = "backspace"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mask_core::{EditEvent, EditOutcome, PhoneMask, TextField, clamp_to_char_boundary};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub initial: String,
    /// Caret after binding; defaults to the end of the formatted value.
    #[serde(default)]
    pub caret: Option<usize>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptStep {
    Key { key: char },
    Backspace,
    Delete,
    Paste { text: String },
    Set { text: String },
    Caret { offset: usize },
}

impl ScriptStep {
    fn event(&self) -> Option<EditEvent> {
        match self {
            ScriptStep::Key { key } => Some(EditEvent::KeyStroke(*key)),
            ScriptStep::Backspace => Some(EditEvent::Backspace),
            ScriptStep::Delete => Some(EditEvent::ForwardDelete),
            ScriptStep::Paste { text } => Some(EditEvent::Paste(text.clone())),
            ScriptStep::Set { text } => Some(EditEvent::ProgrammaticSet(text.clone())),
            ScriptStep::Caret { .. } => None,
        }
    }

    fn label(&self) -> String {
        match self {
            ScriptStep::Key { key } => format!("key {key:?}"),
            ScriptStep::Backspace => "backspace".to_string(),
            ScriptStep::Delete => "delete".to_string(),
            ScriptStep::Paste { text } => format!("paste {text:?}"),
            ScriptStep::Set { text } => format!("set {text:?}"),
            ScriptStep::Caret { offset } => format!("caret {offset}"),
        }
    }
}

pub fn load(path: &Path) -> Result<Script> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse script {}", path.display()))
}

/// Field text with `|` at the caret.
pub fn marked(text: &str, caret: usize) -> String {
    let caret = clamp_to_char_boundary(text, caret);
    format!("{}|{}", &text[..caret], &text[caret..])
}

fn outcome_note(outcome: &EditOutcome) -> String {
    let mut note = format!("{:?}", outcome.action).to_ascii_lowercase();
    if outcome.suppress_default_edit {
        note.push_str(", suppress");
    }
    note
}

/// Run every step and return one report line per state.
pub fn replay(mask: &PhoneMask, script: &Script) -> Vec<String> {
    let mut binding = mask.bind(TextField::new(script.initial.as_str()));
    if let Some(caret) = script.caret {
        binding.surface_mut().set_caret(caret);
    }

    let field = binding.surface();
    let mut lines = vec![format!(
        "{:<18} {}",
        "bind",
        marked(field.value(), field.caret())
    )];

    for step in &script.steps {
        let note = match step.event() {
            Some(event) => outcome_note(&binding.handle(&event)),
            None => {
                if let ScriptStep::Caret { offset } = step {
                    binding.surface_mut().set_caret(*offset);
                }
                String::new()
            }
        };
        let field = binding.surface();
        let line = format!("{:<18} {}", step.label(), marked(field.value(), field.caret()));
        lines.push(if note.is_empty() {
            line
        } else {
            format!("{line}  ({note})")
        });
    }
    lines
}
