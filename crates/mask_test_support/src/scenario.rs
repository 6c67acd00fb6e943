//! TOML edit scenarios.
//!
//! ```toml
//! format = "phonemask-scenario-v1"
//! plan = "plus7"
//!
//! [[cases]]
//! id = "type-full-number"
//! initial = "|"
//! steps = [
//!     { event = "key", text = "9", expect = "+7(9|" },
//!     { event = "backspace", expect = "|", action = "clear" },
//! ]
//! ```
//!
//! `initial` and `expect` are caret-marked (see
//! [`parse_caret_marked`](crate::parse_caret_marked)).

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const SCENARIO_FORMAT_V1: &str = "phonemask-scenario-v1";

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub format: String,
    /// Preset name; defaults to the crate default plan.
    #[serde(default)]
    pub plan: Option<String>,
    pub cases: Vec<ScenarioCase>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioCase {
    pub id: String,
    /// Field value when the case starts. Not reformatted unless `bind` is set.
    #[serde(default)]
    pub initial: String,
    /// Route `initial` through binding, which formats it first.
    #[serde(default)]
    pub bind: bool,
    #[serde(default)]
    pub bind_expect: Option<String>,
    pub steps: Vec<ScenarioStep>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioStep {
    pub event: StepEvent,
    /// Typed char for `key`, clipboard for `paste`, value for `set`.
    #[serde(default)]
    pub text: Option<String>,
    /// Caret offset for `caret` steps.
    #[serde(default)]
    pub offset: Option<usize>,
    pub expect: String,
    #[serde(default)]
    pub suppress: Option<bool>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepEvent {
    Key,
    Backspace,
    Delete,
    Paste,
    Set,
    /// Move the caret without editing.
    Caret,
}

impl ScenarioStep {
    /// The single char of a `key` step.
    pub fn key(&self) -> char {
        let text = self.text.as_deref().unwrap_or_default();
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => panic!("key step needs exactly one char, got {text:?}"),
        }
    }

    pub fn text(&self) -> &str {
        self.text
            .as_deref()
            .unwrap_or_else(|| panic!("{:?} step needs `text`", self.event))
    }
}

pub fn load_scenarios(path: &Path) -> ScenarioFile {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario file {path:?}: {err}"));
    let file: ScenarioFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse scenario file {path:?}: {err}"));
    validate(&file, path);
    file
}

fn validate(file: &ScenarioFile, path: &Path) {
    assert_eq!(
        file.format, SCENARIO_FORMAT_V1,
        "unsupported scenario format in {path:?}"
    );
    assert!(!file.cases.is_empty(), "scenario file {path:?} has no cases");

    let mut ids = BTreeSet::new();
    for case in &file.cases {
        assert!(
            ids.insert(case.id.as_str()),
            "duplicate case id '{}' in {path:?}",
            case.id
        );
        assert!(
            case.bind || case.bind_expect.is_none(),
            "case '{}' sets bind_expect without bind in {path:?}",
            case.id
        );
        for (i, step) in case.steps.iter().enumerate() {
            let needs_text = matches!(
                step.event,
                StepEvent::Key | StepEvent::Paste | StepEvent::Set
            );
            assert_eq!(
                step.text.is_some(),
                needs_text,
                "step {} of '{}' in {path:?}: `text` is {} for {:?}",
                i + 1,
                case.id,
                if needs_text { "required" } else { "not allowed" },
                step.event
            );
            assert_eq!(
                step.offset.is_some(),
                step.event == StepEvent::Caret,
                "step {} of '{}' in {path:?}: `offset` only goes with caret steps",
                i + 1,
                case.id
            );
        }
    }
}

/// All `*.toml` files directly under `dir`, sorted.
pub fn fixture_paths(dir: &Path) -> Vec<PathBuf> {
    let entries =
        fs::read_dir(dir).unwrap_or_else(|err| panic!("failed to list fixtures {dir:?}: {err}"));
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    paths
}
