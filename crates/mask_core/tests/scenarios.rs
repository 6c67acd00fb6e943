use std::path::Path;

use mask_core::{EditEvent, EditOutcome, NumberingPlan, PhoneMask, TextField, clamp_to_char_boundary};
use mask_test_support::scenario::{ScenarioCase, ScenarioStep, StepEvent, fixture_paths, load_scenarios};
use mask_test_support::{diff_lines, escape_text, mark_caret, parse_caret_marked};

fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("scenarios")
}

fn step_event(step: &ScenarioStep) -> Option<EditEvent> {
    match step.event {
        StepEvent::Key => Some(EditEvent::KeyStroke(step.key())),
        StepEvent::Backspace => Some(EditEvent::Backspace),
        StepEvent::Delete => Some(EditEvent::ForwardDelete),
        StepEvent::Paste => Some(EditEvent::Paste(step.text().to_string())),
        StepEvent::Set => Some(EditEvent::ProgrammaticSet(step.text().to_string())),
        StepEvent::Caret => None,
    }
}

fn describe(step: &ScenarioStep, marked: &str, outcome: Option<&EditOutcome>) -> String {
    let mut line = format!("{:?} \"{}\"", step.event, escape_text(marked));
    if step.suppress.is_some() {
        let suppress = outcome.map(|o| o.suppress_default_edit);
        line.push_str(&format!(" suppress={suppress:?}"));
    }
    if step.action.is_some() {
        let action = outcome.map(|o| format!("{:?}", o.action).to_ascii_lowercase());
        line.push_str(&format!(" action={}", action.as_deref().unwrap_or("-")));
    }
    line
}

fn expected_line(step: &ScenarioStep) -> String {
    let mut line = format!("{:?} \"{}\"", step.event, escape_text(&step.expect));
    if let Some(suppress) = step.suppress {
        line.push_str(&format!(" suppress={:?}", Some(suppress)));
    }
    if let Some(action) = &step.action {
        line.push_str(&format!(" action={action}"));
    }
    line
}

fn run_case(mask: &PhoneMask, case: &ScenarioCase) -> Result<(), String> {
    let (initial, initial_caret) = parse_caret_marked(&case.initial);
    let (mut text, mut caret) = if case.bind {
        let binding = mask.bind(TextField::new(initial));
        let field = binding.into_surface();
        (field.value().to_string(), field.caret())
    } else {
        (initial, initial_caret)
    };

    if let Some(bind_expect) = &case.bind_expect {
        let actual = mark_caret(&text, caret);
        if &actual != bind_expect {
            return Err(format!(
                "bind: expected \"{}\", got \"{}\"",
                escape_text(bind_expect),
                escape_text(&actual)
            ));
        }
    }

    let mut expected = Vec::new();
    let mut actual = Vec::new();
    for step in &case.steps {
        let outcome = match step_event(step) {
            Some(event) => {
                let outcome = mask.evaluate(&text, caret, &event);
                text = outcome.new_display_text.clone();
                caret = outcome.new_caret_offset;
                Some(outcome)
            }
            None => {
                caret = clamp_to_char_boundary(&text, step.offset.unwrap_or_default());
                None
            }
        };
        expected.push(expected_line(step));
        actual.push(describe(step, &mark_caret(&text, caret), outcome.as_ref()));
    }

    if expected == actual {
        Ok(())
    } else {
        Err(diff_lines(&expected, &actual))
    }
}

#[test]
fn scenario_fixtures() {
    let paths = fixture_paths(&fixtures_dir());
    assert!(!paths.is_empty(), "no scenario fixtures found");

    let mut failures = Vec::new();
    let mut ran = 0usize;
    for path in &paths {
        let file = load_scenarios(path);
        let plan = match file.plan.as_deref() {
            Some(name) => NumberingPlan::preset(name)
                .unwrap_or_else(|| panic!("unknown plan '{name}' in {path:?}")),
            None => NumberingPlan::default(),
        };
        let mask = PhoneMask::new(plan);
        for case in &file.cases {
            ran += 1;
            if let Err(diff) = run_case(&mask, case) {
                failures.push(format!("{}::{}\n{diff}", path.display(), case.id));
            }
        }
    }

    assert!(ran > 0, "scenario fixtures contain no cases");
    assert!(
        failures.is_empty(),
        "{} of {ran} scenario(s) failed:\n\n{}",
        failures.len(),
        failures.join("\n")
    );
}
