//! Digit stream -> display string.

use crate::digits::extract_digits;
use crate::plan::{Normalized, NumberingClass, NumberingPlan};

/// Render `input` under `plan`.
///
/// Every non-digit in `input` is discarded first, so this accepts raw field
/// text as well as bare digit strings. Total over all inputs: an empty stream
/// renders as the empty string, an overlong one is truncated.
///
/// # Examples
///
/// ```
/// use mask_core::{NumberingPlan, format_digits};
///
/// let plan = NumberingPlan::plus_seven();
/// assert_eq!(format_digits(&plan, "79991234567"), "+7(999) 123-45-67");
/// assert_eq!(format_digits(&plan, "9991234567"), "+7(999) 123-45-67");
/// assert_eq!(format_digits(&plan, "442012345678"), "+442012345678");
/// assert_eq!(format_digits(&plan, ""), "");
/// ```
pub fn format_digits(plan: &NumberingPlan, input: &str) -> String {
    let digits = extract_digits(input);
    if digits.is_empty() {
        return String::new();
    }
    render(plan, &plan.normalize(&digits))
}

/// Render an already normalized stream.
pub(crate) fn render(plan: &NumberingPlan, normalized: &Normalized) -> String {
    let digits = normalized.digits.as_str();
    if digits.is_empty() {
        return String::new();
    }

    match normalized.class {
        NumberingClass::Domestic => render_domestic(plan, digits),
        NumberingClass::International => {
            let prefix = plan.international_prefix();
            let mut out = String::with_capacity(prefix.len() + digits.len());
            out.push_str(prefix);
            out.push_str(digits);
            out
        }
    }
}

fn render_domestic(plan: &NumberingPlan, digits: &str) -> String {
    let template = plan.domestic_template();
    let mut out = String::with_capacity(template.source.len());
    // digits[0] is the country digit, already spelled out by the prefix.
    out.push_str(&template.prefix);

    for group in &template.groups {
        if digits.len() <= group.start {
            break;
        }
        out.push_str(&group.literal);
        out.push_str(&digits[group.start..group.end.min(digits.len())]);
    }

    if digits.len() > template.slots {
        out.push_str(&template.suffix);
    }
    out
}
