//! Numbering plans: which leading digits count as domestic, how they are
//! normalized, and the template a domestic number is rendered with.
//!
//! A plan is an immutable value object. Regional conventions that disagree
//! (a leading `8` kept as a trunk prefix vs. rewritten to `+7`) are expressed
//! as different plans rather than branches in the formatter.

use std::fmt;

/// Placeholder for one digit slot in a domestic template.
pub const SLOT: char = 'D';

/// Default cap for numbers outside the domestic plan.
pub const INTERNATIONAL_MAX_DIGITS: usize = 16;

/// Which rendering rule a digit stream falls under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberingClass {
    /// Grouped through the plan's domestic template.
    Domestic,
    /// Prefixed raw digits, no grouping.
    International,
}

/// How a leading digit is rewritten before classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadRewrite {
    /// Keep the digit and put another one in front (`9` -> `79`).
    Prepend(char),
    /// Swap the digit for another one (`8` -> `7`).
    Replace(char),
}

/// Alias-table entry keyed by the first digit of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LeadingAlias {
    pub digit: char,
    pub rewrite: LeadRewrite,
}

impl LeadingAlias {
    pub const fn prepend(digit: char, country: char) -> Self {
        Self {
            digit,
            rewrite: LeadRewrite::Prepend(country),
        }
    }

    pub const fn replace(digit: char, country: char) -> Self {
        Self {
            digit,
            rewrite: LeadRewrite::Replace(country),
        }
    }

    fn target(&self) -> char {
        match self.rewrite {
            LeadRewrite::Prepend(d) | LeadRewrite::Replace(d) => d,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The template has no country digit before its first slot.
    MissingCountryDigit { template: String },
    /// A literal digit appears after the country digit.
    StrayTemplateDigit { template: String, digit: char },
    /// The template has no `D` slots at all.
    NoDigitSlots { template: String },
    /// A lead or alias entry is not an ASCII digit.
    NotADigit { value: char },
    /// The template's country digit is not one of the domestic leads.
    CountryNotDomestic { country: char },
    /// A domestic lead would render under the template without matching its
    /// country digit.
    UnaliasedLead { digit: char, country: char },
    /// An alias rewrites to something other than the country digit.
    AliasTarget {
        digit: char,
        target: char,
        country: char,
    },
    /// Two aliases for the same leading digit.
    DuplicateAlias { digit: char },
    /// An alias keyed by the country digit itself. A normalized stream starts
    /// with the country digit, so the rewrite would fire again on every pass.
    CountryAliased { digit: char },
    /// The international prefix must not contain digits.
    DigitInPrefix { prefix: String },
    /// The international cap must allow at least one digit.
    ZeroInternationalMax,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::MissingCountryDigit { template } => {
                write!(f, "template {template:?} has no country digit before its first slot")
            }
            PlanError::StrayTemplateDigit { template, digit } => {
                write!(f, "template {template:?} has a literal digit {digit:?} after the country digit")
            }
            PlanError::NoDigitSlots { template } => {
                write!(f, "template {template:?} has no '{SLOT}' slots")
            }
            PlanError::NotADigit { value } => write!(f, "{value:?} is not an ASCII digit"),
            PlanError::CountryNotDomestic { country } => {
                write!(f, "country digit {country:?} is not a domestic lead digit")
            }
            PlanError::UnaliasedLead { digit, country } => write!(
                f,
                "lead digit {digit:?} differs from country digit {country:?} and has no alias"
            ),
            PlanError::AliasTarget {
                digit,
                target,
                country,
            } => write!(
                f,
                "alias for {digit:?} rewrites to {target:?}, expected country digit {country:?}"
            ),
            PlanError::DuplicateAlias { digit } => write!(f, "duplicate alias for {digit:?}"),
            PlanError::CountryAliased { digit } => {
                write!(f, "country digit {digit:?} cannot have an alias")
            }
            PlanError::DigitInPrefix { prefix } => {
                write!(f, "international prefix {prefix:?} contains a digit")
            }
            PlanError::ZeroInternationalMax => f.write_str("international maximum must be > 0"),
        }
    }
}

impl std::error::Error for PlanError {}

/// One gated fragment of a domestic template: a literal followed by the
/// stream positions `start..end` it renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TemplateGroup {
    pub literal: String,
    pub start: usize,
    pub end: usize,
}

/// A parsed domestic template such as `+7(DDD) DDD-DD-DD`.
///
/// Everything up to and including the first literal digit (the country digit)
/// is emitted unconditionally. Each following literal is glued to the run of
/// slots after it and emitted as soon as the first of those slots has a digit.
/// A literal after the last slot is only emitted when every slot is filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DomesticTemplate {
    pub source: String,
    pub prefix: String,
    pub country: char,
    pub groups: Vec<TemplateGroup>,
    pub suffix: String,
    pub slots: usize,
    /// Every char the template inserts after the country digit.
    pub separators: Vec<char>,
}

impl DomesticTemplate {
    pub fn parse(template: &str) -> Result<Self, PlanError> {
        let mut prefix = String::new();
        let mut country = None;
        let mut groups = Vec::new();
        let mut literal = String::new();
        // Stream position 0 is the country digit.
        let mut pos = 1usize;

        let mut chars = template.chars().peekable();
        while let Some(ch) = chars.next() {
            if country.is_none() {
                if ch == SLOT {
                    return Err(PlanError::MissingCountryDigit {
                        template: template.to_string(),
                    });
                }
                prefix.push(ch);
                if ch.is_ascii_digit() {
                    country = Some(ch);
                }
                continue;
            }

            if ch == SLOT {
                let start = pos;
                pos += 1;
                while chars.next_if_eq(&SLOT).is_some() {
                    pos += 1;
                }
                groups.push(TemplateGroup {
                    literal: std::mem::take(&mut literal),
                    start,
                    end: pos,
                });
            } else if ch.is_ascii_digit() {
                return Err(PlanError::StrayTemplateDigit {
                    template: template.to_string(),
                    digit: ch,
                });
            } else {
                literal.push(ch);
            }
        }

        let Some(country) = country else {
            return Err(PlanError::MissingCountryDigit {
                template: template.to_string(),
            });
        };
        if groups.is_empty() {
            return Err(PlanError::NoDigitSlots {
                template: template.to_string(),
            });
        }

        let mut separators = Vec::new();
        for ch in groups
            .iter()
            .flat_map(|g| g.literal.chars())
            .chain(literal.chars())
        {
            if !separators.contains(&ch) {
                separators.push(ch);
            }
        }

        Ok(Self {
            source: template.to_string(),
            prefix,
            country,
            groups,
            suffix: literal,
            slots: pos - 1,
            separators,
        })
    }
}

/// A digit stream after alias rewriting, classification and truncation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    /// The digits that will be rendered.
    pub digits: String,
    pub class: NumberingClass,
    /// Digits inserted in front of the original stream (0 or 1). Caret
    /// intents computed against the original stream shift right by this much.
    pub shift: usize,
    /// Digits cut off the end to respect the class maximum.
    pub truncated: usize,
}

impl Normalized {
    /// Map a digit count against the pre-normalization stream onto this one.
    pub fn map_intent(&self, intent: usize) -> usize {
        if intent == 0 {
            return 0;
        }
        (intent + self.shift).min(self.digits.len())
    }
}

/// Value object describing one regional numbering convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberingPlan {
    lead_digits: Vec<char>,
    aliases: Vec<LeadingAlias>,
    template: DomesticTemplate,
    international_prefix: String,
    international_max: usize,
}

impl NumberingPlan {
    /// Build and validate a plan.
    pub fn new(
        lead_digits: &[char],
        aliases: &[LeadingAlias],
        template: &str,
        international_prefix: &str,
        international_max: usize,
    ) -> Result<Self, PlanError> {
        let template = DomesticTemplate::parse(template)?;
        let country = template.country;

        for &digit in lead_digits {
            if !digit.is_ascii_digit() {
                return Err(PlanError::NotADigit { value: digit });
            }
        }
        if !lead_digits.contains(&country) {
            return Err(PlanError::CountryNotDomestic { country });
        }

        for (i, alias) in aliases.iter().enumerate() {
            for value in [alias.digit, alias.target()] {
                if !value.is_ascii_digit() {
                    return Err(PlanError::NotADigit { value });
                }
            }
            if alias.digit == country {
                return Err(PlanError::CountryAliased { digit: alias.digit });
            }
            if alias.target() != country {
                return Err(PlanError::AliasTarget {
                    digit: alias.digit,
                    target: alias.target(),
                    country,
                });
            }
            if aliases[..i].iter().any(|a| a.digit == alias.digit) {
                return Err(PlanError::DuplicateAlias { digit: alias.digit });
            }
        }

        for &digit in lead_digits {
            if digit != country && !aliases.iter().any(|a| a.digit == digit) {
                return Err(PlanError::UnaliasedLead { digit, country });
            }
        }

        if international_prefix.chars().any(|c| c.is_ascii_digit()) {
            return Err(PlanError::DigitInPrefix {
                prefix: international_prefix.to_string(),
            });
        }
        if international_max == 0 {
            return Err(PlanError::ZeroInternationalMax);
        }

        Ok(Self {
            lead_digits: lead_digits.to_vec(),
            aliases: aliases.to_vec(),
            template,
            international_prefix: international_prefix.to_string(),
            international_max,
        })
    }

    /// `+7(DDD) DDD-DD-DD`, with a leading `9` expanded to `79` and a leading
    /// `8` rewritten to `7`.
    pub fn plus_seven() -> Self {
        builtin(
            &['7', '8', '9'],
            &[
                LeadingAlias::prepend('9', '7'),
                LeadingAlias::replace('8', '7'),
            ],
            "+7(DDD) DDD-DD-DD",
        )
    }

    /// `8 (DDD) DDD-DD-DD`: the trunk-prefix convention. A leading `7` is
    /// rewritten to `8` and a leading `9` expanded to `89`.
    pub fn trunk_eight() -> Self {
        builtin(
            &['7', '8', '9'],
            &[
                LeadingAlias::prepend('9', '8'),
                LeadingAlias::replace('7', '8'),
            ],
            "8 (DDD) DDD-DD-DD",
        )
    }

    /// Look up a built-in plan by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "plus7" | "plus-seven" => Some(Self::plus_seven()),
            "trunk8" | "trunk-eight" => Some(Self::trunk_eight()),
            _ => None,
        }
    }

    /// Names accepted by [`NumberingPlan::preset`].
    pub const PRESETS: [&'static str; 2] = ["plus7", "trunk8"];

    pub fn template(&self) -> &str {
        &self.template.source
    }

    pub fn country_digit(&self) -> char {
        self.template.country
    }

    pub fn lead_digits(&self) -> &[char] {
        &self.lead_digits
    }

    pub fn aliases(&self) -> &[LeadingAlias] {
        &self.aliases
    }

    pub fn international_prefix(&self) -> &str {
        &self.international_prefix
    }

    /// Chars the domestic template inserts between digit groups, in template
    /// order. The prefix up to the country digit is not included.
    pub fn separators(&self) -> &[char] {
        &self.template.separators
    }

    /// Returns `true` for a template-inserted separator.
    ///
    /// Separators carry no digit value; the edit policy steps over them
    /// instead of deleting them.
    #[inline]
    pub fn is_separator(&self, ch: char) -> bool {
        self.template.separators.contains(&ch)
    }

    /// Maximum stream length for `class`, counting the country digit.
    pub fn max_digits(&self, class: NumberingClass) -> usize {
        match class {
            NumberingClass::Domestic => 1 + self.template.slots,
            NumberingClass::International => self.international_max,
        }
    }

    /// Classify by the first digit of an already normalized stream.
    pub fn classify(&self, first: Option<char>) -> NumberingClass {
        match first {
            Some(d) if self.lead_digits.contains(&d) => NumberingClass::Domestic,
            _ => NumberingClass::International,
        }
    }

    /// Rewrite the leading digit, classify, and truncate.
    ///
    /// `digits` is expected to hold ASCII digits only; anything else is
    /// dropped.
    pub fn normalize(&self, digits: &str) -> Normalized {
        let mut out: String = digits.chars().filter(char::is_ascii_digit).collect();
        let mut shift = 0;

        if let Some(first) = out.chars().next()
            && let Some(alias) = self.aliases.iter().find(|a| a.digit == first)
        {
            match alias.rewrite {
                LeadRewrite::Prepend(d) => {
                    out.insert(0, d);
                    shift = 1;
                }
                LeadRewrite::Replace(d) => out.replace_range(..1, &d.to_string()),
            }
        }

        let class = self.classify(out.chars().next());
        let max = self.max_digits(class);
        let truncated = out.len().saturating_sub(max);
        out.truncate(max);

        Normalized {
            digits: out,
            class,
            shift,
            truncated,
        }
    }

    pub(crate) fn domestic_template(&self) -> &DomesticTemplate {
        &self.template
    }
}

impl Default for NumberingPlan {
    fn default() -> Self {
        Self::plus_seven()
    }
}

fn builtin(lead_digits: &[char], aliases: &[LeadingAlias], template: &str) -> NumberingPlan {
    NumberingPlan::new(lead_digits, aliases, template, "+", INTERNATIONAL_MAX_DIGITS)
        .unwrap_or_else(|err| panic!("built-in plan {template:?} is invalid: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_template_into_gated_groups() {
        let t = DomesticTemplate::parse("+7(DDD) DDD-DD-DD").unwrap();
        assert_eq!(t.prefix, "+7");
        assert_eq!(t.country, '7');
        assert_eq!(t.slots, 10);
        assert_eq!(t.suffix, "");
        let groups: Vec<_> = t
            .groups
            .iter()
            .map(|g| (g.literal.as_str(), g.start, g.end))
            .collect();
        assert_eq!(
            groups,
            vec![("(", 1, 4), (") ", 4, 7), ("-", 7, 9), ("-", 9, 11)]
        );
    }

    #[test]
    fn trailing_literal_becomes_suffix() {
        let t = DomesticTemplate::parse("+1 (DDD) DDD-DDDD.").unwrap();
        assert_eq!(t.suffix, ".");
        assert_eq!(t.slots, 10);
        assert_eq!(t.separators, vec![' ', '(', ')', '-', '.']);
    }

    #[test]
    fn separators_come_from_template_literals() {
        let plan = NumberingPlan::plus_seven();
        assert_eq!(plan.separators(), &['(', ')', ' ', '-']);
        assert!(!plan.is_separator('+'));
        assert!(!plan.is_separator('7'));

        let plan = NumberingPlan::new(&['1'], &[], "+1 DDD.DDD.DDDD", "+", 16).unwrap();
        assert_eq!(plan.separators(), &[' ', '.']);
        assert!(plan.is_separator('.'));
        assert!(!plan.is_separator('-'));
    }

    #[test]
    fn template_errors() {
        assert_eq!(
            DomesticTemplate::parse("(DDD)"),
            Err(PlanError::MissingCountryDigit {
                template: "(DDD)".into()
            })
        );
        assert_eq!(
            DomesticTemplate::parse("+7"),
            Err(PlanError::NoDigitSlots {
                template: "+7".into()
            })
        );
        assert_eq!(
            DomesticTemplate::parse("+7(DDD) 0DD"),
            Err(PlanError::StrayTemplateDigit {
                template: "+7(DDD) 0DD".into(),
                digit: '0'
            })
        );
    }

    #[test]
    fn presets_validate() {
        for name in NumberingPlan::PRESETS {
            assert!(NumberingPlan::preset(name).is_some(), "{name}");
        }
        assert_eq!(NumberingPlan::preset("nope"), None);
        assert_eq!(NumberingPlan::default(), NumberingPlan::plus_seven());
    }

    #[test]
    fn plan_validation_rejects_inconsistent_tables() {
        let err = NumberingPlan::new(&['7', '8'], &[], "+7(DDD)", "+", 16).unwrap_err();
        assert_eq!(
            err,
            PlanError::UnaliasedLead {
                digit: '8',
                country: '7'
            }
        );

        let err = NumberingPlan::new(
            &['7', '8'],
            &[LeadingAlias::replace('8', '1')],
            "+7(DDD)",
            "+",
            16,
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::AliasTarget { target: '1', .. }));

        let err = NumberingPlan::new(&['8'], &[], "+7(DDD)", "+", 16).unwrap_err();
        assert_eq!(err, PlanError::CountryNotDomestic { country: '7' });

        let err = NumberingPlan::new(&['7'], &[], "+7(DDD)", "00", 16).unwrap_err();
        assert!(matches!(err, PlanError::DigitInPrefix { .. }));

        let err = NumberingPlan::new(&['7'], &[], "+7(DDD)", "+", 0).unwrap_err();
        assert_eq!(err, PlanError::ZeroInternationalMax);

        let err = NumberingPlan::new(
            &['7'],
            &[LeadingAlias::prepend('9', '7'), LeadingAlias::replace('9', '7')],
            "+7(DDD)",
            "+",
            16,
        )
        .unwrap_err();
        assert_eq!(err, PlanError::DuplicateAlias { digit: '9' });
    }

    #[test]
    fn country_digit_cannot_be_aliased() {
        for alias in [LeadingAlias::prepend('7', '7'), LeadingAlias::replace('7', '7')] {
            let err = NumberingPlan::new(&['7'], &[alias], "+7(DDD) DDD-DD-DD", "+", 16)
                .unwrap_err();
            assert_eq!(err, PlanError::CountryAliased { digit: '7' });
        }
    }

    #[test]
    fn normalize_prepends_and_reports_shift() {
        let plan = NumberingPlan::plus_seven();
        let n = plan.normalize("999");
        assert_eq!(n.digits, "7999");
        assert_eq!(n.class, NumberingClass::Domestic);
        assert_eq!(n.shift, 1);
        assert_eq!(n.map_intent(0), 0);
        assert_eq!(n.map_intent(2), 3);
    }

    #[test]
    fn normalize_replaces_leading_eight() {
        let plan = NumberingPlan::plus_seven();
        let n = plan.normalize("8999");
        assert_eq!(n.digits, "7999");
        assert_eq!(n.shift, 0);

        let plan = NumberingPlan::trunk_eight();
        assert_eq!(plan.normalize("7999").digits, "8999");
        assert_eq!(plan.normalize("999").digits, "8999");
    }

    #[test]
    fn normalize_truncates_by_class() {
        let plan = NumberingPlan::plus_seven();
        let n = plan.normalize("799912345678899");
        assert_eq!(n.digits, "79991234567");
        assert_eq!(n.truncated, 4);

        let n = plan.normalize("12345678901234567890");
        assert_eq!(n.class, NumberingClass::International);
        assert_eq!(n.digits.len(), 16);
        assert_eq!(n.truncated, 4);
    }

    #[test]
    fn classification_follows_normalized_first_digit() {
        let plan = NumberingPlan::plus_seven();
        assert_eq!(plan.classify(Some('7')), NumberingClass::Domestic);
        assert_eq!(plan.classify(Some('4')), NumberingClass::International);
        assert_eq!(plan.classify(None), NumberingClass::International);
        assert_eq!(plan.max_digits(NumberingClass::Domestic), 11);
        assert_eq!(plan.max_digits(NumberingClass::International), 16);
    }
}
