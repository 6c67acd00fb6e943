//! Numbering plans from TOML.
//!
//! ```toml
//! lead_digits = ["7", "8", "9"]
//! template = "+7(DDD) DDD-DD-DD"
//! international_prefix = "+"
//! international_max = 16
//!
//! [[aliases]]
//! digit = "9"
//! prepend = "7"
//!
//! [[aliases]]
//! digit = "8"
//! replace = "7"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::plan::{INTERNATIONAL_MAX_DIGITS, LeadingAlias, NumberingPlan, PlanError};

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    /// An alias must set exactly one of `prepend` / `replace`.
    Alias { digit: char },
    Plan(PlanError),
    /// Neither a preset name nor a readable file.
    UnknownPlan { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read plan file {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "invalid plan file: {err}"),
            ConfigError::Alias { digit } => write!(
                f,
                "alias for {digit:?} must set exactly one of `prepend` or `replace`"
            ),
            ConfigError::Plan(err) => write!(f, "invalid numbering plan: {err}"),
            ConfigError::UnknownPlan { name } => write!(
                f,
                "unknown plan {name:?} (expected one of {} or a path to a .toml file)",
                NumberingPlan::PRESETS.join(", ")
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Plan(err) => Some(err),
            ConfigError::Alias { .. } | ConfigError::UnknownPlan { .. } => None,
        }
    }
}

impl From<PlanError> for ConfigError {
    fn from(err: PlanError) -> Self {
        ConfigError::Plan(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// On-disk shape of a [`NumberingPlan`].
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    #[serde(default = "default_lead_digits")]
    pub lead_digits: Vec<char>,
    #[serde(default)]
    pub aliases: Vec<AliasConfig>,
    pub template: String,
    #[serde(default = "default_international_prefix")]
    pub international_prefix: String,
    #[serde(default = "default_international_max")]
    pub international_max: usize,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    pub digit: char,
    #[serde(default)]
    pub prepend: Option<char>,
    #[serde(default)]
    pub replace: Option<char>,
}

impl AliasConfig {
    fn to_alias(&self) -> Result<LeadingAlias, ConfigError> {
        match (self.prepend, self.replace) {
            (Some(country), None) => Ok(LeadingAlias::prepend(self.digit, country)),
            (None, Some(country)) => Ok(LeadingAlias::replace(self.digit, country)),
            _ => Err(ConfigError::Alias { digit: self.digit }),
        }
    }
}

fn default_lead_digits() -> Vec<char> {
    vec!['7', '8', '9']
}

fn default_international_prefix() -> String {
    "+".to_string()
}

fn default_international_max() -> usize {
    INTERNATIONAL_MAX_DIGITS
}

impl PlanConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate and build the plan.
    pub fn into_plan(self) -> Result<NumberingPlan, ConfigError> {
        let aliases = self
            .aliases
            .iter()
            .map(AliasConfig::to_alias)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NumberingPlan::new(
            &self.lead_digits,
            &aliases,
            &self.template,
            &self.international_prefix,
            self.international_max,
        )?)
    }
}

/// Read and validate a plan file.
pub fn load_plan(path: &Path) -> Result<NumberingPlan, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let plan = PlanConfig::from_toml_str(&content)?.into_plan()?;
    log::debug!(
        target: "phonemask.config",
        "loaded plan {:?} from {}",
        plan.template(),
        path.display()
    );
    Ok(plan)
}

/// Resolve a preset name, falling back to a plan file path.
pub fn resolve_plan(name_or_path: &str) -> Result<NumberingPlan, ConfigError> {
    if let Some(plan) = NumberingPlan::preset(name_or_path) {
        return Ok(plan);
    }
    let path = Path::new(name_or_path);
    if !path.is_file() {
        return Err(ConfigError::UnknownPlan {
            name: name_or_path.to_string(),
        });
    }
    load_plan(path)
}
