// src/config/model.rs

use serde::Deserialize;

use crate::dag::Step;

/// Plan file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// time_unit = "minutes"
///
/// [[step]]
/// name = "Boil water"
/// duration = 10
/// cpu_bound = true
///
/// [[step]]
/// name = "Cook pasta"
/// duration = "8"
/// cpu_bound = "no"
/// dependencies = "Boil water"
/// ```
///
/// Step fields are loosely typed on purpose: a plan written by hand (or
/// converted from a form) may carry durations as strings or dependency lists
/// as comma-separated text. Validation turns this into [`PlanFile`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPlanFile {
    #[serde(default)]
    pub config: PlanSection,

    /// All `[[step]]` entries, in file order.
    #[serde(default)]
    pub step: Vec<RawStep>,
}

/// `[config]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanSection {
    /// Label for durations in reports. Purely cosmetic.
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
}

fn default_time_unit() -> String {
    "minutes".to_string()
}

impl Default for PlanSection {
    fn default() -> Self {
        Self {
            time_unit: default_time_unit(),
        }
    }
}

/// One `[[step]]` entry.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawStep {
    #[serde(default)]
    pub name: Option<RawName>,

    #[serde(default)]
    pub duration: Option<RawDuration>,

    #[serde(default)]
    pub cpu_bound: Option<RawCpuBound>,

    /// Names of steps that must finish first. `after` is accepted as well.
    #[serde(default, alias = "after")]
    pub dependencies: RawDependencies,
}

/// `name = "Boil water"`. Anything that is not a string counts as missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawName {
    Text(String),
    Other(toml::Value),
}

impl RawName {
    pub fn text(&self) -> Option<&str> {
        match self {
            RawName::Text(s) => Some(s),
            RawName::Other(_) => None,
        }
    }
}

/// `duration = 10` or `duration = "10"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Units(i64),
    Text(String),
    Other(toml::Value),
}

impl RawDuration {
    /// Non-negative whole number of time units, if the value is one.
    pub fn units(&self) -> Option<u64> {
        match self {
            RawDuration::Units(n) => u64::try_from(*n).ok(),
            RawDuration::Text(s) => {
                let s = s.trim();
                if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
                    s.parse().ok()
                } else {
                    None
                }
            }
            RawDuration::Other(_) => None,
        }
    }

    /// Value as written, for error messages.
    pub fn as_written(&self) -> String {
        match self {
            RawDuration::Units(n) => n.to_string(),
            RawDuration::Text(s) => s.clone(),
            RawDuration::Other(v) => v.to_string(),
        }
    }
}

/// `cpu_bound = true` or `cpu_bound = "yes"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCpuBound {
    Flag(bool),
    Text(String),
    Other(toml::Value),
}

impl RawCpuBound {
    pub fn flag(&self) -> Option<bool> {
        match self {
            RawCpuBound::Flag(b) => Some(*b),
            RawCpuBound::Text(s) => match s.trim().to_lowercase().as_str() {
                "yes" | "true" => Some(true),
                "no" | "false" => Some(false),
                _ => None,
            },
            RawCpuBound::Other(_) => None,
        }
    }
}

/// `dependencies = ["A", "B"]` or `dependencies = "A, B"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDependencies {
    List(Vec<String>),
    Delimited(String),
    Other(toml::Value),
}

impl Default for RawDependencies {
    fn default() -> Self {
        RawDependencies::List(Vec::new())
    }
}

impl RawDependencies {
    /// Clean dependency names: trimmed, blanks dropped, order kept.
    ///
    /// `None` when the value is neither a list of strings nor a string.
    pub fn names(&self) -> Option<Vec<String>> {
        let parts: Vec<&str> = match self {
            RawDependencies::List(items) => items.iter().map(|s| s.as_str()).collect(),
            RawDependencies::Delimited(text) => text.split(',').collect(),
            RawDependencies::Other(_) => return None,
        };
        Some(
            parts
                .into_iter()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// A validated plan: typed steps, ready for scheduling.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub config: PlanSection,
    pub steps: Vec<Step>,
}

impl PlanFile {
    /// Build without validation. Prefer `PlanFile::try_from(raw)`.
    pub fn new_unchecked(config: PlanSection, steps: Vec<Step>) -> Self {
        Self { config, steps }
    }
}
