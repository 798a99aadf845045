// src/config/validate.rs

use crate::config::model::{PlanFile, RawPlanFile, RawStep};
use crate::dag::{Step, check_steps};
use crate::errors::{PlannerError, Result, ValidationIssue};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = crate::errors::PlannerError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        let steps = validate_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw.config, steps))
    }
}

/// Turn raw steps into typed [`Step`]s, collecting every problem found.
///
/// Field problems (duration, cpu flag) and structural problems (names,
/// unknown dependencies) are reported together, ordered by step index.
pub fn validate_plan(raw: &RawPlanFile) -> Result<Vec<Step>> {
    if raw.step.is_empty() {
        return Err(PlannerError::InputValidation(vec![ValidationIssue::NoSteps]));
    }

    let mut issues = Vec::new();
    let mut steps = Vec::with_capacity(raw.step.len());

    for (i, raw_step) in raw.step.iter().enumerate() {
        steps.push(convert_step(i + 1, raw_step, &mut issues));
    }

    issues.extend(check_steps(&steps));

    if issues.is_empty() {
        Ok(steps)
    } else {
        issues.sort_by_key(|issue| issue_index(issue).unwrap_or(usize::MAX));
        Err(PlannerError::InputValidation(issues))
    }
}

/// Convert one raw step. Invalid fields get placeholder values and an issue;
/// the result is only used if no issue was recorded.
fn convert_step(index: usize, raw: &RawStep, issues: &mut Vec<ValidationIssue>) -> Step {
    let name = raw
        .name
        .as_ref()
        .and_then(|n| n.text())
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let duration = match raw.duration.as_ref() {
        Some(d) => d.units().unwrap_or_else(|| {
            issues.push(ValidationIssue::InvalidDuration {
                index,
                value: d.as_written(),
            });
            0
        }),
        None => {
            issues.push(ValidationIssue::InvalidDuration {
                index,
                value: String::new(),
            });
            0
        }
    };

    let cpu_bound = match raw.cpu_bound.as_ref().and_then(|c| c.flag()) {
        Some(flag) => flag,
        None => {
            issues.push(ValidationIssue::MissingCpuBound { index });
            false
        }
    };

    let dependencies = raw.dependencies.names().unwrap_or_else(|| {
        issues.push(ValidationIssue::InvalidDependencies { index });
        Vec::new()
    });

    Step {
        name,
        duration,
        cpu_bound,
        dependencies,
    }
}

fn issue_index(issue: &ValidationIssue) -> Option<usize> {
    match issue {
        ValidationIssue::MissingName { index }
        | ValidationIssue::InvalidDuration { index, .. }
        | ValidationIssue::MissingCpuBound { index }
        | ValidationIssue::InvalidDependencies { index }
        | ValidationIssue::DuplicateName { index, .. } => Some(*index),
        ValidationIssue::NoSteps | ValidationIssue::UnknownDependency { .. } => None,
    }
}
