// src/dag/validate.rs

use std::collections::HashSet;

use tracing::debug;

use crate::dag::schedule::{Schedule, compute_schedule};
use crate::dag::step::Step;
use crate::errors::{PlannerError, Result, ValidationIssue};

/// Structural checks on typed steps, run before any graph is built.
///
/// Every problem is reported, not just the first one. Cycles are not looked
/// for here; they are a scheduling failure, detected by the traversal.
pub fn check_steps(steps: &[Step]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if steps.is_empty() {
        issues.push(ValidationIssue::NoSteps);
        return issues;
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(steps.len());
    for (i, step) in steps.iter().enumerate() {
        let index = i + 1;
        if step.name.trim().is_empty() {
            issues.push(ValidationIssue::MissingName { index });
            continue;
        }
        if !seen.insert(step.name.as_str()) {
            issues.push(ValidationIssue::DuplicateName {
                index,
                name: step.name.clone(),
            });
        }
    }

    let declared: HashSet<&str> = steps.iter().map(|s| s.name.as_str()).collect();
    for step in steps {
        for dep in step.dependencies.iter() {
            if !declared.contains(dep.as_str()) {
                issues.push(ValidationIssue::UnknownDependency {
                    step: step.name.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }

    issues
}

/// Validate `steps` and compute their schedule.
///
/// This is the entry point for callers holding unvalidated steps:
/// input problems come back as [`PlannerError::InputValidation`], scheduling
/// problems as [`PlannerError::CycleOrMissingDependency`].
pub fn plan_schedule(steps: &[Step]) -> Result<Schedule> {
    let issues = check_steps(steps);
    if !issues.is_empty() {
        debug!(count = issues.len(), "rejecting steps that failed validation");
        return Err(PlannerError::InputValidation(issues));
    }
    compute_schedule(steps)
}
