// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

use crate::dag::StepName;

/// A single problem with the submitted steps.
///
/// Indices are 1-based positions in the submitted list, matching how a user
/// counts steps in a plan file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("No steps provided.")]
    NoSteps,

    #[error("Step {index} is missing a valid name.")]
    MissingName { index: usize },

    #[error("Step {index} has an invalid duration value.")]
    InvalidDuration { index: usize, value: String },

    #[error("Step {index} is missing CPU-bound information.")]
    MissingCpuBound { index: usize },

    #[error("Step {index} reuses the name '{name}'.")]
    DuplicateName { index: usize, name: StepName },

    #[error("Step {index} has an invalid dependency list.")]
    InvalidDependencies { index: usize },

    #[error("Dependency '{dependency}' of step '{step}' does not exist.")]
    UnknownDependency { step: StepName, dependency: StepName },
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid input: {}", join_issues(.0))]
    InputValidation(Vec<ValidationIssue>),

    #[error("Cycle or missing dependency: {}", describe_unscheduled(.unscheduled, .cycles, .missing))]
    CycleOrMissingDependency {
        /// Steps that never became schedulable, in input order.
        unscheduled: Vec<StepName>,
        /// Dependency cycles among the unscheduled steps.
        cycles: Vec<Vec<StepName>>,
        /// Dependency names that no step declares.
        missing: Vec<StepName>,
    },

    #[error("Timed out after {millis} ms")]
    Timeout { millis: u128 },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlannerError {
    /// Validation problems carried by this error, if any.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            PlannerError::InputValidation(issues) => issues,
            _ => &[],
        }
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_unscheduled(
    unscheduled: &[StepName],
    cycles: &[Vec<StepName>],
    missing: &[StepName],
) -> String {
    let mut msg = format!(
        "{} step(s) could not be scheduled: {}",
        unscheduled.len(),
        unscheduled.join(", ")
    );
    for cycle in cycles {
        msg.push_str(&format!("; cycle among {}", cycle.join(" <-> ")));
    }
    if !missing.is_empty() {
        msg.push_str(&format!("; undeclared dependencies: {}", missing.join(", ")));
    }
    msg
}

pub type Result<T> = std::result::Result<T, PlannerError>;
