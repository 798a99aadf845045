// src/dag/step.rs

//! Step records handed to the scheduling core.

/// Step names are plain strings; they are the identity of a step.
pub type StepName = String;

/// A single unit of work in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: StepName,
    /// Time units needed once the step has started.
    pub duration: u64,
    /// Metadata only. Carried through to reports, never used for timing.
    pub cpu_bound: bool,
    /// Steps that must finish before this one may start.
    pub dependencies: Vec<StepName>,
}

impl Step {
    pub fn new(name: impl Into<StepName>, duration: u64) -> Self {
        Self {
            name: name.into(),
            duration,
            cpu_bound: false,
            dependencies: Vec::new(),
        }
    }

    pub fn cpu_bound(mut self, cpu_bound: bool) -> Self {
        self.cpu_bound = cpu_bound;
        self
    }

    pub fn after(mut self, dep: impl Into<StepName>) -> Self {
        self.dependencies.push(dep.into());
        self
    }
}
