#![allow(dead_code)]

use stepplan::config::{
    PlanFile, PlanSection, RawCpuBound, RawDependencies, RawDuration, RawName, RawPlanFile, RawStep,
};
use stepplan::dag::Step;

/// Builder for a list of typed [`Step`]s, kept in insertion order.
#[derive(Default)]
pub struct StepsBuilder {
    steps: Vec<Step>,
}

impl StepsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Shorthand: a non-cpu-bound step with the given dependencies.
    pub fn with(mut self, name: &str, duration: u64, deps: &[&str]) -> Self {
        let mut step = Step::new(name, duration);
        for dep in deps {
            step = step.after(*dep);
        }
        self.steps.push(step);
        self
    }

    pub fn build(self) -> Vec<Step> {
        self.steps
    }
}

/// Builder for `RawPlanFile` / `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile {
                config: PlanSection::default(),
                step: Vec::new(),
            },
        }
    }

    pub fn time_unit(mut self, unit: &str) -> Self {
        self.plan.config.time_unit = unit.to_string();
        self
    }

    pub fn with_step(mut self, step: RawStep) -> Self {
        self.plan.step.push(step);
        self
    }

    pub fn build_raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RawStep`. Starts with a name, duration 0 and `cpu_bound = false`.
pub struct RawStepBuilder {
    step: RawStep,
}

impl RawStepBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            step: RawStep {
                name: Some(RawName::Text(name.to_string())),
                duration: Some(RawDuration::Units(0)),
                cpu_bound: Some(RawCpuBound::Flag(false)),
                dependencies: RawDependencies::default(),
            },
        }
    }

    pub fn duration(mut self, units: i64) -> Self {
        self.step.duration = Some(RawDuration::Units(units));
        self
    }

    pub fn duration_text(mut self, text: &str) -> Self {
        self.step.duration = Some(RawDuration::Text(text.to_string()));
        self
    }

    pub fn cpu_bound(mut self, flag: bool) -> Self {
        self.step.cpu_bound = Some(RawCpuBound::Flag(flag));
        self
    }

    pub fn without_cpu_bound(mut self) -> Self {
        self.step.cpu_bound = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.step.name = None;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        match &mut self.step.dependencies {
            RawDependencies::List(items) => items.push(dep.to_string()),
            RawDependencies::Delimited(text) => {
                text.push_str(", ");
                text.push_str(dep);
            }
            RawDependencies::Other(_) => {
                self.step.dependencies = RawDependencies::List(vec![dep.to_string()]);
            }
        }
        self
    }

    pub fn build(self) -> RawStep {
        self.step
    }
}
