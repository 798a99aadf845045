// src/dag/mod.rs

//! Dependency graph and schedule computation.
//!
//! - [`step`] defines the step records the core works on.
//! - [`graph`] builds forward adjacency and in-degree counts.
//! - [`schedule`] walks the graph in dependency order and assigns each
//!   step its earliest start time.
//! - [`validate`] checks steps before they are scheduled.

pub mod graph;
pub mod schedule;
pub mod step;
pub mod validate;

pub use graph::{DependencyGraph, build_graph};
pub use schedule::{Schedule, ScheduledStep, compute_schedule};
pub use step::{Step, StepName};
pub use validate::{check_steps, plan_schedule};
