// src/dag/schedule.rs

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, info, warn};

use crate::dag::graph::build_graph;
use crate::dag::step::{Step, StepName};
use crate::errors::{PlannerError, Result};

/// One step's place in a computed schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledStep {
    pub name: StepName,
    pub start: u64,
    pub end: u64,
    pub cpu_bound: bool,
}

/// Earliest-start schedule for a set of steps.
///
/// `entries` are kept in processing order: the order in which the traversal
/// dequeued the steps. That order is fully determined by the input order, so
/// identical input always produces an identical schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduledStep>,
    /// Step name -> position in `entries`.
    index: HashMap<StepName, usize>,
    total_duration: u64,
}

impl Schedule {
    /// Earliest start time of `name`, if it is part of the schedule.
    pub fn start_time(&self, name: &str) -> Option<u64> {
        self.entry(name).map(|e| e.start)
    }

    /// End time (start + duration) of `name`.
    pub fn end_time(&self, name: &str) -> Option<u64> {
        self.entry(name).map(|e| e.end)
    }

    pub fn entry(&self, name: &str) -> Option<&ScheduledStep> {
        self.index.get(name).and_then(|&i| self.entries.get(i))
    }

    /// Step name -> start time.
    pub fn start_times(&self) -> HashMap<StepName, u64> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), e.start))
            .collect()
    }

    /// Makespan: the latest end time across all steps, 0 when empty.
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    /// Entries in processing order.
    pub fn entries(&self) -> &[ScheduledStep] {
        &self.entries
    }

    /// Entries ordered by start time; ties keep processing order.
    pub fn by_start_time(&self) -> Vec<&ScheduledStep> {
        let mut sorted: Vec<&ScheduledStep> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.start);
        sorted
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_parts(self) -> (HashMap<StepName, u64>, u64) {
        let start_times = self.start_times();
        (start_times, self.total_duration)
    }
}

/// Compute the earliest start time of every step.
///
/// This is Kahn's topological sort carrying a start time with each queued
/// step. Ready steps are processed first-in-first-out, seeded in input order,
/// which makes the result deterministic.
///
/// A step's start is the latest end time among *all* of its dependencies,
/// evaluated once its last dependency has been processed.
///
/// Steps that never become ready (because of a cycle or a dependency that no
/// step declares) make the whole computation fail with
/// [`PlannerError::CycleOrMissingDependency`]; no partial schedule is
/// returned.
pub fn compute_schedule(steps: &[Step]) -> Result<Schedule> {
    let graph = build_graph(steps);
    let mut remaining: HashMap<&str, usize> = graph
        .in_degree()
        .iter()
        .map(|(name, count)| (name.as_str(), *count))
        .collect();

    // Later declarations win, matching the in-degree map.
    let by_name: HashMap<&str, &Step> = steps.iter().map(|s| (s.name.as_str(), s)).collect();

    let mut queue: VecDeque<(&str, u64)> = VecDeque::new();
    let mut seeded: HashSet<&str> = HashSet::new();
    for step in steps {
        let name = step.name.as_str();
        if graph.in_degree_of(name) == 0 && seeded.insert(name) {
            queue.push_back((name, 0));
        }
    }

    let mut end_times: HashMap<&str, u64> = HashMap::with_capacity(steps.len());
    let mut entries: Vec<ScheduledStep> = Vec::with_capacity(steps.len());

    while let Some((current, start)) = queue.pop_front() {
        let step = by_name.get(current).ok_or_else(|| {
            PlannerError::Internal(format!("step '{current}' was queued but never declared"))
        })?;

        let end = start.checked_add(step.duration).ok_or_else(|| {
            PlannerError::Internal(format!(
                "end time of step '{current}' overflows (start {start}, duration {})",
                step.duration
            ))
        })?;

        debug!(step = %current, start, end, cpu_bound = step.cpu_bound, "step scheduled");
        end_times.insert(current, end);
        entries.push(ScheduledStep {
            name: current.to_string(),
            start,
            end,
            cpu_bound: step.cpu_bound,
        });

        for dependent in graph.dependents_of(current) {
            let Some(count) = remaining.get_mut(dependent.as_str()) else {
                // Only reachable for undeclared names, which have no in-degree.
                continue;
            };
            *count = count.checked_sub(1).ok_or_else(|| {
                PlannerError::Internal(format!(
                    "in-degree of step '{dependent}' dropped below zero"
                ))
            })?;

            if *count == 0 {
                let next_start = earliest_start(by_name.get(dependent.as_str()), &end_times)?;
                queue.push_back((dependent.as_str(), next_start));
            }
        }
    }

    let unscheduled: Vec<StepName> = steps
        .iter()
        .filter(|s| !end_times.contains_key(s.name.as_str()))
        .map(|s| s.name.clone())
        .collect();

    if !unscheduled.is_empty() {
        let cycles = graph.cycles_among(unscheduled.iter().map(|s| s.as_str()));
        let missing = graph.undeclared_dependencies();
        warn!(
            unscheduled = ?unscheduled,
            cycles = ?cycles,
            missing = ?missing,
            "schedule incomplete; some steps never became ready"
        );
        return Err(PlannerError::CycleOrMissingDependency {
            unscheduled,
            cycles,
            missing,
        });
    }

    let total_duration = end_times.values().copied().max().unwrap_or(0);
    info!(steps = entries.len(), total_duration, "schedule computed");

    let index = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.name.clone(), i))
        .collect();

    Ok(Schedule {
        entries,
        index,
        total_duration,
    })
}

/// Latest end time across all dependencies of `step`.
fn earliest_start(step: Option<&&Step>, end_times: &HashMap<&str, u64>) -> Result<u64> {
    let step = step.ok_or_else(|| {
        PlannerError::Internal("dependent step is not declared".to_string())
    })?;

    let mut start = 0;
    for dep in step.dependencies.iter() {
        let end = end_times.get(dep.as_str()).ok_or_else(|| {
            PlannerError::Internal(format!(
                "step '{}' became ready before dependency '{dep}' finished",
                step.name
            ))
        })?;
        start = start.max(*end);
    }
    Ok(start)
}
