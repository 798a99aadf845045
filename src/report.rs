// src/report.rs

//! Plain-text rendering of schedules, dry runs and errors.
//!
//! Everything here returns a `String`; printing is left to the caller so the
//! output can be asserted on in tests.

use std::fmt::Write;

use crate::config::PlanFile;
use crate::dag::Schedule;
use crate::errors::PlannerError;

/// Render a computed schedule as a table, ordered by start time.
pub fn render_schedule(schedule: &Schedule, time_unit: &str) -> String {
    let rows = schedule.by_start_time();
    let width = rows
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("step".len());

    let mut out = String::new();
    let _ = writeln!(out, "Schedule");
    let _ = writeln!(out, "  {:<width$}  {:>8}  {:>8}  cpu", "step", "start", "end");
    for entry in rows {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>8}  {:>8}  {}",
            entry.name,
            entry.start,
            entry.end,
            yes_no(entry.cpu_bound)
        );
    }
    let _ = writeln!(out, "Total Duration: {} {}", schedule.total_duration(), time_unit);
    out
}

/// Describe a validated plan without scheduling it.
pub fn render_dry_run(plan: &PlanFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "stepplan dry-run");
    let _ = writeln!(out, "  config.time_unit = {}", plan.config.time_unit);
    let _ = writeln!(out);
    let _ = writeln!(out, "steps ({}):", plan.steps.len());
    for step in plan.steps.iter() {
        let _ = writeln!(out, "  - {}", step.name);
        let _ = writeln!(out, "      duration: {}", step.duration);
        let _ = writeln!(out, "      cpu_bound: {}", yes_no(step.cpu_bound));
        if !step.dependencies.is_empty() {
            let _ = writeln!(out, "      dependencies: {:?}", step.dependencies);
        }
    }
    out
}

/// Human-readable error text. Validation issues get one line each.
pub fn render_error(err: &PlannerError) -> String {
    match err {
        PlannerError::InputValidation(issues) => {
            let mut out = String::new();
            for issue in issues {
                let _ = writeln!(out, "Error: {issue}");
            }
            out
        }
        PlannerError::Internal(_) | PlannerError::Other(_) => {
            "An unexpected error occurred while computing the schedule.\n".to_string()
        }
        other => format!("Error: {other}\n"),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
