// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, info};

use crate::cli::CliArgs;
use crate::config::{PlanFile, default_plan_path, load_and_validate};
use crate::dag::{Schedule, compute_schedule};
use crate::errors::PlannerError;

/// Result of scheduling one plan file.
#[derive(Debug)]
pub struct PlanOutcome {
    pub path: PathBuf,
    pub result: errors::Result<(PlanFile, Schedule)>,
}

/// High-level entry point used by `main.rs`.
///
/// Every plan file is an independent request: it is loaded, validated and
/// scheduled on its own, and a failure in one file does not affect the
/// others. Reports go to stdout, errors to stderr.
///
/// With no plan paths, [`default_plan_path`] is used.
pub async fn run(args: CliArgs) -> Result<()> {
    let mut paths: Vec<PathBuf> = args.plans.iter().map(PathBuf::from).collect();
    if paths.is_empty() {
        paths.push(default_plan_path());
    }

    if args.dry_run {
        return dry_run(&paths);
    }

    let timeout = args.timeout_ms.map(Duration::from_millis);
    let outcomes = schedule_files(paths, timeout).await;
    let total = outcomes.len();
    let show_headers = total > 1;

    let mut failures = 0usize;
    for outcome in outcomes.iter() {
        if show_headers {
            println!("== {} ==", outcome.path.display());
        }
        match &outcome.result {
            Ok((plan, schedule)) => {
                print!("{}", report::render_schedule(schedule, &plan.config.time_unit));
            }
            Err(err) => {
                failures += 1;
                error!(path = %outcome.path.display(), error = %err, "plan failed");
                eprint!("{}", report::render_error(err));
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {total} plan(s) could not be scheduled");
    }
    Ok(())
}

/// Schedule several plan files concurrently.
///
/// Each file runs on the blocking pool; outcomes come back in the order the
/// paths were given. `timeout` applies to each file separately.
pub async fn schedule_files(paths: Vec<PathBuf>, timeout: Option<Duration>) -> Vec<PlanOutcome> {
    let mut set = JoinSet::new();
    for (idx, path) in paths.into_iter().enumerate() {
        set.spawn(async move {
            let result = schedule_one(path.clone(), timeout).await;
            (idx, PlanOutcome { path, result })
        });
    }

    let mut outcomes = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(pair) => outcomes.push(pair),
            Err(e) => error!(error = %e, "plan task did not complete"),
        }
    }
    outcomes.sort_by_key(|(idx, _)| *idx);

    info!(plans = outcomes.len(), "all plans processed");
    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}

async fn schedule_one(path: PathBuf, timeout: Option<Duration>) -> errors::Result<(PlanFile, Schedule)> {
    let work = tokio::task::spawn_blocking(move || schedule_path(&path));
    join_with_timeout(work, timeout).await
}

/// Wait for a blocking scheduling task, giving up after `timeout`.
///
/// Running out of time is reported as [`PlannerError::Timeout`]; a task that
/// panicked or was cancelled as [`PlannerError::Internal`].
pub async fn join_with_timeout<T>(
    work: JoinHandle<errors::Result<T>>,
    timeout: Option<Duration>,
) -> errors::Result<T> {
    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, work)
            .await
            .map_err(|_| PlannerError::Timeout {
                millis: limit.as_millis(),
            })?,
        None => work.await,
    };

    joined.map_err(|e| PlannerError::Internal(format!("scheduling task failed: {e}")))?
}

/// Load, validate and schedule a single plan file synchronously.
pub fn schedule_path(path: &Path) -> errors::Result<(PlanFile, Schedule)> {
    let plan = load_and_validate(path)?;
    debug!(path = %path.display(), steps = plan.steps.len(), "plan validated");
    let schedule = compute_schedule(&plan.steps)?;
    Ok((plan, schedule))
}

fn dry_run(paths: &[PathBuf]) -> Result<()> {
    let mut failures = 0usize;
    for path in paths {
        match load_and_validate(path) {
            Ok(plan) => print!("{}", report::render_dry_run(&plan)),
            Err(err) => {
                failures += 1;
                eprint!("{}", report::render_error(&err));
            }
        }
    }

    debug!("dry-run complete (no scheduling)");
    if failures > 0 {
        bail!("{failures} of {} plan(s) failed validation", paths.len());
    }
    Ok(())
}
