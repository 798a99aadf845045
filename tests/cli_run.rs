// tests/cli_run.rs

mod common;

use stepplan::cli::CliArgs;
use stepplan::run;

use common::{CHAIN_PLAN, CYCLE_PLAN, init_tracing, write_plan};

fn args_for(plans: Vec<String>, dry_run: bool) -> CliArgs {
    CliArgs {
        plans,
        timeout_ms: None,
        log_level: None,
        dry_run,
    }
}

fn path_of(file: &tempfile::NamedTempFile) -> String {
    file.path().display().to_string()
}

#[tokio::test]
async fn run_succeeds_for_a_valid_plan() {
    init_tracing();
    let good = write_plan(CHAIN_PLAN);

    let result = run(args_for(vec![path_of(&good)], false)).await;

    assert!(result.is_ok(), "expected Ok, got {:?}", result);
}

#[tokio::test]
async fn run_fails_when_any_plan_cannot_be_scheduled() {
    init_tracing();
    let good = write_plan(CHAIN_PLAN);
    let cyclic = write_plan(CYCLE_PLAN);

    let err = run(args_for(vec![path_of(&good), path_of(&cyclic)], false))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "1 of 2 plan(s) could not be scheduled");
}

#[tokio::test]
async fn run_with_timeout_still_schedules_small_plans() {
    let good = write_plan(CHAIN_PLAN);
    let mut args = args_for(vec![path_of(&good)], false);
    args.timeout_ms = Some(30_000);

    assert!(run(args).await.is_ok());
}

#[tokio::test]
async fn dry_run_of_valid_plan_succeeds() {
    let good = write_plan(CHAIN_PLAN);

    assert!(run(args_for(vec![path_of(&good)], true)).await.is_ok());
}

#[tokio::test]
async fn dry_run_does_not_schedule_cyclic_plans() {
    // Cycles pass input validation; only scheduling rejects them.
    let cyclic = write_plan(CYCLE_PLAN);

    assert!(run(args_for(vec![path_of(&cyclic)], true)).await.is_ok());
}

#[tokio::test]
async fn dry_run_fails_on_invalid_plan() {
    let good = write_plan(CHAIN_PLAN);
    let invalid = write_plan("[[step]]\nname = \"A\"\nduration = \"soon\"\ncpu_bound = true\n");

    let err = run(args_for(vec![path_of(&good), path_of(&invalid)], true))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "1 of 2 plan(s) failed validation");
}
