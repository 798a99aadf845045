// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;

/// Load a plan file from a given path and return the raw `RawPlanFile`.
///
/// This only performs TOML deserialization; it does **not** check the steps.
/// Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read plan file");
    parse_str(&contents)
}

/// Deserialize plan TOML held in memory.
pub fn parse_str(contents: &str) -> Result<RawPlanFile> {
    let plan: RawPlanFile = toml::from_str(contents)?;
    Ok(plan)
}

/// Load a plan file from path and validate its steps.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults for `[config]`.
/// - Checks every step for a name, a non-negative duration and a cpu flag,
///   then checks for duplicate names and unknown dependencies.
///
/// Cycles are *not* detected here; they surface when the schedule is
/// computed.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw = load_from_path(&path)?;
    PlanFile::try_from(raw)
}

/// In-memory counterpart of [`load_and_validate`].
pub fn parse_and_validate(contents: &str) -> Result<PlanFile> {
    let raw = parse_str(contents)?;
    PlanFile::try_from(raw)
}

/// Plan file used when none is given on the command line.
pub fn default_plan_path() -> PathBuf {
    PathBuf::from("Stepplan.toml")
}
