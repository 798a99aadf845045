// src/config/mod.rs

//! Plan file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate steps and convert them for the scheduler (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_plan_path, load_and_validate, load_from_path, parse_and_validate, parse_str};
pub use model::{
    PlanFile, PlanSection, RawCpuBound, RawDependencies, RawDuration, RawName, RawPlanFile,
    RawStep,
};
pub use validate::validate_plan;
