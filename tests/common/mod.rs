#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use stepplan_test_utils::init_tracing;

/// Write plan TOML to a temporary file that lives as long as the handle.
pub fn write_plan(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

pub const CHAIN_PLAN: &str = r#"
[[step]]
name = "A"
duration = 10
cpu_bound = true

[[step]]
name = "B"
duration = 5
cpu_bound = false
dependencies = ["A"]
"#;

pub const CYCLE_PLAN: &str = r#"
[[step]]
name = "A"
duration = 1
cpu_bound = false
dependencies = ["B"]

[[step]]
name = "B"
duration = 1
cpu_bound = false
dependencies = ["A"]
"#;
