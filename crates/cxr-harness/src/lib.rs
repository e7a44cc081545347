//! Script test harness.
//!
//! Runs an interpreter binary once per script file in a directory, classifies
//! each run by its exit status, and prints a line per script followed by a
//! pass-count summary.

pub mod config;
pub mod errors;
pub mod report;
pub mod runner;

pub use config::HarnessConfig;
pub use errors::{HarnessError, HarnessResult};
pub use report::{Outcome, Report, ScriptResult};
pub use runner::ScriptRunner;
