//! Per-script outcomes and the run summary.

use std::fmt;
use std::process::ExitStatus;
use std::time::Duration;

/// How a single script run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The interpreter exited with status 0.
    Accepted,
    /// The interpreter exited with a non-zero status code.
    Exited(i32),
    /// The interpreter was killed by a signal.
    Signaled(i32),
    /// The interpreter could not be started, or the script could not be opened.
    SpawnFailed(String),
}

impl Outcome {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => Outcome::Accepted,
            Some(code) => Outcome::Exited(code),
            None => match terminating_signal(status) {
                Some(signal) => Outcome::Signaled(signal),
                None => Outcome::Exited(-1),
            },
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: ExitStatus) -> Option<i32> {
    None
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted => write!(f, "accepted"),
            Outcome::Exited(code) => write!(f, "error({code})"),
            Outcome::Signaled(signal) => write!(f, "signal({signal})"),
            Outcome::SpawnFailed(_) => write!(f, "spawn-failed"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScriptResult {
    pub file_name: String,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl fmt::Display for ScriptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.3}s\t{}",
            self.outcome,
            self.elapsed.as_secs_f64(),
            self.file_name
        )
    }
}

/// Results of one harness run, in the order the scripts were executed.
#[derive(Clone, Debug, Default)]
pub struct Report {
    pub results: Vec<ScriptResult>,
    pub elapsed: Duration,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome.is_accepted())
            .count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// The summary line, e.g. `3/4 passed\t0.120s`.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} passed\t{:.3}s",
            self.passed(),
            self.total(),
            self.elapsed.as_secs_f64()
        )
    }
}
