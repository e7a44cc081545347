//! Runs every script in a directory through the interpreter.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::config::HarnessConfig;
use crate::errors::{HarnessError, HarnessResult};
use crate::report::{Outcome, Report, ScriptResult};

pub struct ScriptRunner {
    config: HarnessConfig,
}

impl ScriptRunner {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs all scripts in `dir`, writing one line per script and a summary
    /// line to `out` as results come in.
    ///
    /// A failing script never stops the run.
    pub fn run<W: Write + ?Sized>(&self, dir: &Path, out: &mut W) -> HarnessResult<Report> {
        let start = Instant::now();
        let scripts = self.collect_scripts(dir)?;
        tracing::debug!(dir = %dir.display(), count = scripts.len(), "Collected scripts");

        let mut results = Vec::with_capacity(scripts.len());
        for script in &scripts {
            let result = self.run_script(script);
            writeln!(out, "{result}")?;
            results.push(result);
        }

        let report = Report {
            results,
            elapsed: start.elapsed(),
        };
        writeln!(out, "{report}")?;
        out.flush()?;
        Ok(report)
    }

    /// Scripts with the configured extension, sorted by file name.
    pub fn collect_scripts(&self, dir: &Path) -> HarnessResult<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| HarnessError::read_dir(dir, e))?;

        let mut scripts = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| HarnessError::read_dir(dir, e))?.path();
            let matches = path
                .extension()
                .is_some_and(|ext| ext == self.config.extension.as_str());
            if matches && path.is_file() {
                scripts.push(path);
            }
        }
        scripts.sort();
        Ok(scripts)
    }

    /// Feeds `script` to the interpreter on stdin, discarding its stdout.
    pub fn run_script(&self, script: &Path) -> ScriptResult {
        let file_name = script
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| script.display().to_string());

        let start = Instant::now();
        let outcome = match self.spawn(script) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(script = %file_name, error = %e, "Failed to run script");
                Outcome::SpawnFailed(e.to_string())
            }
        };
        let elapsed = start.elapsed();

        tracing::debug!(script = %file_name, outcome = %outcome, ?elapsed, "Script finished");
        ScriptResult {
            file_name,
            outcome,
            elapsed,
        }
    }

    fn spawn(&self, script: &Path) -> std::io::Result<Outcome> {
        let input = File::open(script)?;
        let status = Command::new(&self.config.interpreter)
            .stdin(Stdio::from(input))
            .stdout(Stdio::null())
            .status()?;
        Ok(Outcome::from_status(status))
    }
}
