use std::path::PathBuf;

/// Interpreter used when none is configured, relative to the working directory.
pub const DEFAULT_INTERPRETER: &str = "../bin/main";

/// Extension (without the dot) of the scripts the harness picks up.
pub const DEFAULT_EXTENSION: &str = "scm";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Interpreter binary; each script is fed to it on standard input.
    pub interpreter: PathBuf,
    pub extension: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}
