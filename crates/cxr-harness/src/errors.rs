//! Error types for the script harness.
//!
//! Individual script failures are not errors; they are reported as
//! [`Outcome`](crate::Outcome)s. Only problems that stop the whole run land here.

use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From};

pub type HarnessResult<T> = Result<T, HarnessError>;

#[derive(Debug, Display, Error, From)]
pub enum HarnessError {
    #[display("Cannot read script directory {}: {source}", path.display())]
    #[from(ignore)]
    ReadDir { path: PathBuf, source: io::Error },

    #[display("I/O error while reporting: {_0}")]
    Io(io::Error),
}

impl HarnessError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HarnessError::ReadDir {
            path: path.into(),
            source,
        }
    }
}
