//! Error types for accessor generation.

use derive_more::{Display, Error, From};

pub type GenerateResult<T> = Result<T, GenerateError>;

#[derive(Debug, Display, Error, From)]
pub enum GenerateError {
    /// The requested depth cannot describe a sequence length.
    #[display("Invalid argument: depth must be non-negative, got {depth}")]
    InvalidArgument { depth: i64 },

    #[display("I/O error while writing fragments: {_0}")]
    #[from]
    Io(std::io::Error),
}

impl GenerateError {
    pub fn invalid_argument(depth: i64) -> Self {
        GenerateError::InvalidArgument { depth }
    }
}
