//! Error types for the benchmark harness.

use thiserror::Error;

/// Errors of a benchmark run. Counting kernels never fail; only the harness around them can.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The input buffer of the shoot-out could not be allocated.
    #[error("Out of memory: cannot allocate {bytes} bytes for the input buffer")]
    OutOfMemory {
        /// Size of the failed allocation.
        bytes: usize,
    },

    /// Invalid benchmark configuration.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit status of a run that succeeded.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status of a run that failed.
pub const EXIT_FAILURE: i32 = 1;

impl HarnessError {
    /// The process exit status for this error. Every error aborts the run with a failure status.
    pub fn exit_code(&self) -> i32 {
        match self {
            HarnessError::OutOfMemory { .. }
            | HarnessError::InvalidConfig(_)
            | HarnessError::Io(_) => EXIT_FAILURE,
        }
    }
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
