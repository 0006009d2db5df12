use thiserror::Error;

use crate::lookup::LookupError;
use crate::replay::ReplayError;
use crate::report::ReportError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
