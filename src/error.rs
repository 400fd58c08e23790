//! Error types for experiment-history
//!
//! Every failure is synchronous and surfaced to the caller of the operation
//! that detected it. Nothing is retried internally.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// experiment-history error types
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied an invalid value (empty experiment name, role not in
    /// {input, output}, text longer than its centering width, zero-column
    /// table, row with more values than columns)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Experiment name collision without `overwrite_if_experiment_exists`
    #[error(
        "experiment '{0}' already exists\n\
         Set StoreOptions::overwrite_if_experiment_exists to replace it"
    )]
    AlreadyExists(String),

    /// A code block's source text could not be obtained from its provider
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// IO error (directory creation, image persistence, report write, flush)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Log file error (CSV load or save)
    #[error("log file error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_mentions_override() {
        let err = Error::AlreadyExists("trial-7".to_string());
        let msg = err.to_string();
        assert!(msg.contains("trial-7"));
        assert!(msg.contains("overwrite_if_experiment_exists"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
