use thiserror::Error;

/// Errors raised while building goalgraph domain values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid date source: {0} (expected \"fixed\" or \"relative\")")]
    InvalidDateSource(String),
}
