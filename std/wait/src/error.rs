use thiserror::Error;

/// Failures of the wait suspension itself.
#[derive(Error, Debug)]
pub enum WaitError {
    /// The duration cannot be represented as a timer deadline.
    #[error("invalid wait duration: {0} seconds")]
    InvalidDuration(f64),

    /// The server shut down while the wait was in progress.
    #[error("wait cancelled by server shutdown")]
    Cancelled,
}

impl From<WaitError> for rmcp::ErrorData {
    fn from(err: WaitError) -> Self {
        rmcp::ErrorData::internal_error(err.to_string(), None)
    }
}
