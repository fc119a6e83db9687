use thiserror::Error;

/// Failures of the async entry points. The synchronous pipeline is total.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("Lint task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LintError>;
