use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Backend returned status {0}")]
    UpstreamStatus(u16),

    #[error("Backend not configured: {0}")]
    Misconfigured(String),

    #[error("Malformed backend reply: {0}")]
    MalformedReply(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BackendResult<T> = Result<T, BackendError>;
