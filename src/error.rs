use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Passed in argument `{param}` was not of type {expected}")]
    InvalidArgument {
        expected: &'static str,
        param: &'static str,
    },

    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, HostError>;
