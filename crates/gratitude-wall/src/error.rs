use thiserror::Error;

/// Errors returned by gratitude-wall operations.
#[derive(Debug, Error)]
pub enum WallError {
    #[error("connect error: {0}")]
    ConnectError(String),

    #[error("chain error: {0}")]
    ChainError(String),

    #[error("host error: {0}")]
    HostError(String),

    #[error("share error: {0}")]
    ShareError(String),

    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("config error: {0}")]
    ConfigError(String),
}
