#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("A spin is already in progress")]
    SpinInProgress,

    #[error("Wheel catalog is empty")]
    EmptyCatalog,

    #[error("Session not started, use /start first")]
    SessionNotStarted,

    #[error("Invalid wheel configuration: {0}")]
    InvalidConfig(String),
}
