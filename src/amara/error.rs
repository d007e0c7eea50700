#[derive(Debug, thiserror::Error)]
pub enum AmaraError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("event {index} at {at_ms}ms is earlier than previous event at {previous_ms}ms")]
    EventOutOfOrder {
        index: usize,
        at_ms: i64,
        previous_ms: i64,
    },
    #[error("script time {at_ms}ms leaves no room for the next sampling boundary")]
    TimeOutOfRange { at_ms: i64 },
    #[error(transparent)]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
