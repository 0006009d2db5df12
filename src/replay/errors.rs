use thiserror::Error;

/// Failures that abort the replay of one match.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Malformed log: {0}")]
    MalformedLog(String),

    #[error("Unsupported player count: {0}")]
    UnsupportedPlayerCount(usize),

    #[error("Invalid log JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ReplayError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ReplayError::MalformedLog(message.into())
    }
}

/// Conditions worth auditing that do not stop the replay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayWarning {
    #[error("No discard found for ron by seat {winner} at action {action_index} ({round})")]
    UnresolvedCauser {
        round: String,
        action_index: usize,
        winner: usize,
    },
}
