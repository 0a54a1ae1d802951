use thiserror::Error;

/// Failure classes surfaced to callers of the milestone lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    InvalidArgument,
}

#[derive(Error, Debug)]
pub enum MilestoneError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Milestone not found: {0}")]
    MilestoneNotFound(String),
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl MilestoneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MilestoneError::Transport(_) => ErrorKind::Io,
            MilestoneError::Parse(_) => ErrorKind::Parse,
            MilestoneError::MilestoneNotFound(_) | MilestoneError::InvalidBaseUrl(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}
