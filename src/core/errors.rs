use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaynameError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Invalid API address '{address}': {reason}")]
    InvalidApiBase { address: String, reason: String },

    #[error("Failed to start task runtime: {0}")]
    Runtime(String),
}

impl From<std::io::Error> for SaynameError {
    fn from(error: std::io::Error) -> Self {
        SaynameError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for SaynameError {
    fn from(error: reqwest::Error) -> Self {
        SaynameError::Reqwest(Box::new(error))
    }
}

/// Every way a single analysis can end other than success.
///
/// The `Display` text is what the error banner shows, so server-supplied
/// details pass through verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyseError {
    #[error("Please enter a name to analyse")]
    EmptyName,

    #[error("{0}")]
    Transport(String),

    #[error("Request timed out after {} seconds. Please try again.", .0.as_secs())]
    Timeout(Duration),

    #[error("{detail}")]
    Server { status: u16, detail: String },

    #[error("Failed to analyse name")]
    Failed { status: u16 },

    #[error("Received an invalid response from the analysis service: {0}")]
    InvalidBody(String),

    #[error("The analysis was interrupted before it finished")]
    Interrupted,
}

impl AnalyseError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, AnalyseError::Timeout(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AnalyseError::Server { status, .. } | AnalyseError::Failed { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AnalyseError {
    fn from(error: reqwest::Error) -> Self {
        AnalyseError::Transport(error.to_string())
    }
}
