#[derive(Debug, thiserror::Error)]
pub enum FuelError {
    #[error("{operation} failed with HTTP status {status}")]
    Transport { operation: &'static str, status: u16 },

    #[error("{operation} returned an unreadable body: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("A submission is already in progress")]
    SubmissionInProgress,
}

impl FuelError {
    /// Name of the gateway operation that produced this fault, if any.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            FuelError::Transport { operation, .. } | FuelError::Decode { operation, .. } => {
                Some(operation)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FuelError>;
