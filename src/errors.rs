#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Message to surface to the user: a server-supplied message wins,
    /// then the error's own rendering, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Transport(err) => err.to_string(),
            ApiError::Rejected { .. } => self.to_string(),
            ApiError::InvalidResponse(_) => fallback.to_string(),
        }
    }
}
