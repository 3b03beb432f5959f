use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarboError {
    #[error("Please enter your weight")]
    MissingWeight,

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A wizard step failed; carries the message shown to the user.
    #[error("{0}")]
    Wizard(String),
}

impl CarboError {
    /// Whether this error came from talking to the nutrition service
    /// (transport failure, non-success status, or an unreadable body).
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            CarboError::Status { .. } | CarboError::Http(_) | CarboError::Decode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CarboError>;
