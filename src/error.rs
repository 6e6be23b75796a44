use thiserror::Error;

/// Anything that stops a poll from producing a review list.
///
/// All variants belong to one failure class: the poll is logged and the
/// view keeps its last known data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("invalid review payload: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("review endpoint must not be empty")]
    EmptyEndpoint,
    #[error("poll interval must be at least one millisecond")]
    ZeroInterval,
}
