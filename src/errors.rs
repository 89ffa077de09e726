use thiserror::Error;

/// Failures the adapter itself can produce.
///
/// A tracker reply with a non-2xx status is deliberately NOT represented
/// here: the adapter is a thin transport and passes any HTTP result through
/// as a normal [`AdapterResponse`](crate::models::event::AdapterResponse).
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A required environment variable is absent or empty at startup.
    #[error("missing required configuration variable {0}")]
    MissingConfig(&'static str),

    /// The request never completed against the tracker: connection refused,
    /// DNS failure, timeout, or an unreadable response body.
    #[error("failed to reach the tracker: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
