//! Error kinds for unbored.
//!
//! Four failure families: the network call, the shape of what came back,
//! the local save file, and the API's explicit "nothing matched" reply.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be completed (connection refused, timeout,
    /// server failure).
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but did not have the expected shape.
    #[error("unexpected response format: {0}")]
    Format(String),

    /// The selection file could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Valid response saying no activity satisfies the current filters.
    #[error("no matching activity")]
    NoMatch,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Format(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
