//! Failure classification for backend calls.

use thiserror::Error;

/// Why a backend call did not produce a usable result.
///
/// Pages never show these directly; each flow maps them to its own banner
/// text and prefers the server-provided message when there is one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No bearer token in local storage; nothing was sent.
    #[error("missing auth token")]
    MissingToken,
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx status.
    #[error("server responded with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// 2xx status but the body reported `success: false` (or omitted it
    /// where the flow requires it).
    #[error("request was not successful")]
    Unsuccessful { message: Option<String> },
    /// 2xx status with a body that is not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } | Self::Unsuccessful { message } => message.as_deref(),
            _ => None,
        }
    }
}
