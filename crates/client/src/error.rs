//! API error taxonomy.

use thiserror::Error;

/// Errors surfaced by the API wrappers.
///
/// Every non-success HTTP status on a read or write becomes [`Api`] with a
/// fixed per-operation message; login is the single exception, where the
/// server's own message is forwarded when present. Screens render the
/// `Display` form directly as an inline banner, so the message IS the user
/// copy — none of these are fatal and nothing is automatically retried.
///
/// [`Api`]: ApiError::Api
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("요청에 실패했습니다: {0}")]
    Request(String),

    /// The response body could not be decoded.
    #[error("응답을 처리할 수 없습니다: {0}")]
    Response(String),

    /// Non-success HTTP status, mapped to the operation's fixed message.
    #[error("{0}")]
    Api(String),

    /// Login failure carrying the server-provided message when present.
    #[error("{0}")]
    Login(String),
}

impl ApiError {
    pub(crate) fn request(err: &reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }

    pub(crate) fn response(err: &reqwest::Error) -> Self {
        Self::Response(err.to_string())
    }
}
