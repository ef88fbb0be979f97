use std::error;

use serde::Deserialize;
use thiserror::Error;

use crate::api::Api;

#[derive(Debug, Error)]
pub enum Error {
    /// tencentcloud api error
    #[error("error: {err}, request id: {request_id}")]
    Api { err: ApiError, request_id: String },

    /// http error
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// other error
    #[error(transparent)]
    Other(Box<dyn error::Error + Send + Sync + 'static>),

    /// json marshal/unmarshal error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// the request context is cancelled
    #[error("request cancelled")]
    Cancelled,

    /// the request context deadline is exceeded
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

impl Error {
    /// the tencentcloud api error code, if this is an api error
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { err, .. } => Some(&err.code),
            _ => None,
        }
    }

    /// the request id returned with an api error
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Api { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    /// whether this is an api error whose code is documented for the action `A`
    pub fn is_documented_for<A: Api>(&self) -> bool {
        self.code()
            .map(|code| A::ERROR_CODES.contains(&code))
            .unwrap_or(false)
    }

    pub(crate) fn is_network_failure(&self) -> bool {
        match self {
            Error::Http(err) => err.is_connect() || err.is_timeout() || err.is_request(),
            _ => false,
        }
    }

    pub(crate) fn is_rate_limited(&self) -> bool {
        self.code() == Some(REQUEST_LIMIT_EXCEEDED)
    }
}

pub(crate) const REQUEST_LIMIT_EXCEEDED: &str = "RequestLimitExceeded";

/// tencentcloud api error
#[derive(Debug, Deserialize, Error)]
#[error("code: {code}, message: {message}")]
#[non_exhaustive]
pub struct ApiError {
    /// the error code
    #[serde(rename = "Code")]
    pub code: String,

    /// the error message
    #[serde(rename = "Message")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(code: &str) -> Error {
        Error::Api {
            err: serde_json::from_value(serde_json::json!({
                "Code": code,
                "Message": "something wrong",
            }))
            .unwrap(),
            request_id: "req-1".into(),
        }
    }

    #[test]
    fn api_error_display() {
        let err = api_error("InvalidParameter");

        assert_eq!(
            err.to_string(),
            "error: code: InvalidParameter, message: something wrong, request id: req-1"
        );
        assert_eq!(err.code(), Some("InvalidParameter"));
        assert_eq!(err.request_id(), Some("req-1"));
    }

    #[test]
    fn rate_limited() {
        assert!(api_error("RequestLimitExceeded").is_rate_limited());
        assert!(!api_error("InvalidParameter").is_rate_limited());
        assert!(!Error::Cancelled.is_rate_limited());
        assert!(Error::Cancelled.code().is_none());
    }
}
