//! Fetch Errors
//!
//! ページ取得エラーの分類

use thiserror::Error;

use super::retry::is_retryable_status;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// 同じリクエストを再送して成功する見込みがあるか
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status { status, .. } => is_retryable_status(*status),
            FetchError::Request { source, .. } => source.is_connect() || source.is_timeout(),
            FetchError::Body { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "https://meetings.siam.org/program.cfm".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404 for https://meetings.siam.org/program.cfm"
        );
    }

    #[test]
    fn test_status_error_retryable() {
        let server_error = FetchError::Status {
            url: "u".to_string(),
            status: 503,
        };
        let not_found = FetchError::Status {
            url: "u".to_string(),
            status: 404,
        };
        assert!(server_error.is_retryable());
        assert!(!not_found.is_retryable());
    }
}
