//! HTTP response types

use crate::error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all HTTP operations
pub type Response<R, E = HttpError> = Result<R, E>;

/// Raw HTTP response with status code and body access
#[derive(Debug)]
pub struct RawResponse {
    status: u16,
    inner: reqwest::Response,
}

impl RawResponse {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self {
            status: response.status().as_u16(),
            inner: response,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the response body as text
    pub async fn text(self) -> Response<String> {
        self.inner.text().await.map_err(HttpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RawResponse needs a live response, see tests/integration.rs

    #[test]
    fn test_response_type_is_result() {
        let success: Response<i32> = Ok(42);
        assert!(matches!(success, Ok(42)));

        let error: Response<i32> = Err(HttpError::Timeout);
        assert!(matches!(error, Err(HttpError::Timeout)));
    }
}
