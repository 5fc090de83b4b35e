//! Error types for the content client

use focsit_http_client::HttpError;
use thiserror::Error;

/// Result type for content client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the content client
///
/// `Display` of [`Error::Api`] is the bare backend message so forms can show it verbatim.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never reached the server or the response never arrived
    #[error("Network error: {0}")]
    Transport(HttpError),

    /// Backend answered with a non-2xx status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the body, or a synthesized status message
        message: String,
    },

    /// 2xx response whose body is not the expected JSON
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    /// Page location could not be interpreted
    #[error("Invalid page location: {0}")]
    InvalidLocation(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Status { status, message } => Error::Api {
                status,
                message: extract_error_message(status, &message),
            },
            HttpError::Serialization(msg) => Error::InvalidResponse(msg),
            other => Error::Transport(other),
        }
    }
}

/// Pick the human readable message out of an error response body
///
/// Takes the `error` field, then the `message` field, of a JSON object body.
/// Absent, empty or unparsable bodies yield a message naming the status code.
pub fn extract_error_message(status: u16, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    parsed
        .as_ref()
        .and_then(|value| {
            ["error", "message"].iter().find_map(|key| {
                value
                    .get(*key)
                    .and_then(serde_json::Value::as_str)
                    .filter(|msg| !msg.is_empty())
            })
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_field() {
        assert_eq!(
            extract_error_message(400, r#"{"error": "Email invalid"}"#),
            "Email invalid"
        );
    }

    #[test]
    fn test_extract_error_takes_precedence_over_message() {
        assert_eq!(
            extract_error_message(409, r#"{"message": "Conflict", "error": "Already applied"}"#),
            "Already applied"
        );
    }

    #[test]
    fn test_extract_message_field() {
        assert_eq!(
            extract_error_message(422, r#"{"message": "Phone is required"}"#),
            "Phone is required"
        );
    }

    #[test]
    fn test_extract_falls_back_on_empty_error() {
        assert_eq!(
            extract_error_message(400, r#"{"error": "", "message": "Bad input"}"#),
            "Bad input"
        );
    }

    #[test]
    fn test_extract_unstructured_body() {
        assert_eq!(
            extract_error_message(502, "<html>Bad Gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(extract_error_message(500, ""), "Request failed with status 500");
        assert_eq!(
            extract_error_message(500, r#"{"error": {"code": 1}}"#),
            "Request failed with status 500"
        );
        assert_eq!(
            extract_error_message(404, r#"["not", "an", "object"]"#),
            "Request failed with status 404"
        );
    }

    #[test]
    fn test_from_http_status_error() {
        let err: Error = HttpError::Status {
            status: 400,
            message: r#"{"error": "X"}"#.to_string(),
        }
        .into();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn test_from_http_transport_error() {
        let err: Error = HttpError::Connection("refused".to_string()).into();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.status(), None);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_from_http_serialization_error() {
        let err: Error = HttpError::Serialization("EOF".to_string()).into();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }
}
