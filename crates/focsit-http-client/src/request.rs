//! HTTP request builder

use serde::Serialize;

use crate::error::HttpError;
use crate::response::{RawResponse, Response};

/// Trait for building and sending HTTP requests
///
/// Callers program against this trait rather than the concrete builder so the
/// backend can change without touching request code.
pub trait RequestBuilderExt: Sized + Send {
    /// Add a header to the request
    fn header(self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self;

    /// Set the request body as JSON
    ///
    /// Also sets `Content-Type: application/json`.
    fn json<T: Serialize + ?Sized>(self, body: &T) -> Self;

    /// Send the request and return a raw response
    ///
    /// Any status is a response; only transport failures are errors.
    fn send(self) -> impl std::future::Future<Output = Response<RawResponse>> + Send;
}

/// reqwest-based request builder
#[derive(Debug)]
pub struct RequestBuilder {
    inner: reqwest::RequestBuilder,
}

impl RequestBuilder {
    pub(crate) fn new(inner: reqwest::RequestBuilder) -> Self {
        Self { inner }
    }
}

impl RequestBuilderExt for RequestBuilder {
    fn header(self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Self {
            inner: self.inner.header(key.as_ref(), value.as_ref()),
        }
    }

    fn json<T: Serialize + ?Sized>(self, body: &T) -> Self {
        Self {
            inner: self.inner.json(body),
        }
    }

    async fn send(self) -> Response<RawResponse> {
        let response = self.inner.send().await.map_err(|err| {
            tracing::debug!("Request failed: {}", err);
            HttpError::from(err)
        })?;

        tracing::debug!(
            "{} responded with status {}",
            response.url(),
            response.status().as_u16()
        );
        Ok(RawResponse::new(response))
    }
}
