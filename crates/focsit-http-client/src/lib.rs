//! HTTP client abstraction for the FOCSIT content API
//!
//! This crate wraps `reqwest` behind a small surface so that the content
//! client and its callers avoid a direct dependency on the HTTP backend.
//!
//! # Example
//!
//! ```no_run
//! use focsit_http_client::{HttpClient, RequestBuilderExt, Response};
//!
//! async fn example() -> Response<String> {
//!     let client = HttpClient::new();
//!     let response = client
//!         .get("https://apis.focsit.in/api/projects")
//!         .header("Accept", "application/json")
//!         .send()
//!         .await?;
//!     response.text().await
//! }
//! ```

mod client;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use error::HttpError;
pub use request::{RequestBuilder, RequestBuilderExt};
pub use response::{RawResponse, Response};
