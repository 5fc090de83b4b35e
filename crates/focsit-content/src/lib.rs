//! Client for the FOCSIT website content API
//!
//! Resolves the backend base URL, issues the content CRUD requests and turns
//! backend-relative asset paths into absolute URLs.
//!
//! ```no_run
//! use focsit_content::{ContentClient, PageLocation};
//!
//! # async fn example() -> Result<(), focsit_content::Error> {
//! let location: PageLocation = "https://focsit.in/showcase".parse()?;
//! let client = ContentClient::from_env(Some(location));
//!
//! // Reads never fail, `None` means "show the empty state"
//! for project in client.get_projects().await.unwrap_or_default() {
//!     println!("{} -> {}", project.title, project.thumbnail_url(&client));
//! }
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod base_url;
pub mod client;
pub mod error;
pub mod form;
mod serde_utils;
pub mod types;

pub use asset::{resolve_asset_url, PLACEHOLDER_IMAGE_URL};
pub use base_url::{
    is_local_host, resolve_base_url, ApiConfig, BaseUrlResolver, PageLocation, Scheme,
    API_BASE_URL_ENV_VAR, FALLBACK_BASE_URL, LOCAL_DEV_BASE_URL,
};
pub use client::ContentClient;
pub use error::{Error, Result};
pub use form::split_list;
pub use types::{ContactMessage, Event, JobApplication, PartnershipLead, Project, Vacancy};
