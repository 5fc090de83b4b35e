//! HTTP client for the content API

use std::sync::Arc;

use focsit_http_client::{HttpClient, RawResponse, RequestBuilderExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::asset::resolve_asset_url;
use crate::base_url::{ApiConfig, BaseUrlResolver, PageLocation};
use crate::error::{extract_error_message, Error, Result};
use crate::types::{ContactMessage, Event, JobApplication, PartnershipLead, Project, Vacancy};

const API_PATH_CONTACT: &str = "/contact";
const API_PATH_CAREERS_APPLY: &str = "/careers/apply";
const API_PATH_ACADEMY_PARTNERSHIP: &str = "/academy/partnership";
const API_PATH_PROJECTS: &str = "/projects";
const API_PATH_EVENTS: &str = "/events";
const API_PATH_VACANCIES: &str = "/vacancies";

/// Client every page uses to talk to the content API
///
/// List operations degrade to `None` on any failure so a page can render its
/// empty state. Submit and create operations return the normalized [`Error`].
#[derive(Debug, Clone)]
pub struct ContentClient {
    resolver: Arc<BaseUrlResolver>,
    http_client: HttpClient,
}

impl ContentClient {
    /// Create a client for an explicit configuration and page location
    pub fn new(config: ApiConfig, location: Option<PageLocation>) -> Self {
        Self::with_http_client(config, location, HttpClient::new())
    }

    /// Create a client taking the base URL override from the environment
    pub fn from_env(location: Option<PageLocation>) -> Self {
        Self::new(ApiConfig::from_env(), location)
    }

    /// Create a client on top of a preconfigured [`HttpClient`]
    pub fn with_http_client(
        config: ApiConfig,
        location: Option<PageLocation>,
        http_client: HttpClient,
    ) -> Self {
        Self {
            resolver: Arc::new(BaseUrlResolver::new(config, location)),
            http_client,
        }
    }

    /// Resolved API base URL
    pub fn base_url(&self) -> &str {
        self.resolver.resolve()
    }

    /// Full URL of an API endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Absolute URL for a stored asset path
    ///
    /// See [`resolve_asset_url`].
    pub fn asset_url(&self, path: Option<&str>) -> String {
        resolve_asset_url(self.base_url(), path)
    }

    // === Forms ===

    /// Submit a Contact form message
    #[instrument(skip(self, message))]
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<Value> {
        self.post_json(API_PATH_CONTACT, message).await
    }

    /// Submit a Careers application
    #[instrument(skip(self, application))]
    pub async fn submit_application(&self, application: &JobApplication) -> Result<Value> {
        self.post_json(API_PATH_CAREERS_APPLY, application).await
    }

    /// Submit an AI Labs partnership lead
    #[instrument(skip(self, lead))]
    pub async fn submit_partnership(&self, lead: &PartnershipLead) -> Result<Value> {
        self.post_json(API_PATH_ACADEMY_PARTNERSHIP, lead).await
    }

    // === Collections ===

    /// List showcase projects, `None` if they could not be fetched
    #[instrument(skip(self))]
    pub async fn get_projects(&self) -> Option<Vec<Project>> {
        self.get_collection(API_PATH_PROJECTS).await
    }

    /// Create a showcase project
    #[instrument(skip(self, project))]
    pub async fn create_project(&self, project: &Project) -> Result<Value> {
        self.post_json(API_PATH_PROJECTS, project).await
    }

    /// List events, `None` if they could not be fetched
    #[instrument(skip(self))]
    pub async fn get_events(&self) -> Option<Vec<Event>> {
        self.get_collection(API_PATH_EVENTS).await
    }

    /// Create an event
    #[instrument(skip(self, event))]
    pub async fn create_event(&self, event: &Event) -> Result<Value> {
        self.post_json(API_PATH_EVENTS, event).await
    }

    /// List job vacancies, `None` if they could not be fetched
    #[instrument(skip(self))]
    pub async fn get_vacancies(&self) -> Option<Vec<Vacancy>> {
        self.get_collection(API_PATH_VACANCIES).await
    }

    /// Create a job vacancy
    #[instrument(skip(self, vacancy))]
    pub async fn create_vacancy(&self, vacancy: &Vacancy) -> Result<Value> {
        self.post_json(API_PATH_VACANCIES, vacancy).await
    }

    // === Request execution ===

    /// Fetch a collection, swallowing every failure
    async fn get_collection<T>(&self, path: &str) -> Option<Vec<T>>
    where
        T: DeserializeOwned,
    {
        match self.get_json::<Vec<T>>(path).await {
            Ok(records) => {
                tracing::debug!("Fetched {} records from {}", records.len(), path);
                Some(records)
            }
            Err(err) => {
                tracing::warn!("Could not fetch {}, showing empty state: {}", path, err);
                None
            }
        }
    }

    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);

        tracing::debug!("Making GET request to {}", url);
        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        self.parse_response(response).await
    }

    async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);

        tracing::debug!("Making POST request to {}", url);
        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        self.parse_response(response).await
    }

    /// Turn a response into its JSON body or a normalized error
    async fn parse_response<T>(&self, response: RawResponse) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let response_text = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::debug!("Error response ({}): {}", status, response_text);
            return Err(Error::Api {
                status,
                message: extract_error_message(status, &response_text),
            });
        }

        serde_json::from_str::<T>(&response_text).map_err(|e| {
            tracing::error!("JSON parse error: {} - Body: {}", e, response_text);
            Error::InvalidResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_url::Scheme;

    #[test]
    fn test_endpoint_join() {
        let client = ContentClient::new(
            ApiConfig::new(Some("https://apis.focsit.in/api/".to_string())),
            None,
        );

        assert_eq!(
            client.endpoint(API_PATH_CAREERS_APPLY),
            "https://apis.focsit.in/api/careers/apply"
        );
    }

    #[test]
    fn test_base_url_from_location() {
        let client = ContentClient::new(
            ApiConfig::default(),
            Some(PageLocation::new(Scheme::Https, "myapp.example.com")),
        );

        assert_eq!(client.base_url(), "https://apis.example.com/api");
        assert_eq!(
            client.asset_url(Some("uploads/a.jpg")),
            "https://apis.example.com/uploads/a.jpg"
        );
    }

    #[test]
    fn test_clones_share_resolution() {
        let client = ContentClient::new(ApiConfig::default(), None);
        let clone = client.clone();

        assert!(std::ptr::eq(client.base_url(), clone.base_url()));
    }
}
