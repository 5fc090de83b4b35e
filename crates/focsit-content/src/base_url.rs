//! API base URL resolution
//!
//! The base URL is a pure function of an optional explicit override and the
//! location of the page the client runs for. [`BaseUrlResolver`] computes it
//! once and hands out the same string for its whole lifetime.

use std::env;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding an explicit API base URL
pub const API_BASE_URL_ENV_VAR: &str = "FOCSIT_API_BASE_URL";
/// Base URL used when the page is served from a local or LAN host
pub const LOCAL_DEV_BASE_URL: &str = "http://127.0.0.1:5000/api";
/// Base URL used when no page location is known
pub const FALLBACK_BASE_URL: &str = "https://apis.focsit.in/api";

const API_SUBDOMAIN: &str = "apis";
const API_PATH_PREFIX: &str = "/api";

/// Network scheme of the calling page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    Https,
}

impl Scheme {
    /// Scheme name without the trailing colon
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// True for HTTPS
    pub fn is_secure(&self) -> bool {
        matches!(self, Scheme::Https)
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim_end_matches(':').to_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            other => Err(Error::InvalidLocation(format!("unsupported scheme: {other}"))),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of the page on whose behalf requests are made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    scheme: Scheme,
    host: String,
}

impl PageLocation {
    /// Create a location from a scheme and a host name (no port)
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            scheme,
            host: host.into().to_lowercase(),
        }
    }

    /// Parse a full page URL such as `https://focsit.in/events`
    pub fn parse(page_url: &str) -> Result<Self> {
        let url = Url::parse(page_url)?;
        let scheme = Scheme::from_str(url.scheme())?;
        let host = url
            .host_str()
            .ok_or_else(|| Error::InvalidLocation(format!("no host in {page_url}")))?;

        Ok(Self::new(scheme, host))
    }

    /// Page scheme
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Page host, lowercased, without port
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl FromStr for PageLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Explicit API configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
}

impl ApiConfig {
    /// Create a config, a blank override counts as absent
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.filter(|url| !url.trim().is_empty()),
        }
    }

    /// Read the override from [`API_BASE_URL_ENV_VAR`]
    pub fn from_env() -> Self {
        Self::new(env::var(API_BASE_URL_ENV_VAR).ok())
    }

    /// Explicit override, if any
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

/// Whether a host is a development machine: `localhost`, loopback or a private LAN address
pub fn is_local_host(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');

    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }

    match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => addr.is_loopback() || addr.is_private(),
        Ok(IpAddr::V6(addr)) => addr.is_loopback(),
        Err(_) => false,
    }
}

/// `apis.<domain>` for a public page host, `None` when the host is an IP literal
fn api_host(page_host: &str) -> Option<String> {
    if page_host
        .trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .is_ok()
    {
        return None;
    }

    let subdomain_prefix = format!("{API_SUBDOMAIN}.");
    if page_host.starts_with(&subdomain_prefix) {
        return Some(page_host.to_string());
    }

    let labels: Vec<&str> = page_host.split('.').collect();
    let domain = if labels.len() > 2 {
        labels[1..].join(".")
    } else {
        page_host.to_string()
    };

    Some(format!("{subdomain_prefix}{domain}"))
}

/// Resolve the API base URL, first match wins:
///
/// 1. the explicit override, verbatim
/// 2. a local/LAN page host maps to [`LOCAL_DEV_BASE_URL`]
/// 3. a public page host maps to `<page scheme>://apis.<domain>/api`
/// 4. otherwise [`FALLBACK_BASE_URL`]
pub fn resolve_base_url(config: &ApiConfig, location: Option<&PageLocation>) -> String {
    if let Some(base_url) = config.base_url() {
        return base_url.to_string();
    }

    match location {
        Some(location) if is_local_host(location.host()) => LOCAL_DEV_BASE_URL.to_string(),
        Some(location) => match api_host(location.host()) {
            Some(host) => format!("{}://{}{}", location.scheme(), host, API_PATH_PREFIX),
            None => FALLBACK_BASE_URL.to_string(),
        },
        None => FALLBACK_BASE_URL.to_string(),
    }
}

/// A secure page talking to a plain HTTP backend, which browsers block
pub(crate) fn is_mixed_content(base_url: &str, location: Option<&PageLocation>) -> bool {
    let insecure_base = base_url
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http:"));

    insecure_base && location.is_some_and(|location| location.scheme().is_secure())
}

/// Computes the base URL on first use and caches it
#[derive(Debug)]
pub struct BaseUrlResolver {
    config: ApiConfig,
    location: Option<PageLocation>,
    resolved: OnceCell<String>,
}

impl BaseUrlResolver {
    /// Create a resolver for the given inputs
    pub fn new(config: ApiConfig, location: Option<PageLocation>) -> Self {
        Self {
            config,
            location,
            resolved: OnceCell::new(),
        }
    }

    /// Create a resolver taking the override from the environment
    pub fn from_env(location: Option<PageLocation>) -> Self {
        Self::new(ApiConfig::from_env(), location)
    }

    /// The resolved base URL, identical on every call
    pub fn resolve(&self) -> &str {
        self.resolved.get_or_init(|| {
            let base_url = resolve_base_url(&self.config, self.location.as_ref());
            tracing::debug!("Resolved API base URL: {}", base_url);

            if is_mixed_content(&base_url, self.location.as_ref()) {
                tracing::warn!(
                    "Insecure API base URL {} used from an HTTPS page; \
                     browsers block mixed content",
                    base_url
                );
            }

            base_url
        })
    }

    /// Explicit configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Page location, if one was supplied
    pub fn location(&self) -> Option<&PageLocation> {
        self.location.as_ref()
    }
}
