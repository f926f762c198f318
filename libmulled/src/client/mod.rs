//! HTTP client for the mulled catalog API.
//!
//! A thin blocking client built on reqwest. Every call performs exactly one
//! GET request against `<endpoint><resource>.json` and hands back either the
//! decoded record or the first error encountered. There are no retries.

use crate::catalog::{self, Builder, ImageCollection, ImageSummary};
use crate::error::{MulledError, Result};
use reqwest::StatusCode;
use reqwest::blocking::{Client as ReqwestClient, Response};
use std::time::Duration;
use url::Url;


/// Public endpoint of the mulled API.
pub const DEFAULT_ENDPOINT: &str = "https://mulled.github.io/api/v1/";

/// Configuration for the HTTP client.
///
/// # Examples
///
/// ```
/// use libmulled::client::ClientConfig;
///
/// let config = ClientConfig::new().with_timeout(60);
/// assert_eq!(config.timeout_seconds, 60);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30); 0 disables the timeout
    pub timeout_seconds: u64,
    /// Value sent in the User-Agent header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("mulled/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds. Zero means no timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the User-Agent header value.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Blocking client for the catalog API.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// Base endpoint, always ending in `/`
    endpoint: String,
}

impl Client {
    /// Creates a new client for the given endpoint with default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmulled::client::Client;
    ///
    /// let client = Client::new("https://mulled.github.io/api/v1").unwrap();
    /// assert_eq!(client.endpoint(), "https://mulled.github.io/api/v1/");
    /// ```
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_config(endpoint, ClientConfig::default())
    }

    /// Creates a new client for the given endpoint with custom configuration.
    pub fn with_config(endpoint: &str, config: ClientConfig) -> Result<Self> {
        let endpoint = Self::normalize_endpoint(endpoint)?;

        let mut builder = ReqwestClient::builder().user_agent(config.user_agent);
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }

        let http_client = builder
            .build()
            .map_err(|e| MulledError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// Validates the endpoint and makes sure resource paths can be appended.
    fn normalize_endpoint(endpoint: &str) -> Result<String> {
        let endpoint = endpoint.trim();

        if endpoint.is_empty() {
            return Err(MulledError::validation("Endpoint URL cannot be empty"));
        }

        let parsed = Url::parse(endpoint).map_err(|e| {
            MulledError::validation(format!("Invalid endpoint URL '{}': {}", endpoint, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(MulledError::validation(format!(
                "Unsupported endpoint scheme '{}': expected http or https",
                parsed.scheme()
            )));
        }

        let mut endpoint = endpoint.to_string();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }

        Ok(endpoint)
    }

    /// Returns the base endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the absolute URL of a resource below the endpoint.
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Fetches the full image listing from `images.json`.
    ///
    /// The collection is returned in API order; sorting is up to the caller.
    pub fn fetch_images(&self) -> Result<ImageCollection> {
        let body = self.fetch("images.json")?;
        catalog::decode_images(&body)
    }

    /// Fetches one image with its version history from `images/<name>.json`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libmulled::client::Client;
    ///
    /// # fn example() -> libmulled::error::Result<()> {
    /// let client = Client::new("https://mulled.github.io/api/v1/")?;
    /// let samtools = client.fetch_image("samtools")?;
    /// for version in &samtools.versions {
    ///     println!("{} {}", version.version, version.revision);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn fetch_image(&self, name: &str) -> Result<ImageSummary> {
        let body = self.fetch(&format!("images/{}.json", name))?;
        catalog::decode_image(&body)
    }

    /// Fetches the list of builders from `builders.json`.
    pub fn fetch_builders(&self) -> Result<Vec<Builder>> {
        let body = self.fetch("builders.json")?;
        catalog::decode_builders(&body)
    }

    /// Performs a single GET for `path` and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint is unreachable or the request times out
    /// - The server answers with a non-success status
    /// - The body cannot be read to completion
    pub fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.resource_url(path);

        let response = self
            .http_client
            .get(&url)
            .send()
            .map_err(|e| Self::translate_reqwest_error(e, &url))?;

        let response = Self::check_response_status(response)?;

        let body = response
            .bytes()
            .map_err(|e| MulledError::network_with_source(format!("Failed to read {}", url), e))?;

        Ok(body.to_vec())
    }

    /// Translates a reqwest error into a MulledError.
    fn translate_reqwest_error(error: reqwest::Error, url: &str) -> MulledError {
        if error.is_timeout() {
            MulledError::network_with_source(format!("Request to {} timed out", url), error)
        } else if error.is_connect() {
            MulledError::network_with_source(format!("Failed to connect to {}", url), error)
        } else {
            MulledError::network_with_source(format!("Failed to fetch {}", url), error)
        }
    }

    /// Checks the HTTP response status and translates failures to MulledError.
    fn check_response_status(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let error_body = response
            .text()
            .unwrap_or_else(|_| String::from("(unable to read response body)"));

        match status {
            StatusCode::NOT_FOUND => Err(MulledError::not_found("resource", url.as_str())),
            s if s.is_server_error() => Err(MulledError::server(
                format!("Server error from {}: {}", url, error_body.trim()),
                s.as_u16(),
            )),
            _ => Err(MulledError::network(format!(
                "HTTP {} from {}: {}",
                status.as_u16(),
                url,
                error_body.trim()
            ))),
        }
    }
}
