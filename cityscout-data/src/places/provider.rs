//! HTTP nearby-search provider.

use std::time::Duration;

use geo::Coord;
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use cityscout_core::{RawVenue, VenueSource, VenueSourceError};

use super::wire::NearbySearchResponse;
use crate::ProviderBuildError;

/// Default user agent for nearby-search requests.
pub const DEFAULT_USER_AGENT: &str = "cityscout-places/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default search radius in metres.
const DEFAULT_RADIUS_M: u32 = 50_000;

/// Pause before requesting a follow-up page.
///
/// The directory needs a moment before a freshly issued page token becomes
/// valid; requesting too early returns `INVALID_REQUEST`.
const DEFAULT_PAGE_PAUSE: Duration = Duration::from_secs(2);

/// Configuration for [`HttpVenueSource`].
#[derive(Debug, Clone)]
pub struct HttpVenueSourceConfig {
    /// Base URL for the directory service (e.g. `"https://maps.googleapis.com"`).
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Search radius in metres.
    pub radius_m: u32,
    /// Pause before each follow-up page request.
    pub page_pause: Duration,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpVenueSourceConfig {
    /// Create a new configuration with the given base URL and API key.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            radius_m: DEFAULT_RADIUS_M,
            page_pause: DEFAULT_PAGE_PAUSE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the search radius in metres.
    #[must_use]
    pub fn with_radius_m(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }

    /// Set the pause before follow-up page requests.
    #[must_use]
    pub fn with_page_pause(mut self, page_pause: Duration) -> Self {
        self.page_pause = page_pause;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based venue source using the directory's nearby-search endpoint.
///
/// The provider implements the synchronous [`VenueSource`] trait by
/// blocking on asynchronous HTTP requests internally, following page
/// tokens until `max_results` venues are collected or the directory runs
/// out of pages. It owns a Tokio runtime that is reused across calls.
pub struct HttpVenueSource {
    client: Client,
    config: HttpVenueSourceConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpVenueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpVenueSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpVenueSource {
    /// Create a new provider from a base URL and API key with default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpVenueSourceConfig::new(base_url, api_key))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpVenueSourceConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Build the nearby-search endpoint URL.
    fn endpoint_url(&self) -> String {
        format!(
            "{}/maps/api/place/nearbysearch/json",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Format the location query parameter as `"lat,lng"`.
    fn format_location(location: Coord<f64>) -> String {
        format!("{},{}", location.y, location.x)
    }

    /// Fetch pages until `max_results` venues are collected.
    async fn search_async(
        &self,
        location: Coord<f64>,
        category: &str,
        max_results: usize,
    ) -> Result<Vec<RawVenue>, VenueSourceError> {
        let url = self.endpoint_url();
        let location_param = Self::format_location(location);
        let radius_param = self.config.radius_m.to_string();

        let mut venues: Vec<RawVenue> = Vec::new();
        let mut page_token: Option<String> = None;

        while venues.len() < max_results {
            if page_token.is_some() {
                // A freshly issued token is not valid immediately.
                tokio::time::sleep(self.config.page_pause).await;
            }

            let mut request = self.client.get(&url).query(&[
                ("location", location_param.as_str()),
                ("radius", radius_param.as_str()),
                ("type", category),
                ("key", self.config.api_key.as_str()),
            ]);
            if let Some(token) = page_token.as_deref() {
                request = request.query(&[("pagetoken", token)]);
            }

            let response = request
                .send()
                .await
                .map_err(|err| self.convert_reqwest_error(&err, &url))?
                .error_for_status()
                .map_err(|err| self.convert_reqwest_error(&err, &url))?;

            let page: NearbySearchResponse =
                response
                    .json()
                    .await
                    .map_err(|err| VenueSourceError::Parse {
                        message: err.to_string(),
                    })?;

            let (page_venues, next_token) = convert_page(page)?;
            log::debug!(
                "fetched page with {} venues ({} collected so far)",
                page_venues.len(),
                venues.len()
            );
            venues.extend(page_venues);

            match next_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        venues.truncate(max_results);
        Ok(venues)
    }

    /// Convert a reqwest error to a `VenueSourceError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> VenueSourceError {
        if error.is_timeout() {
            return VenueSourceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return VenueSourceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        VenueSourceError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Convert one response page into venues plus the continuation token.
///
/// `ZERO_RESULTS` is a valid empty answer; any other non-OK status is a
/// service error.
fn convert_page(
    page: NearbySearchResponse,
) -> Result<(Vec<RawVenue>, Option<String>), VenueSourceError> {
    if page.is_zero_results() {
        return Ok((Vec::new(), None));
    }
    if !page.is_ok() {
        return Err(VenueSourceError::Service {
            status: page.status,
            message: page.error_message.unwrap_or_default(),
        });
    }
    Ok((page.results, page.next_page_token))
}

impl VenueSource for HttpVenueSource {
    /// Fetch up to `max_results` venues near `location`.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must
    /// be multi-threaded (`flavor = "multi_thread"`). From a
    /// `current_thread` runtime the provider falls back to its own internal
    /// runtime, which may block the caller's runtime.
    fn search_nearby(
        &self,
        location: Coord<f64>,
        category: &str,
        max_results: usize,
    ) -> Result<Vec<RawVenue>, VenueSourceError> {
        if max_results == 0 {
            return Ok(Vec::new());
        }

        let future = self.search_async(location, category, max_results);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}
