//! HTTP geocoding provider.

use std::time::Duration;

use geo::Coord;
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use cityscout_core::{GeocodeError, Geocoder};

use super::wire::GeocodeResponse;
use crate::ProviderBuildError;

/// Default user agent for geocoding requests.
pub const DEFAULT_USER_AGENT: &str = "cityscout-geocode/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpGeocoder`].
#[derive(Debug, Clone)]
pub struct HttpGeocoderConfig {
    /// Base URL for the directory service (e.g. `"https://maps.googleapis.com"`).
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpGeocoderConfig {
    /// Create a new configuration with the given base URL and API key.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
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

/// HTTP-based geocoder resolving city names through the directory's
/// geocoding endpoint.
///
/// The provider implements the synchronous [`Geocoder`] trait by blocking
/// on asynchronous HTTP requests internally. It owns a Tokio runtime that
/// is reused across calls.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within an existing multi-threaded
/// Tokio runtime, it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. From a
/// `current_thread` runtime it falls back to its own internal runtime.
pub struct HttpGeocoder {
    client: Client,
    config: HttpGeocoderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeocoder")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpGeocoder {
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
        Self::with_config(HttpGeocoderConfig::new(base_url, api_key))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpGeocoderConfig) -> Result<Self, ProviderBuildError> {
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

    /// Build the geocoding endpoint URL.
    ///
    /// The address and key travel as query parameters; only the path is
    /// assembled here.
    fn endpoint_url(&self) -> String {
        format!(
            "{}/maps/api/geocode/json",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Resolve the city asynchronously.
    async fn geocode_async(&self, city: &str) -> Result<Coord<f64>, GeocodeError> {
        let url = self.endpoint_url();

        let response = self
            .client
            .get(&url)
            .query(&[("address", city), ("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let geocode_response: GeocodeResponse =
            response.json().await.map_err(|err| GeocodeError::Parse {
                message: err.to_string(),
            })?;

        convert_response(geocode_response, city)
    }

    /// Convert a reqwest error to a `GeocodeError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> GeocodeError {
        if error.is_timeout() {
            return GeocodeError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return GeocodeError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        GeocodeError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Convert a geocoding response into coordinates.
///
/// `ZERO_RESULTS` and an empty result list both resolve to
/// [`GeocodeError::NotFound`]; any other non-OK status surfaces as a
/// service error.
fn convert_response(response: GeocodeResponse, city: &str) -> Result<Coord<f64>, GeocodeError> {
    if response.is_zero_results() {
        return Err(GeocodeError::NotFound {
            city: city.to_owned(),
        });
    }
    if !response.is_ok() {
        return Err(GeocodeError::Service {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        });
    }
    response
        .results
        .first()
        .map(|result| Coord {
            x: result.geometry.location.lng,
            y: result.geometry.location.lat,
        })
        .ok_or_else(|| GeocodeError::NotFound {
            city: city.to_owned(),
        })
}

impl Geocoder for HttpGeocoder {
    /// Resolve a city name to coordinates.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must
    /// be multi-threaded (`flavor = "multi_thread"`). From a
    /// `current_thread` runtime the provider falls back to its own internal
    /// runtime, which may block the caller's runtime.
    fn geocode(&self, city: &str) -> Result<Coord<f64>, GeocodeError> {
        let future = self.geocode_async(city);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::wire::{GeocodeResult, Geometry, LatLng};
    use rstest::rstest;

    fn response_with(status: &str, results: Vec<GeocodeResult>) -> GeocodeResponse {
        GeocodeResponse {
            status: status.to_owned(),
            error_message: None,
            results,
        }
    }

    fn candidate(lat: f64, lng: f64) -> GeocodeResult {
        GeocodeResult {
            geometry: Geometry {
                location: LatLng { lat, lng },
            },
        }
    }

    #[rstest]
    fn endpoint_url_appends_path() {
        let geocoder =
            HttpGeocoder::new("https://maps.example.com", "key").expect("provider should build");

        assert_eq!(
            geocoder.endpoint_url(),
            "https://maps.example.com/maps/api/geocode/json"
        );
    }

    #[rstest]
    fn endpoint_url_strips_trailing_slash() {
        let geocoder =
            HttpGeocoder::new("https://maps.example.com/", "key").expect("provider should build");

        assert!(!geocoder.endpoint_url().contains("//maps/api"));
    }

    #[rstest]
    fn convert_response_takes_first_candidate() {
        let response = response_with(
            "OK",
            vec![candidate(22.72, 75.86), candidate(0.0, 0.0)],
        );

        let location = convert_response(response, "Indore").expect("should resolve");

        assert_eq!(location.y, 22.72);
        assert_eq!(location.x, 75.86);
    }

    #[rstest]
    fn convert_response_maps_zero_results_to_not_found() {
        let response = response_with("ZERO_RESULTS", Vec::new());

        let err = convert_response(response, "Atlantis").expect_err("should fail");

        assert_eq!(
            err,
            GeocodeError::NotFound {
                city: "Atlantis".to_owned(),
            }
        );
    }

    #[rstest]
    fn convert_response_maps_empty_ok_to_not_found() {
        let response = response_with("OK", Vec::new());

        let err = convert_response(response, "Nowhere").expect_err("should fail");

        assert!(matches!(err, GeocodeError::NotFound { .. }));
    }

    #[rstest]
    fn convert_response_surfaces_service_errors() {
        let response = GeocodeResponse {
            status: "REQUEST_DENIED".to_owned(),
            error_message: Some("The provided API key is invalid.".to_owned()),
            results: Vec::new(),
        };

        let err = convert_response(response, "Indore").expect_err("should fail");

        match err {
            GeocodeError::Service { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "The provided API key is invalid.");
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpGeocoderConfig::new("https://example.com", "key")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }
}
