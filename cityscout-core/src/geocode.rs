//! Resolve a city name to coordinates.
//!
//! The `Geocoder` trait abstracts the geocoding collaborator. Coordinates
//! are WGS84 with `x = longitude` and `y = latitude`.

use geo::Coord;
use thiserror::Error;

/// Errors raised while resolving a city name.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    /// The city could not be resolved to coordinates.
    #[error("no coordinates found for city '{city}'")]
    NotFound {
        /// The name that failed to resolve.
        city: String,
    },
    /// The geocoding request exceeded the configured timeout.
    #[error("geocoding request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested endpoint.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The geocoding service answered with an HTTP error status.
    #[error("geocoding request to {url} failed with status {status}: {message}")]
    Http {
        /// Requested endpoint.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the transport layer.
        message: String,
    },
    /// The geocoding service could not be reached.
    #[error("geocoding request to {url} failed: {message}")]
    Network {
        /// Requested endpoint.
        url: String,
        /// Error detail from the transport layer.
        message: String,
    },
    /// The geocoding service reported a failure of its own.
    #[error("geocoding service returned {status}: {message}")]
    Service {
        /// Service status code (e.g. `"REQUEST_DENIED"`).
        status: String,
        /// Service-provided detail.
        message: String,
    },
    /// The response payload could not be interpreted.
    #[error("failed to parse geocoding response: {message}")]
    Parse {
        /// Parse failure detail.
        message: String,
    },
}

/// Resolve city names to coordinates.
///
/// Implementations must be thread-safe (`Send` + `Sync`).
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use cityscout_core::{GeocodeError, Geocoder};
///
/// struct FixedGeocoder;
///
/// impl Geocoder for FixedGeocoder {
///     fn geocode(&self, _city: &str) -> Result<Coord<f64>, GeocodeError> {
///         Ok(Coord { x: 75.86, y: 22.72 })
///     }
/// }
///
/// let location = FixedGeocoder.geocode("Indore").expect("resolve");
/// assert_eq!(location.y, 22.72);
/// ```
pub trait Geocoder: Send + Sync {
    /// Resolve `city` to WGS84 coordinates.
    ///
    /// # Errors
    /// Returns [`GeocodeError::NotFound`] when the city cannot be
    /// resolved, and transport variants for service failures.
    fn geocode(&self, city: &str) -> Result<Coord<f64>, GeocodeError>;
}
