//! Geocoding API response types.
//!
//! The geocoding endpoint answers with a `status` string, an optional
//! `error_message`, and a list of candidate results carrying coordinates.
//! Only the fields the provider reads are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// Geocoding API response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// Status code from the service.
    ///
    /// Common values:
    /// - `"OK"` - at least one result was found
    /// - `"ZERO_RESULTS"` - the query matched nothing
    /// - `"REQUEST_DENIED"` - the API key was rejected
    /// - `"OVER_QUERY_LIMIT"` - quota exhausted
    pub status: String,

    /// Optional error detail when `status` is not `"OK"`.
    pub error_message: Option<String>,

    /// Candidate matches, best first.
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

impl GeocodeResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }

    /// Check if the response is a well-formed "nothing found" answer.
    #[must_use]
    pub fn is_zero_results(&self) -> bool {
        self.status == "ZERO_RESULTS"
    }
}

/// One geocoding candidate.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    /// Geometry block carrying the coordinates.
    pub geometry: Geometry,
}

/// Geometry block of a geocoding candidate.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// Resolved coordinates.
    pub location: LatLng,
}

/// A latitude/longitude pair as the service spells it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}
