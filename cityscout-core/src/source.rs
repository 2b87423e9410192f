//! Fetch raw venue records from a places directory.
//!
//! The `VenueSource` trait abstracts the directory collaborator. The raw
//! payload shape is owned by the directory; the engine reads it once while
//! building [`VenueRecord`](crate::VenueRecord)s and never mutates it.

use geo::Coord;
use thiserror::Error;

/// A venue as returned by the places directory, before normalisation.
///
/// Every field except `types` is optional; absent fields are recovered with
/// documented defaults when the record is normalised.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawVenue {
    /// Venue name.
    pub name: Option<String>,
    /// Address-like field, typically a street or neighbourhood.
    pub vicinity: Option<String>,
    /// Free-text category tags, order preserved from the directory.
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<String>,
    /// Star rating.
    pub rating: Option<f32>,
    /// Number of reviews behind the rating.
    pub user_ratings_total: Option<u32>,
}

/// Errors raised while fetching venues from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VenueSourceError {
    /// The directory request exceeded the configured timeout.
    #[error("venue search request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested endpoint.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The directory answered with an HTTP error status.
    #[error("venue search request to {url} failed with status {status}: {message}")]
    Http {
        /// Requested endpoint.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the transport layer.
        message: String,
    },
    /// The directory could not be reached.
    #[error("venue search request to {url} failed: {message}")]
    Network {
        /// Requested endpoint.
        url: String,
        /// Error detail from the transport layer.
        message: String,
    },
    /// The directory reported a failure of its own.
    #[error("places directory returned {status}: {message}")]
    Service {
        /// Service status code (e.g. `"OVER_QUERY_LIMIT"`).
        status: String,
        /// Service-provided detail.
        message: String,
    },
    /// The response payload could not be interpreted.
    #[error("failed to parse venue search response: {message}")]
    Parse {
        /// Parse failure detail.
        message: String,
    },
}

/// Fetch venues near a location.
///
/// Implementations must be thread-safe (`Send` + `Sync`). A directory
/// backed by a paginated API is expected to follow its own pagination
/// internally and cap the combined result at `max_results`.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use cityscout_core::{RawVenue, VenueSource, VenueSourceError};
///
/// struct EmptySource;
///
/// impl VenueSource for EmptySource {
///     fn search_nearby(
///         &self,
///         _location: Coord<f64>,
///         _category: &str,
///         _max_results: usize,
///     ) -> Result<Vec<RawVenue>, VenueSourceError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let venues = EmptySource
///     .search_nearby(Coord { x: 0.0, y: 0.0 }, "museum", 60)
///     .expect("search");
/// assert!(venues.is_empty());
/// ```
pub trait VenueSource: Send + Sync {
    /// Fetch up to `max_results` venues of `category` near `location`.
    ///
    /// An empty result set is a valid answer, not an error.
    ///
    /// # Errors
    /// Returns [`VenueSourceError`] when the directory fails; failures
    /// propagate to the caller unchanged.
    fn search_nearby(
        &self,
        location: Coord<f64>,
        category: &str,
        max_results: usize,
    ) -> Result<Vec<RawVenue>, VenueSourceError>;
}
