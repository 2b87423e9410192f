//! Nearby-search API response types.

use cityscout_core::RawVenue;
use serde::Deserialize;

/// Nearby-search API response.
///
/// A page of results plus an optional continuation token. The venue
/// payload itself deserialises straight into
/// [`RawVenue`](cityscout_core::RawVenue); unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    /// Status code from the service.
    ///
    /// Common values:
    /// - `"OK"` - the page contains results
    /// - `"ZERO_RESULTS"` - nothing matched the search
    /// - `"INVALID_REQUEST"` - malformed parameters or a stale page token
    /// - `"OVER_QUERY_LIMIT"` - quota exhausted
    pub status: String,

    /// Optional error detail when `status` is not `"OK"`.
    pub error_message: Option<String>,

    /// Venues on this page.
    #[serde(default)]
    pub results: Vec<RawVenue>,

    /// Token for the next page, when more results exist.
    pub next_page_token: Option<String>,
}

impl NearbySearchResponse {
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
