//! Combine ranker output with the track census.

use cityscout_core::{Recommendations, ScoredVenue, SimilarVenue, TrackStats, VenueRecord};

/// Assemble the caller-facing result from whichever ranker(s) ran.
///
/// The statistics are computed from the full classified `records` set, so
/// they reflect the true population split regardless of which ranker
/// executed or how aggressively the results were truncated. The aggregator
/// never synthesizes results: a track whose ranker did not run (or whose
/// results the caller discarded) simply arrives empty.
///
/// # Examples
///
/// ```
/// use cityscout_ranker::aggregate;
///
/// let result = aggregate(&[], Vec::new(), Vec::new());
/// assert_eq!(result.stats.total, 0);
/// assert!(result.rated.is_empty());
/// assert!(result.semantic.is_empty());
/// ```
#[must_use]
pub fn aggregate(
    records: &[VenueRecord],
    rated_results: Vec<ScoredVenue>,
    semantic_results: Vec<SimilarVenue>,
) -> Recommendations {
    let stats = TrackStats::census(records);
    log::info!(
        "aggregated {} venues ({} rated, {} semantic)",
        stats.total,
        stats.rated_count,
        stats.semantic_count
    );
    Recommendations {
        rated: rated_results,
        semantic: semantic_results,
        stats,
    }
}
