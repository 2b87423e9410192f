//! Ranking engine for Cityscout venue records.
//!
//! The crate provides the two ranking tracks and the result aggregation
//! contract:
//! - **Rated ranking** scores venues by `rating * ln(1 + review_count)`,
//!   rewarding a high rating backed by a credible review sample while
//!   compressing the influence of review-count outliers.
//! - **Semantic ranking** embeds a free-text query and each semantic-track
//!   venue's description with the caller's
//!   [`Embedder`](cityscout_core::Embedder), orders candidates by cosine
//!   similarity, and truncates to the requested top-K.
//! - **Aggregation** combines whichever ranker(s) ran with the track census
//!   of the full record set.
//!
//! Both rankers are pure functions of their inputs: ranking the same
//! immutable record slice twice yields identical ordered results.
//!
//! # Examples
//!
//! ```
//! use cityscout_core::{RawVenue, TrackVocabulary, classify_and_build};
//! use cityscout_ranker::{aggregate, rank_rated};
//!
//! let raw = RawVenue {
//!     name: Some("Harbour Grill".into()),
//!     vicinity: None,
//!     types: vec!["restaurant".into()],
//!     rating: Some(4.5),
//!     user_ratings_total: Some(200),
//! };
//! let records = classify_and_build(vec![raw], &TrackVocabulary::default());
//! let rated = rank_rated(&records, 10);
//! let result = aggregate(&records, rated, Vec::new());
//! assert_eq!(result.stats.rated_count, 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use cityscout_core::{ScoredVenue, Track, VenueRecord};

mod aggregate;
mod semantic;

pub use aggregate::aggregate;
pub use semantic::{EmbeddingIndex, cosine_similarity, rank_semantic};

/// Rank rated-track venues by popularity-weighted score.
///
/// Filters `records` to the rated track, scores each venue, sorts
/// descending by score, and truncates to `top_k`. An empty rated track
/// yields an empty vector, not an error. Ties keep the input order; the
/// tie order is implementation-defined and callers must not rely on it.
///
/// # Examples
///
/// ```
/// use cityscout_core::{RawVenue, TrackVocabulary, classify_and_build};
/// use cityscout_ranker::rank_rated;
///
/// let records = classify_and_build(Vec::new(), &TrackVocabulary::default());
/// assert!(rank_rated(&records, 10).is_empty());
/// ```
#[must_use]
pub fn rank_rated(records: &[VenueRecord], top_k: usize) -> Vec<ScoredVenue> {
    let mut scored: Vec<ScoredVenue> = records
        .iter()
        .filter(|record| record.track == Track::Rated)
        .map(|record| ScoredVenue {
            venue: record.clone(),
            score: weighted_score(record.rating, record.review_count),
        })
        .collect();
    log::debug!("scored {} rated-track venues", scored.len());
    sort_descending(&mut scored, |venue| venue.score);
    scored.truncate(top_k);
    scored
}

/// Compute the popularity-weighted score for one venue.
///
/// A raw rating is unreliable with few reviews; multiplying by
/// `ln(1 + review_count)` rewards venues with both a high rating and a
/// credible sample size, with logarithmic rather than linear growth in the
/// review count.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "popularity weighting multiplies the rating by a log-compressed review count"
)]
fn weighted_score(rating: f32, review_count: u32) -> f32 {
    rating * (review_count as f32).ln_1p()
}

/// Stable descending sort by a float key.
///
/// Non-finite keys sort below finite ones via `total_cmp`, and the stable
/// sort keeps input order for ties.
pub(crate) fn sort_descending<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> f32,
{
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
}

#[cfg(test)]
mod tests;
