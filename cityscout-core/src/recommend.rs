//! Caller-facing result shapes for the dual-track recommendation contract.

use crate::track::Track;
use crate::venue::VenueRecord;

/// A rated-track venue paired with its popularity-weighted score.
///
/// Derived and ephemeral: produced by the rated ranker for a single
/// response, never stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredVenue {
    /// The underlying record.
    pub venue: VenueRecord,
    /// `rating * ln(1 + review_count)`.
    pub score: f32,
}

/// A semantic-track venue paired with its query similarity.
///
/// Similarity is a cosine value in `[-1.0, 1.0]`; low or negative values
/// are not filtered out, so short candidate lists surface weak matches
/// rather than backfilling from the other track.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarVenue {
    /// The underlying record.
    pub venue: VenueRecord,
    /// Cosine similarity between the query and the venue description.
    pub similarity: f32,
}

/// Census of the classified record set.
///
/// Counts always reflect the true population split across tracks,
/// independent of which ranker ran and of any top-K truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackStats {
    /// Total number of classified records.
    pub total: usize,
    /// Records assigned to the rated track.
    pub rated_count: usize,
    /// Records assigned to the semantic track.
    pub semantic_count: usize,
}

impl TrackStats {
    /// Count the track split across a full record set.
    ///
    /// # Examples
    /// ```
    /// use cityscout_core::TrackStats;
    ///
    /// let stats = TrackStats::census(&[]);
    /// assert_eq!(stats.total, 0);
    /// ```
    #[must_use]
    pub fn census(records: &[VenueRecord]) -> Self {
        let rated_count = records
            .iter()
            .filter(|record| record.track == Track::Rated)
            .count();
        Self {
            total: records.len(),
            rated_count,
            semantic_count: records.len() - rated_count,
        }
    }
}

/// The combined result returned to callers.
///
/// Whichever ranker(s) the caller chose to run contribute their ordered
/// top-K lists; the other list stays empty. The statistics are always the
/// full census.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendations {
    /// Rated-track results, descending by score.
    pub rated: Vec<ScoredVenue>,
    /// Semantic-track results, descending by similarity.
    pub semantic: Vec<SimilarVenue>,
    /// Track census over the full classified record set.
    pub stats: TrackStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawVenue, TrackVocabulary, classify_and_build};

    fn record(tags: &[&str], rating: f32) -> VenueRecord {
        let raw = RawVenue {
            name: Some("venue".to_owned()),
            vicinity: None,
            types: tags.iter().map(|t| (*t).to_owned()).collect(),
            rating: Some(rating),
            user_ratings_total: Some(1),
        };
        classify_and_build(vec![raw], &TrackVocabulary::default())
            .pop()
            .expect("one record")
    }

    #[test]
    fn census_counts_both_tracks() {
        let records = vec![
            record(&["restaurant"], 4.0),
            record(&["museum"], 0.0),
            record(&["park"], 0.0),
        ];
        let stats = TrackStats::census(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.rated_count, 1);
        assert_eq!(stats.semantic_count, 2);
    }

    #[test]
    fn census_of_empty_set_is_zero() {
        assert_eq!(TrackStats::census(&[]), TrackStats::default());
    }
}
