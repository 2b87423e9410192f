//! Canonical venue records and the builder that produces them.
//!
//! [`classify_and_build`] turns the raw directory payloads into immutable
//! [`VenueRecord`] values carrying everything both ranking tracks need,
//! including the synthesised description used as embedding input.

use crate::source::RawVenue;
use crate::track::{Track, TrackVocabulary};

/// Sentinel used when a venue has no address-like field.
const MISSING_ADDRESS: &str = "N/A";

/// A venue normalised for ranking, immutable after construction.
///
/// Records are request-scoped: they are built fresh for every incoming
/// request and discarded with the response. Missing optional fields on the
/// raw payload are recovered with documented defaults rather than surfaced
/// as errors.
///
/// # Examples
/// ```
/// use cityscout_core::{RawVenue, Track, TrackVocabulary, classify_and_build};
///
/// let raw = RawVenue {
///     name: Some("City Museum".into()),
///     vicinity: None,
///     types: vec!["museum".into(), "point_of_interest".into()],
///     rating: None,
///     user_ratings_total: None,
/// };
/// let records = classify_and_build(vec![raw], &TrackVocabulary::default());
/// let record = records.first().expect("one record");
/// assert_eq!(record.track, Track::Semantic);
/// assert_eq!(record.address, "N/A");
/// assert_eq!(record.description, "City Museum - museum, point_of_interest");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VenueRecord {
    /// Venue name, passed through as-is; absent upstream stays absent.
    pub name: Option<String>,
    /// Address-like field, `"N/A"` when the directory omitted it.
    pub address: String,
    /// Star rating, `0.0` when absent.
    pub rating: f32,
    /// Number of reviews behind the rating, `0` when absent.
    pub review_count: u32,
    /// Raw category tags in source order.
    pub tags: Vec<String>,
    /// Comma-and-space joined tags, for display.
    pub tags_joined: String,
    /// `"{name} - {tags_joined}"`, used only as embedding input.
    pub description: String,
    /// The single ranking track this venue belongs to.
    pub track: Track,
}

impl VenueRecord {
    /// Normalise one raw venue into a record.
    fn from_raw(raw: RawVenue, vocabulary: &TrackVocabulary) -> Self {
        let rating = raw.rating.unwrap_or(0.0);
        let track = vocabulary.classify(&raw.types, rating);
        let tags_joined = raw.types.join(", ");
        let description = format!("{} - {}", raw.name.as_deref().unwrap_or(""), tags_joined);
        Self {
            name: raw.name,
            address: raw.vicinity.unwrap_or_else(|| MISSING_ADDRESS.to_owned()),
            rating,
            review_count: raw.user_ratings_total.unwrap_or(0),
            tags: raw.types,
            tags_joined,
            description,
            track,
        }
    }
}

/// Normalise and classify a batch of raw venues.
///
/// Output order matches input order; ranking happens downstream. No venue
/// is dropped, even when its name is missing — nameless venues still
/// participate in ranking.
///
/// # Examples
/// ```
/// use cityscout_core::{RawVenue, TrackVocabulary, classify_and_build};
///
/// let records = classify_and_build(Vec::new(), &TrackVocabulary::default());
/// assert!(records.is_empty());
/// ```
#[must_use]
pub fn classify_and_build(raw: Vec<RawVenue>, vocabulary: &TrackVocabulary) -> Vec<VenueRecord> {
    raw.into_iter()
        .map(|venue| VenueRecord::from_raw(venue, vocabulary))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn vocabulary() -> TrackVocabulary {
        TrackVocabulary::default()
    }

    fn raw(name: Option<&str>, types: &[&str], rating: Option<f32>, reviews: Option<u32>) -> RawVenue {
        RawVenue {
            name: name.map(str::to_owned),
            vicinity: None,
            types: types.iter().map(|t| (*t).to_owned()).collect(),
            rating,
            user_ratings_total: reviews,
        }
    }

    #[rstest]
    fn applies_documented_defaults(vocabulary: TrackVocabulary) {
        let records = classify_and_build(vec![raw(Some("Spot"), &[], None, None)], &vocabulary);
        let record = records.first().expect("one record");
        assert_eq!(record.address, "N/A");
        assert_eq!(record.rating, 0.0);
        assert_eq!(record.review_count, 0);
        assert_eq!(record.track, Track::Semantic);
    }

    #[rstest]
    fn preserves_tag_order_and_joins(vocabulary: TrackVocabulary) {
        let records = classify_and_build(
            vec![raw(Some("Old Fort"), &["fort", "landmark", "monument"], None, None)],
            &vocabulary,
        );
        let record = records.first().expect("one record");
        assert_eq!(record.tags, vec!["fort", "landmark", "monument"]);
        assert_eq!(record.tags_joined, "fort, landmark, monument");
        assert_eq!(record.description, "Old Fort - fort, landmark, monument");
    }

    #[rstest]
    fn missing_name_is_kept_and_described_empty(vocabulary: TrackVocabulary) {
        let records = classify_and_build(vec![raw(None, &["museum"], None, None)], &vocabulary);
        let record = records.first().expect("nameless venues are not dropped");
        assert_eq!(record.name, None);
        assert_eq!(record.description, " - museum");
    }

    #[rstest]
    fn output_order_matches_input_order(vocabulary: TrackVocabulary) {
        let records = classify_and_build(
            vec![
                raw(Some("B"), &["bar"], Some(4.0), Some(10)),
                raw(Some("A"), &["park"], None, None),
                raw(Some("C"), &["cafe"], Some(3.0), Some(5)),
            ],
            &vocabulary,
        );
        let names: Vec<_> = records.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[rstest]
    fn every_record_lands_in_exactly_one_track(vocabulary: TrackVocabulary) {
        let records = classify_and_build(
            vec![
                raw(Some("Diner"), &["restaurant"], Some(4.2), Some(120)),
                raw(Some("Shrine"), &["place_of_worship"], None, None),
                raw(Some("Mystery"), &["unmapped"], Some(3.1), Some(2)),
                raw(Some("Quiet"), &["unmapped"], None, None),
            ],
            &vocabulary,
        );
        let tracks: Vec<_> = records.iter().map(|r| r.track).collect();
        assert_eq!(
            tracks,
            vec![Track::Rated, Track::Semantic, Track::Rated, Track::Semantic]
        );
    }
}
