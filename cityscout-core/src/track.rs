//! Track assignment for candidate venues.
//!
//! Every venue belongs to exactly one ranking track. The assignment is
//! driven by two vocabularies of category tags; venues matching neither fall
//! back to whichever signal they actually carry (a positive rating or not).

use std::collections::HashSet;

/// The ranking track a venue is assigned to.
///
/// Tracks are mutually exclusive: a venue is ranked either by its rating
/// signal or by semantic similarity, never both.
///
/// # Examples
/// ```
/// use cityscout_core::Track;
///
/// assert_eq!(Track::Rated.as_str(), "rated");
/// assert_eq!(Track::Semantic.to_string(), "semantic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Track {
    /// Ranked by a popularity-weighted rating score.
    Rated,
    /// Ranked by embedding similarity against a free-text query.
    Semantic,
}

impl Track {
    /// Return the track as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use cityscout_core::Track;
    ///
    /// assert_eq!(Track::Semantic.as_str(), "semantic");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rated => "rated",
            Self::Semantic => "semantic",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-tag vocabularies deciding track membership.
///
/// The vocabularies are configuration data, not logic: a deployment supplies
/// its own tag sets without touching the classification algorithm. The
/// rated vocabulary takes priority because commercial venues nearly always
/// carry a meaningful rating signal.
///
/// # Examples
/// ```
/// use cityscout_core::{Track, TrackVocabulary};
///
/// let vocabulary = TrackVocabulary::default();
/// assert_eq!(vocabulary.classify(&["museum"], 0.0), Track::Semantic);
/// assert_eq!(vocabulary.classify(&["restaurant"], 0.0), Track::Rated);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackVocabulary {
    rated: HashSet<String>,
    semantic: HashSet<String>,
}

impl TrackVocabulary {
    /// Build a vocabulary from explicit tag sets.
    ///
    /// # Examples
    /// ```
    /// use cityscout_core::{Track, TrackVocabulary};
    ///
    /// let vocabulary = TrackVocabulary::new(["inn"], ["shrine"]);
    /// assert_eq!(vocabulary.classify(&["inn"], 0.0), Track::Rated);
    /// ```
    pub fn new<R, S>(rated: R, semantic: S) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            rated: rated.into_iter().map(Into::into).collect(),
            semantic: semantic.into_iter().map(Into::into).collect(),
        }
    }

    /// Assign a track to a venue from its tags and rating.
    ///
    /// The checks are ordered and the first match wins:
    /// 1. any tag in the rated vocabulary assigns [`Track::Rated`];
    /// 2. otherwise any tag in the semantic vocabulary assigns
    ///    [`Track::Semantic`];
    /// 3. otherwise the venue is unlabelled and falls back on its rating:
    ///    a positive rating assigns [`Track::Rated`], anything else
    ///    [`Track::Semantic`].
    ///
    /// The ordering means a venue tagged with entries from both
    /// vocabularies lands in the rated track.
    #[must_use]
    pub fn classify<T: AsRef<str>>(&self, tags: &[T], rating: f32) -> Track {
        if tags.iter().any(|tag| self.rated.contains(tag.as_ref())) {
            return Track::Rated;
        }
        if tags.iter().any(|tag| self.semantic.contains(tag.as_ref())) {
            return Track::Semantic;
        }
        if rating > 0.0 {
            Track::Rated
        } else {
            Track::Semantic
        }
    }

    /// Number of tags in the rated vocabulary.
    #[must_use]
    pub fn rated_len(&self) -> usize {
        self.rated.len()
    }

    /// Number of tags in the semantic vocabulary.
    #[must_use]
    pub fn semantic_len(&self) -> usize {
        self.semantic.len()
    }
}

impl Default for TrackVocabulary {
    /// The stock vocabulary: dining, lodging, retail, and services venues
    /// rank by rating; worship sites, museums, parks, and natural or
    /// historic landmarks rank semantically.
    fn default() -> Self {
        Self::new(
            [
                "restaurant",
                "cafe",
                "lodging",
                "hotel",
                "food",
                "meal_takeaway",
                "shopping_mall",
                "store",
                "spa",
                "gym",
                "entertainment",
                "night_club",
                "bar",
                "movie_theater",
                "bowling_alley",
                "beauty_salon",
                "hair_care",
                "car_wash",
                "car_rental",
                "real_estate_agency",
                "lawyer",
                "dentist",
                "doctor",
                "veterinary_care",
                "pet_store",
                "hardware_store",
                "electronics_store",
            ],
            [
                "temple",
                "church",
                "mosque",
                "synagogue",
                "hindu_temple",
                "tourist_attraction",
                "museum",
                "park",
                "natural_feature",
                "establishment",
                "point_of_interest",
                "place_of_worship",
                "historical_site",
                "monument",
                "landmark",
                "fort",
                "palace",
                "art_gallery",
                "library",
                "theater",
                "stadium",
                "aquarium",
                "zoo",
                "botanical_garden",
                "national_park",
                "beach",
                "mountain",
                "lake",
                "river",
                "waterfall",
                "cave",
                "volcano",
            ],
        )
    }
}
