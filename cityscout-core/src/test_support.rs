//! Test-only, in-memory collaborator implementations used by unit and
//! behaviour tests.

use geo::Coord;

use crate::{
    EmbedError, Embedder, Embedding, GeocodeError, Geocoder, RawVenue, VenueSource,
    VenueSourceError,
};

/// Embedding width produced by [`LetterFrequencyEmbedder`].
pub const LETTER_DIMENSION: usize = 26;

/// Deterministic embedder counting letter frequencies into a 26-wide vector.
///
/// Texts sharing words produce vectors with high cosine similarity, which
/// is enough signal for ranking tests without a real model. The embedder is
/// a pure function of its input, so repeated calls are bitwise identical on
/// every platform.
#[derive(Debug, Default, Copy, Clone)]
pub struct LetterFrequencyEmbedder;

impl Embedder for LetterFrequencyEmbedder {
    fn encode(&self, text: &str) -> Result<Embedding, EmbedError> {
        let mut vector = vec![0.0_f32; LETTER_DIMENSION];
        for letter in text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
        {
            let bucket = (letter as usize) - ('a' as usize);
            if let Some(weight) = vector.get_mut(bucket) {
                *weight += 1.0;
            }
        }
        Ok(vector)
    }
}

/// Embedder that fails every call with a configured error.
#[derive(Debug, Clone)]
pub struct FailingEmbedder {
    error: EmbedError,
}

impl FailingEmbedder {
    /// Create an embedder returning `error` for any input.
    #[must_use]
    pub fn new(error: EmbedError) -> Self {
        Self { error }
    }
}

impl Embedder for FailingEmbedder {
    fn encode(&self, _text: &str) -> Result<Embedding, EmbedError> {
        Err(self.error.clone())
    }
}

/// In-memory `VenueSource` returning a fixed set of venues.
///
/// The source ignores the location and category and truncates its
/// configured list at `max_results`, mirroring the directory's cap.
#[derive(Debug, Default, Clone)]
pub struct StaticVenueSource {
    venues: Vec<RawVenue>,
}

impl StaticVenueSource {
    /// Create a source from a collection of venues.
    pub fn with_venues<I>(venues: I) -> Self
    where
        I: IntoIterator<Item = RawVenue>,
    {
        Self {
            venues: venues.into_iter().collect(),
        }
    }
}

impl VenueSource for StaticVenueSource {
    fn search_nearby(
        &self,
        _location: Coord<f64>,
        _category: &str,
        max_results: usize,
    ) -> Result<Vec<RawVenue>, VenueSourceError> {
        Ok(self.venues.iter().take(max_results).cloned().collect())
    }
}

/// Geocoder that resolves every city to one fixed coordinate.
#[derive(Debug, Copy, Clone)]
pub struct FixedGeocoder {
    location: Coord<f64>,
}

impl FixedGeocoder {
    /// Create a geocoder that always answers with `location`.
    #[must_use]
    pub fn at(location: Coord<f64>) -> Self {
        Self { location }
    }
}

impl Default for FixedGeocoder {
    fn default() -> Self {
        Self::at(Coord { x: 0.0, y: 0.0 })
    }
}

impl Geocoder for FixedGeocoder {
    fn geocode(&self, _city: &str) -> Result<Coord<f64>, GeocodeError> {
        Ok(self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_embedder_is_deterministic() {
        let embedder = LetterFrequencyEmbedder;
        let first = embedder.encode("Golden Temple - temple").expect("encode");
        let second = embedder.encode("Golden Temple - temple").expect("encode");
        assert_eq!(first, second);
        assert_eq!(first.len(), LETTER_DIMENSION);
    }

    #[test]
    fn letter_embedder_counts_case_insensitively() {
        let embedder = LetterFrequencyEmbedder;
        let upper = embedder.encode("TEMPLE").expect("encode");
        let lower = embedder.encode("temple").expect("encode");
        assert_eq!(upper, lower);
    }

    #[test]
    fn letter_embedder_ignores_punctuation_and_digits() {
        let embedder = LetterFrequencyEmbedder;
        let plain = embedder.encode("temple").expect("encode");
        let noisy = embedder.encode("temple, 42!").expect("encode");
        assert_eq!(plain, noisy);
    }

    #[test]
    fn static_source_honours_max_results() {
        let source = StaticVenueSource::with_venues(vec![RawVenue::default(); 5]);
        let venues = source
            .search_nearby(Coord { x: 0.0, y: 0.0 }, "park", 3)
            .expect("search");
        assert_eq!(venues.len(), 3);
    }

    #[test]
    fn failing_embedder_returns_configured_error() {
        let embedder = FailingEmbedder::new(EmbedError::Service {
            message: "model offline".to_owned(),
        });
        let err = embedder.encode("anything").expect_err("should fail");
        assert!(matches!(err, EmbedError::Service { .. }));
    }
}
