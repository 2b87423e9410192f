//! Facade crate for the Cityscout recommendation engine.
//!
//! This crate re-exports the core domain types and ranking operations, and
//! exposes the optional HTTP collaborator implementations behind a feature
//! flag.

#![forbid(unsafe_code)]

pub use cityscout_core::{
    CategoryMap, EmbedError, Embedder, Embedding, GeocodeError, Geocoder, RawVenue,
    Recommendations, ScoredVenue, SimilarVenue, Track, TrackStats, TrackVocabulary, VenueRecord,
    VenueSource, VenueSourceError, classify_and_build,
};

pub use cityscout_ranker::{EmbeddingIndex, aggregate, rank_rated, rank_semantic};

#[cfg(feature = "http")]
pub use cityscout_data::{
    embed::{HttpEmbedder, HttpEmbedderConfig},
    geocode::{HttpGeocoder, HttpGeocoderConfig},
    places::{HttpVenueSource, HttpVenueSourceConfig},
};
