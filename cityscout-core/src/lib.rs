//! Core domain types for the Cityscout engine.
//!
//! Venues fetched from a places directory are normalised into
//! [`VenueRecord`] values, each assigned to exactly one ranking track by a
//! configurable [`TrackVocabulary`]. The collaborator traits ([`Geocoder`],
//! [`VenueSource`], [`Embedder`]) describe the external services the engine
//! consumes; implementations live outside this crate so the domain logic
//! stays testable in isolation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod embed;
mod geocode;
mod recommend;
mod source;
mod track;
mod venue;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::CategoryMap;
pub use embed::{EmbedError, Embedder, Embedding};
pub use geocode::{GeocodeError, Geocoder};
pub use recommend::{Recommendations, ScoredVenue, SimilarVenue, TrackStats};
pub use source::{RawVenue, VenueSource, VenueSourceError};
pub use track::{Track, TrackVocabulary};
pub use venue::{VenueRecord, classify_and_build};
