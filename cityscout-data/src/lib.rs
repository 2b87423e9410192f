//! HTTP collaborator implementations for the Cityscout engine.
//!
//! Responsibilities:
//! - Implement the core collaborator traits ([`Geocoder`](cityscout_core::Geocoder),
//!   [`VenueSource`](cityscout_core::VenueSource),
//!   [`Embedder`](cityscout_core::Embedder)) against remote services.
//! - Encapsulate each service's wire format behind serde types.
//! - Bridge async HTTP calls to the synchronous trait surface so the engine
//!   stays embeddable in synchronous contexts.
//!
//! Boundaries:
//! - Do not encode domain rules (they live in `cityscout-core` and
//!   `cityscout-ranker`).
//! - Keep blocking I/O off async executors; the providers detect an ambient
//!   Tokio runtime and use `block_in_place` where required.
//!
//! Invariants:
//! - Thread-safe by default; no global mutable state.
//! - Upstream failures map onto the trait error enums without being
//!   retried or suppressed.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod embed;
pub mod geocode;
pub mod places;

/// Errors raised while constructing an HTTP provider.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
