//! HTTP-based `Geocoder` using a places-directory geocoding endpoint.
//!
//! This module provides [`HttpGeocoder`], an implementation of
//! [`cityscout_core::Geocoder`] that resolves city names to WGS84
//! coordinates via HTTP.
//!
//! # Architecture
//!
//! The [`Geocoder`](cityscout_core::Geocoder) trait is synchronous to keep
//! the core library embeddable in synchronous contexts. This provider
//! bridges the async HTTP calls to the sync interface by blocking on a
//! Tokio runtime internally.
//!
//! # Example
//!
//! ```no_run
//! use cityscout_data::geocode::{HttpGeocoder, HttpGeocoderConfig};
//! use cityscout_core::Geocoder;
//!
//! let config = HttpGeocoderConfig::new("https://maps.example.com", "api-key");
//! let geocoder = HttpGeocoder::with_config(config)?;
//! let location = geocoder.geocode("Indore")?;
//! println!("{}, {}", location.y, location.x);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod wire;

pub use provider::{DEFAULT_USER_AGENT, HttpGeocoder, HttpGeocoderConfig};
