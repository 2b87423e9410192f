//! HTTP-based `VenueSource` using a places-directory nearby search.
//!
//! This module provides [`HttpVenueSource`], an implementation of
//! [`cityscout_core::VenueSource`] that fetches raw venues over HTTP,
//! following the directory's page-token pagination until the requested
//! result cap is reached.
//!
//! # Example
//!
//! ```no_run
//! use cityscout_data::places::{HttpVenueSource, HttpVenueSourceConfig};
//! use cityscout_core::VenueSource;
//! use geo::Coord;
//!
//! let config = HttpVenueSourceConfig::new("https://maps.example.com", "api-key");
//! let source = HttpVenueSource::with_config(config)?;
//! let venues = source.search_nearby(Coord { x: 75.86, y: 22.72 }, "museum", 60)?;
//! println!("fetched {} venues", venues.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod wire;

pub use provider::{DEFAULT_USER_AGENT, HttpVenueSource, HttpVenueSourceConfig};
