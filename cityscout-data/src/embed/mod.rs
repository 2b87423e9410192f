//! HTTP-based `Embedder` using a sentence-embedding service.
//!
//! This module provides [`HttpEmbedder`], an implementation of
//! [`cityscout_core::Embedder`] that sends texts to an embedding server
//! and receives fixed-length vectors back. The model name is part of the
//! provider configuration; one model configuration is used per deployment
//! so all vectors stay comparable.
//!
//! # Example
//!
//! ```no_run
//! use cityscout_data::embed::{HttpEmbedder, HttpEmbedderConfig};
//! use cityscout_core::Embedder;
//!
//! let config = HttpEmbedderConfig::new("http://localhost:8100")
//!     .with_model("all-MiniLM-L6-v2");
//! let embedder = HttpEmbedder::with_config(config)?;
//! let vector = embedder.encode("quiet riverside temple")?;
//! println!("dimension {}", vector.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod wire;

pub use provider::{DEFAULT_MODEL, DEFAULT_USER_AGENT, HttpEmbedder, HttpEmbedderConfig};
