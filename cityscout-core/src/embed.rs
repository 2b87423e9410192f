//! Text embedding for semantic venue matching.
//!
//! The `Embedder` trait abstracts the model that turns text into
//! fixed-length vectors. Any model producing comparable fixed-length
//! vectors satisfies the contract; vectors from different model
//! configurations must never be compared, which is a deployment invariant
//! rather than something this crate defends against.

use thiserror::Error;

/// A fixed-length numeric vector representation of text.
pub type Embedding = Vec<f32>;

/// Errors raised while computing embeddings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// The embedding request exceeded the configured timeout.
    #[error("embedding request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested endpoint.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The embedding service answered with an HTTP error status.
    #[error("embedding request to {url} failed with status {status}: {message}")]
    Http {
        /// Requested endpoint.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the transport layer.
        message: String,
    },
    /// The embedding service could not be reached.
    #[error("embedding request to {url} failed: {message}")]
    Network {
        /// Requested endpoint.
        url: String,
        /// Error detail from the transport layer.
        message: String,
    },
    /// The embedding service reported a failure of its own.
    #[error("embedding service error: {message}")]
    Service {
        /// Service-provided detail.
        message: String,
    },
    /// The response payload could not be interpreted.
    #[error("failed to parse embedding response: {message}")]
    Parse {
        /// Parse failure detail.
        message: String,
    },
}

/// Turn text into a fixed-length vector.
///
/// Implementations must be deterministic for a given model configuration
/// and thread-safe (`Send` + `Sync`) so one embedder can serve many
/// concurrent requests.
///
/// # Examples
///
/// ```
/// use cityscout_core::{EmbedError, Embedder, Embedding};
///
/// struct UnitEmbedder;
///
/// impl Embedder for UnitEmbedder {
///     fn encode(&self, _text: &str) -> Result<Embedding, EmbedError> {
///         Ok(vec![1.0, 0.0])
///     }
/// }
///
/// let embedder = UnitEmbedder;
/// let vectors = embedder.encode_batch(&["a", "b"]).expect("encode");
/// assert_eq!(vectors.len(), 2);
/// ```
pub trait Embedder: Send + Sync {
    /// Encode one text into an embedding vector.
    ///
    /// # Errors
    /// Returns [`EmbedError`] when the underlying model or service fails;
    /// failures propagate to the caller unchanged.
    fn encode(&self, text: &str) -> Result<Embedding, EmbedError>;

    /// Encode a batch of texts, preserving input order.
    ///
    /// The default implementation encodes texts one at a time; providers
    /// backed by a remote service typically override it with a single
    /// batched request.
    ///
    /// # Errors
    /// Returns the first [`EmbedError`] encountered; partial batches are
    /// never returned.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError> {
        texts.iter().map(|text| self.encode(text)).collect()
    }
}
