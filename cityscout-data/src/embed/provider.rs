//! HTTP embedding provider.

use std::time::Duration;

use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use cityscout_core::{EmbedError, Embedder, Embedding};

use super::wire::{EmbedRequest, EmbedResponse};
use crate::ProviderBuildError;

/// Default user agent for embedding requests.
pub const DEFAULT_USER_AGENT: &str = "cityscout-embed/0.1";

/// Default embedding model identifier.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpEmbedder`].
#[derive(Debug, Clone)]
pub struct HttpEmbedderConfig {
    /// Base URL for the embedding service (e.g. `"http://localhost:8100"`).
    pub base_url: String,
    /// Model identifier the service encodes with.
    pub model: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpEmbedderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based embedder posting batched texts to an embedding server.
///
/// The provider implements the synchronous [`Embedder`] trait by blocking
/// on asynchronous HTTP requests internally. It owns a Tokio runtime that
/// is reused across calls. `encode_batch` is overridden to send the whole
/// batch in one request instead of one call per text.
pub struct HttpEmbedder {
    client: Client,
    config: HttpEmbedderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEmbedder")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpEmbedder {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpEmbedderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpEmbedderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Build the embedding endpoint URL.
    fn endpoint_url(&self) -> String {
        format!("{}/embed", self.config.base_url.trim_end_matches('/'))
    }

    /// Encode a batch asynchronously.
    async fn encode_batch_async(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError> {
        let url = self.endpoint_url();
        let body = EmbedRequest {
            model: &self.config.model,
            input: texts,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let embed_response: EmbedResponse =
            response.json().await.map_err(|err| EmbedError::Parse {
                message: err.to_string(),
            })?;

        convert_response(embed_response, texts.len())
    }

    /// Convert a reqwest error to an `EmbedError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> EmbedError {
        if error.is_timeout() {
            return EmbedError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return EmbedError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        EmbedError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Run a future to completion, reusing an ambient multi-threaded
    /// runtime when one exists.
    fn block_on<F, T>(&self, future: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}

/// Convert an embedding response into vectors, checking the count.
fn convert_response(
    response: EmbedResponse,
    expected: usize,
) -> Result<Vec<Embedding>, EmbedError> {
    if let Some(message) = response.error {
        return Err(EmbedError::Service { message });
    }
    let embeddings = response.embeddings.ok_or_else(|| EmbedError::Parse {
        message: "embedding response missing embeddings array".to_string(),
    })?;
    if embeddings.len() != expected {
        return Err(EmbedError::Parse {
            message: format!(
                "embedding response carried {} vectors for {} inputs",
                embeddings.len(),
                expected
            ),
        });
    }
    Ok(embeddings)
}

impl Embedder for HttpEmbedder {
    /// Encode one text into an embedding vector.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must
    /// be multi-threaded (`flavor = "multi_thread"`). From a
    /// `current_thread` runtime the provider falls back to its own internal
    /// runtime, which may block the caller's runtime.
    fn encode(&self, text: &str) -> Result<Embedding, EmbedError> {
        let mut vectors = self.encode_batch(&[text])?;
        vectors.pop().ok_or_else(|| EmbedError::Parse {
            message: "embedding response was empty".to_string(),
        })
    }

    /// Encode a batch of texts in a single request.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.block_on(self.encode_batch_async(texts))
    }
}
