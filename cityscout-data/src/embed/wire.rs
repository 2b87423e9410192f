//! Embedding service request and response types.

use serde::{Deserialize, Serialize};

/// Embedding request body.
///
/// Texts are batched: one request carries every description the caller
/// needs embedded, and the response preserves their order.
#[derive(Debug, Serialize)]
pub struct EmbedRequest<'a> {
    /// Model identifier the service should encode with.
    pub model: &'a str,
    /// Texts to encode, in order.
    pub input: &'a [&'a str],
}

/// Embedding service response.
///
/// A successful response carries one vector per input text, in input
/// order. Failures carry an `error` string instead.
#[derive(Debug, Deserialize)]
pub struct EmbedResponse {
    /// One embedding per input text.
    pub embeddings: Option<Vec<Vec<f32>>>,
    /// Service-side failure detail.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialise_request_body() {
        let request = EmbedRequest {
            model: "all-MiniLM-L6-v2",
            input: &["temple", "park"],
        };

        let json = serde_json::to_value(&request).expect("should serialise");

        assert_eq!(json["model"], "all-MiniLM-L6-v2");
        assert_eq!(json["input"][0], "temple");
        assert_eq!(json["input"][1], "park");
    }

    #[test]
    fn deserialise_success_response() {
        let json = r#"{"embeddings": [[0.1, 0.2], [0.3, 0.4]]}"#;

        let response: EmbedResponse = serde_json::from_str(json).expect("should deserialise");

        let embeddings = response.embeddings.expect("should have embeddings");
        assert_eq!(embeddings.len(), 2);
        assert!(response.error.is_none());
    }

    #[test]
    fn deserialise_error_response() {
        let json = r#"{"error": "unknown model"}"#;

        let response: EmbedResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.embeddings.is_none());
        assert_eq!(response.error.as_deref(), Some("unknown model"));
    }
}
