//! Semantic ranking: per-request embeddings and cosine ordering.

use cityscout_core::{EmbedError, Embedder, Embedding, SimilarVenue, Track, VenueRecord};

use crate::sort_descending;

/// Per-request embeddings for semantic-track records.
///
/// Entries are keyed by the record's index in the caller's slice, so the
/// pairing between a record and its vector survives the track filtering.
/// The index is stateless across requests: it is rebuilt from scratch each
/// time and holds no cache.
///
/// # Examples
///
/// ```
/// use cityscout_core::test_support::LetterFrequencyEmbedder;
/// use cityscout_core::{RawVenue, TrackVocabulary, classify_and_build};
/// use cityscout_ranker::EmbeddingIndex;
///
/// let records = classify_and_build(Vec::new(), &TrackVocabulary::default());
/// let index = EmbeddingIndex::build(&records, &LetterFrequencyEmbedder).expect("embed");
/// assert!(index.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingIndex {
    entries: Vec<(usize, Embedding)>,
}

impl EmbeddingIndex {
    /// Embed the descriptions of all semantic-track records.
    ///
    /// Rated-track records are skipped; an input with no semantic records
    /// produces an empty index, not an error. Embeddings are computed in
    /// one batch through [`Embedder::encode_batch`].
    ///
    /// # Errors
    /// Propagates the embedder's [`EmbedError`] unchanged; no partial
    /// index is returned.
    pub fn build(records: &[VenueRecord], embedder: &dyn Embedder) -> Result<Self, EmbedError> {
        let semantic: Vec<(usize, &str)> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.track == Track::Semantic)
            .map(|(position, record)| (position, record.description.as_str()))
            .collect();
        if semantic.is_empty() {
            return Ok(Self {
                entries: Vec::new(),
            });
        }
        let descriptions: Vec<&str> = semantic.iter().map(|(_, text)| *text).collect();
        let vectors = embedder.encode_batch(&descriptions)?;
        log::debug!("embedded {} semantic-track descriptions", vectors.len());
        Ok(Self {
            entries: semantic
                .iter()
                .map(|(position, _)| *position)
                .zip(vectors)
                .collect(),
        })
    }

    /// Iterate over `(record index, embedding)` pairs.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = (usize, &[f32])> {
        self.entries
            .iter()
            .map(|(position, vector)| (*position, vector.as_slice()))
    }

    /// Number of embedded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the index holds any embeddings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank semantic-track venues by similarity to a free-text query.
///
/// Filters `records` to the semantic track; an empty track yields
/// `Ok(vec![])` without touching the embedder. Otherwise the query and all
/// descriptions are embedded with the same model, candidates are ordered
/// descending by cosine similarity, and the list is truncated to `top_k`.
/// Similarities stay in `[-1.0, 1.0]` and no minimum is applied: when
/// fewer than `top_k` strong matches exist the caller sees the weak ones
/// rather than results borrowed from the rated track.
///
/// # Errors
/// Propagates the embedder's [`EmbedError`] unchanged.
pub fn rank_semantic(
    records: &[VenueRecord],
    query: &str,
    top_k: usize,
    embedder: &dyn Embedder,
) -> Result<Vec<SimilarVenue>, EmbedError> {
    if !records
        .iter()
        .any(|record| record.track == Track::Semantic)
    {
        return Ok(Vec::new());
    }
    let query_vector = embedder.encode(query)?;
    let index = EmbeddingIndex::build(records, embedder)?;

    let mut similar: Vec<SimilarVenue> = index
        .entries()
        .filter_map(|(position, vector)| {
            records.get(position).map(|record| SimilarVenue {
                venue: record.clone(),
                similarity: cosine_similarity(&query_vector, vector),
            })
        })
        .collect();
    sort_descending(&mut similar, |venue| venue.similarity);
    similar.truncate(top_k);
    Ok(similar)
}

/// Cosine of the angle between two vectors, in `[-1.0, 1.0]`.
///
/// Returns `0.0` for zero-norm or length-mismatched inputs rather than
/// producing a NaN.
#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity is a dot product over vector norms"
)]
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}
