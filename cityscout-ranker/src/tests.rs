//! Unit coverage for ranking helpers.
#![forbid(unsafe_code)]

use cityscout_core::test_support::{FailingEmbedder, LetterFrequencyEmbedder};
use cityscout_core::{EmbedError, RawVenue, Track, TrackVocabulary, VenueRecord, classify_and_build};
use rstest::rstest;

use crate::{EmbeddingIndex, aggregate, cosine_similarity, rank_rated, rank_semantic};

fn rated_venue(name: &str, rating: f32, reviews: u32) -> RawVenue {
    RawVenue {
        name: Some(name.to_owned()),
        vicinity: None,
        types: vec!["restaurant".to_owned()],
        rating: Some(rating),
        user_ratings_total: Some(reviews),
    }
}

fn semantic_venue(name: &str, types: &[&str]) -> RawVenue {
    RawVenue {
        name: Some(name.to_owned()),
        vicinity: None,
        types: types.iter().map(|t| (*t).to_owned()).collect(),
        rating: None,
        user_ratings_total: None,
    }
}

fn build(raw: Vec<RawVenue>) -> Vec<VenueRecord> {
    classify_and_build(raw, &TrackVocabulary::default())
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test reproduces the weighted-score reference values"
)]
fn rated_ranking_orders_by_weighted_score() {
    // 4.5 * ln(201) ~ 23.9 beats 4.8 * ln(6) ~ 8.6 despite the lower
    // raw rating.
    let records = build(vec![
        rated_venue("Busy", 4.5, 200),
        rated_venue("Sparse", 4.8, 5),
    ]);

    let ranked = rank_rated(&records, 2);

    let names: Vec<_> = ranked
        .iter()
        .filter_map(|scored| scored.venue.name.as_deref())
        .collect();
    assert_eq!(names, vec!["Busy", "Sparse"]);
    let top = ranked.first().expect("top result");
    assert!((top.score - 4.5_f32 * 201.0_f32.ln()).abs() < 0.001);
    let second = ranked.get(1).expect("second result");
    assert!((second.score - 4.8_f32 * 6.0_f32.ln()).abs() < 0.001);
}

#[rstest]
fn rated_ranking_truncates_to_top_k() {
    let records = build(vec![
        rated_venue("A", 4.0, 100),
        rated_venue("B", 3.5, 50),
        rated_venue("C", 4.9, 10),
    ]);

    let ranked = rank_rated(&records, 2);

    assert_eq!(ranked.len(), 2);
}

#[rstest]
fn rated_ranking_excludes_semantic_track() {
    let records = build(vec![
        rated_venue("Grill", 4.0, 40),
        semantic_venue("Shrine", &["place_of_worship"]),
    ]);

    let ranked = rank_rated(&records, 10);

    assert_eq!(ranked.len(), 1);
    assert!(
        ranked
            .iter()
            .all(|scored| scored.venue.track == Track::Rated)
    );
}

#[rstest]
fn rated_ranking_of_empty_track_is_empty() {
    let records = build(vec![semantic_venue("Shrine", &["temple"])]);
    assert!(rank_rated(&records, 10).is_empty());
}

#[rstest]
fn zero_review_venue_scores_zero() {
    let records = build(vec![rated_venue("New", 5.0, 0)]);
    let ranked = rank_rated(&records, 1);
    let top = ranked.first().expect("one result");
    assert_eq!(top.score, 0.0);
}

#[rstest]
fn semantic_ranking_prefers_query_overlap() {
    let records = build(vec![
        semantic_venue("Golden Temple", &["temple", "place_of_worship"]),
        semantic_venue("Riverside Park", &["park"]),
    ]);

    let ranked =
        rank_semantic(&records, "temple", 2, &LetterFrequencyEmbedder).expect("semantic ranking");

    assert_eq!(ranked.len(), 2);
    let top = ranked.first().expect("top result");
    assert_eq!(top.venue.name.as_deref(), Some("Golden Temple"));
    assert!(top.similarity > 0.0);
}

#[rstest]
fn semantic_ranking_of_empty_track_skips_embedder() {
    // A failing embedder proves the empty track short-circuits.
    let records = build(vec![rated_venue("Grill", 4.0, 40)]);
    let failing = FailingEmbedder::new(EmbedError::Service {
        message: "model offline".to_owned(),
    });

    let ranked = rank_semantic(&records, "temple", 5, &failing).expect("empty track");

    assert!(ranked.is_empty());
}

#[rstest]
fn semantic_ranking_propagates_embedder_failure() {
    let records = build(vec![semantic_venue("Shrine", &["temple"])]);
    let failing = FailingEmbedder::new(EmbedError::Service {
        message: "model offline".to_owned(),
    });

    let err = rank_semantic(&records, "temple", 5, &failing).expect_err("should fail");

    assert_eq!(
        err,
        EmbedError::Service {
            message: "model offline".to_owned(),
        }
    );
}

#[rstest]
fn semantic_ranking_is_deterministic() {
    let records = build(vec![
        semantic_venue("Golden Temple", &["temple"]),
        semantic_venue("Old Fort", &["fort", "landmark"]),
        semantic_venue("City Museum", &["museum"]),
    ]);

    let first = rank_semantic(&records, "historic fort", 3, &LetterFrequencyEmbedder).expect("rank");
    let second = rank_semantic(&records, "historic fort", 3, &LetterFrequencyEmbedder).expect("rank");

    assert_eq!(first, second);
}

#[rstest]
fn embedding_index_keys_entries_by_record_position() {
    let records = build(vec![
        rated_venue("Grill", 4.0, 40),
        semantic_venue("Shrine", &["temple"]),
        semantic_venue("Park", &["park"]),
    ]);

    let index = EmbeddingIndex::build(&records, &LetterFrequencyEmbedder).expect("embed");

    let positions: Vec<_> = index.entries().map(|(position, _)| position).collect();
    assert_eq!(positions, vec![1, 2]);
    assert_eq!(index.len(), 2);
}

#[rstest]
fn embedding_index_of_empty_input_is_empty() {
    let index = EmbeddingIndex::build(&[], &LetterFrequencyEmbedder).expect("embed");
    assert!(index.is_empty());
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test compares cosine values against hand-computed references"
)]
fn cosine_similarity_reference_values() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]), 1.0);
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]), -1.0);
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    let oblique = cosine_similarity(&[1.0, 1.0], &[1.0, 0.0]);
    assert!((oblique - std::f32::consts::FRAC_1_SQRT_2).abs() < 0.000_1);
}

#[rstest]
fn cosine_similarity_guards_degenerate_inputs() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
}

#[rstest]
fn aggregate_reports_census_independent_of_truncation() {
    let records = build(vec![
        rated_venue("A", 4.0, 100),
        rated_venue("B", 3.5, 50),
        semantic_venue("Shrine", &["temple"]),
    ]);
    let rated = rank_rated(&records, 1);

    let result = aggregate(&records, rated, Vec::new());

    assert_eq!(result.rated.len(), 1);
    assert_eq!(result.stats.total, 3);
    assert_eq!(result.stats.rated_count, 2);
    assert_eq!(result.stats.semantic_count, 1);
}

#[rstest]
fn empty_input_yields_empty_everything() {
    let records = build(Vec::new());

    let rated = rank_rated(&records, 10);
    let semantic =
        rank_semantic(&records, "temple", 10, &LetterFrequencyEmbedder).expect("empty input");
    let result = aggregate(&records, rated, semantic);

    assert!(result.rated.is_empty());
    assert!(result.semantic.is_empty());
    assert_eq!(result.stats.total, 0);
    assert_eq!(result.stats.rated_count, 0);
    assert_eq!(result.stats.semantic_count, 0);
}

#[rstest]
fn aggregate_never_synthesizes_results() {
    let records = build(vec![semantic_venue("Shrine", &["temple"])]);

    let result = aggregate(&records, Vec::new(), Vec::new());

    assert!(result.rated.is_empty());
    assert!(result.semantic.is_empty());
    assert_eq!(result.stats.semantic_count, 1);
}
