//! Behavioural coverage for rated-track ranking.

use std::cell::RefCell;

use cityscout_core::{RawVenue, ScoredVenue, Track, TrackVocabulary, VenueRecord, classify_and_build};
use cityscout_ranker::rank_rated;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Records under test for each scenario.
#[fixture]
pub fn records() -> RefCell<Vec<VenueRecord>> {
    RefCell::new(Vec::new())
}

/// Captures the ranking outcome for assertions.
#[fixture]
pub fn ranked() -> RefCell<Vec<ScoredVenue>> {
    RefCell::new(Vec::new())
}

fn rated_raw(name: &str, rating: f32, reviews: u32) -> RawVenue {
    RawVenue {
        name: Some(name.to_owned()),
        vicinity: None,
        types: vec!["restaurant".to_owned()],
        rating: Some(rating),
        user_ratings_total: Some(reviews),
    }
}

fn semantic_raw(name: &str) -> RawVenue {
    RawVenue {
        name: Some(name.to_owned()),
        vicinity: None,
        types: vec!["museum".to_owned()],
        rating: None,
        user_ratings_total: None,
    }
}

#[given("a mixed set of classified venue records")]
fn mixed_records(records: &RefCell<Vec<VenueRecord>>) {
    let raw = vec![
        rated_raw("Sparse", 4.8, 5),
        semantic_raw("City Museum"),
        rated_raw("Busy", 4.5, 200),
        rated_raw("Average", 3.9, 60),
    ];
    *records.borrow_mut() = classify_and_build(raw, &TrackVocabulary::default());
}

#[given("a set of venue records with no rated venues")]
fn semantic_only_records(records: &RefCell<Vec<VenueRecord>>) {
    let raw = vec![semantic_raw("City Museum"), semantic_raw("Old Shrine")];
    *records.borrow_mut() = classify_and_build(raw, &TrackVocabulary::default());
}

#[when("I rank the rated track")]
fn rank_the_rated_track(records: &RefCell<Vec<VenueRecord>>, ranked: &RefCell<Vec<ScoredVenue>>) {
    *ranked.borrow_mut() = rank_rated(&records.borrow(), 10);
}

#[then("the rated results are ordered by descending score")]
fn results_are_sorted(ranked: &RefCell<Vec<ScoredVenue>>) {
    let results = ranked.borrow();
    assert!(!results.is_empty(), "scenario should produce results");
    assert!(
        results.windows(2).all(|pair| match pair {
            [first, second] => first.score >= second.score,
            _ => true,
        }),
        "scores must be non-increasing"
    );
}

#[then("every rated result belongs to the rated track")]
fn results_stay_on_track(ranked: &RefCell<Vec<ScoredVenue>>) {
    assert!(
        ranked
            .borrow()
            .iter()
            .all(|scored| scored.venue.track == Track::Rated)
    );
}

#[then("the rated results are empty")]
fn results_are_empty(ranked: &RefCell<Vec<ScoredVenue>>) {
    assert!(ranked.borrow().is_empty());
}

#[scenario(path = "tests/features/rated_ranking.feature", index = 0)]
fn credible_reviews_rank_first(records: RefCell<Vec<VenueRecord>>, ranked: RefCell<Vec<ScoredVenue>>) {
    let _ = (records, ranked);
}

#[scenario(path = "tests/features/rated_ranking.feature", index = 1)]
fn empty_rated_track_is_empty(records: RefCell<Vec<VenueRecord>>, ranked: RefCell<Vec<ScoredVenue>>) {
    let _ = (records, ranked);
}
