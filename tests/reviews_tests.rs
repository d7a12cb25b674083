mod common;

use std::time::Duration;

use common::{init_logging, review};
use tennis_court_browser::{NewReview, Reviews, ReviewSortKey};

fn submission(court_id: &str, rating: u8) -> NewReview {
    NewReview {
        court_id: court_id.to_string(),
        author: "Jordan M.".to_string(),
        rating,
        title: "Great court experience!".to_string(),
        comment: "Really enjoyed playing here.".to_string(),
    }
}

fn fast_reviews(seed: Vec<tennis_court_browser::Review>) -> Reviews {
    Reviews::new(seed).with_latency(Duration::from_millis(1))
}

#[tokio::test]
async fn add_review_commits_exactly_one_record() {
    init_logging();
    let seed = vec![
        review("review-court-001-0", "court-001", 4, 30, 3),
        review("review-court-002-0", "court-002", 5, 10, 1),
    ];
    let mut reviews = fast_reviews(seed);

    let committed = reviews
        .add_court_review(submission("court-001", 5))
        .await
        .expect("submission should succeed");

    let state = reviews.state();
    assert_eq!(state.reviews.len(), 3, "collection grows by exactly 1");
    assert_eq!(state.reviews[0].id, committed.id, "newest insert first");
    assert_eq!(committed.helpful, 0);
    assert!(!committed.verified);
    assert!(committed.id.starts_with("review-"));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn committed_review_is_visible_at_its_sort_position() {
    // Seed reviews are backdated, so a fresh commit leads the date sort
    let seed = vec![
        review("review-court-001-0", "court-001", 4, 30, 3),
        review("review-court-001-1", "court-001", 5, 200, 9),
    ];
    let mut reviews = fast_reviews(seed);

    let committed = reviews
        .add_court_review(submission("court-001", 3))
        .await
        .expect("submission should succeed");

    let by_date = reviews.court_reviews("court-001", ReviewSortKey::Date);
    assert_eq!(by_date.len(), 3);
    assert_eq!(by_date[0].id, committed.id);

    // Under rating sort the 3-star commit drops to the end
    let by_rating = reviews.court_reviews("court-001", ReviewSortKey::Rating);
    assert_eq!(by_rating[2].id, committed.id);
}

#[tokio::test]
async fn sequential_submissions_commit_in_call_order() {
    let mut reviews = fast_reviews(Vec::new());

    let first = reviews
        .add_court_review(submission("court-001", 4))
        .await
        .expect("first submission");
    let second = reviews
        .add_court_review(submission("court-001", 5))
        .await
        .expect("second submission");

    assert_ne!(first.id, second.id, "ids must be unique");
    let state = reviews.state();
    assert_eq!(state.reviews[0].id, second.id);
    assert_eq!(state.reviews[1].id, first.id);
}

#[test]
fn court_reviews_sorts_by_each_key() {
    let seed = vec![
        review("r-mid", "court-001", 3, 20, 5),
        review("r-old", "court-001", 5, 300, 12),
        review("r-new", "court-001", 4, 2, 0),
        review("r-other", "court-002", 5, 1, 50),
    ];
    let reviews = Reviews::new(seed);

    let by_date = reviews.court_reviews("court-001", ReviewSortKey::Date);
    assert_eq!(
        by_date.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec!["r-new", "r-mid", "r-old"]
    );

    let by_rating = reviews.court_reviews("court-001", ReviewSortKey::Rating);
    assert_eq!(
        by_rating.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec!["r-old", "r-new", "r-mid"]
    );

    let by_helpful = reviews.court_reviews("court-001", ReviewSortKey::Helpful);
    assert_eq!(
        by_helpful.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec!["r-old", "r-mid", "r-new"]
    );
}

#[test]
fn unknown_court_has_no_reviews_and_zero_average() {
    let reviews = Reviews::new(vec![review("r-0", "court-001", 4, 5, 0)]);

    assert!(reviews
        .court_reviews("court-404", ReviewSortKey::default())
        .is_empty());
    assert_eq!(reviews.average_rating("court-404"), 0.0);
}

#[test]
fn average_rating_rounds_to_one_decimal() {
    let seed = vec![
        review("r-0", "court-001", 4, 3, 0),
        review("r-1", "court-001", 5, 2, 0),
        review("r-2", "court-001", 5, 1, 0),
        review("r-3", "court-002", 1, 1, 0),
    ];
    let reviews = Reviews::new(seed);

    // (4 + 5 + 5) / 3 = 4.666... rounds to 4.7
    assert_eq!(reviews.average_rating("court-001"), 4.7);
    assert_eq!(reviews.average_rating("court-002"), 1.0);
}

#[tokio::test]
async fn simulated_failure_sets_error_and_propagates() {
    init_logging();
    let seed = vec![review("r-0", "court-001", 4, 5, 0)];
    let mut reviews = Reviews::new(seed)
        .with_latency(Duration::from_millis(1))
        .with_simulated_failure("backend unavailable");

    let result = reviews.add_court_review(submission("court-001", 5)).await;

    assert!(result.is_err());
    let state = reviews.state();
    assert_eq!(state.error.as_deref(), Some("backend unavailable"));
    assert!(!state.loading, "loading must clear on failure");
    assert_eq!(state.reviews.len(), 1, "nothing committed on failure");
}
