use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info};

use crate::model::review::{NewReview, Review, ReviewSortKey};
use crate::query::sort_reviews;
use crate::store::CourtStore;

/// Latency the simulated review backend imposes before a commit.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("review submission failed: {0}")]
    Submission(String),
}

/// Review collection state plus submission status flags.
#[derive(Debug, Clone)]
pub struct ReviewsState {
    /// Most recent insertion first; seed reviews follow in store order.
    pub reviews: Vec<Review>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ReviewsAction {
    AddReview(Review),
    SetLoading(bool),
    SetError(Option<String>),
}

/// Reducer-style state machine over the review collection. Insertion is
/// append-only; committed reviews are never mutated or deleted. The backend
/// is simulated end to end: submission latency and forced failure are
/// construction-time knobs.
#[derive(Debug)]
pub struct Reviews {
    state: ReviewsState,
    latency: Duration,
    fail_with: Option<String>,
    seq: u64,
}

impl Reviews {
    pub fn new(seed_reviews: Vec<Review>) -> Self {
        Self {
            state: ReviewsState {
                reviews: seed_reviews,
                loading: false,
                error: None,
            },
            latency: DEFAULT_SUBMIT_LATENCY,
            fail_with: None,
            seq: 0,
        }
    }

    /// Seed the machine from the store's review collection.
    pub fn from_store(store: &CourtStore) -> Self {
        Self::new(store.reviews().to_vec())
    }

    /// Override the simulated submission latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every subsequent submission fail with the given message.
    pub fn with_simulated_failure(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    pub fn state(&self) -> &ReviewsState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ReviewsAction) {
        match action {
            ReviewsAction::AddReview(review) => self.state.reviews.insert(0, review),
            ReviewsAction::SetLoading(loading) => self.state.loading = loading,
            ReviewsAction::SetError(error) => self.state.error = error,
        }
    }

    /// Reviews for one court, sorted by the given key (date descending by
    /// default). Unknown court ids yield an empty list.
    pub fn court_reviews(&self, court_id: &str, sort_by: ReviewSortKey) -> Vec<Review> {
        let court_reviews: Vec<Review> = self
            .state
            .reviews
            .iter()
            .filter(|review| review.court_id == court_id)
            .cloned()
            .collect();
        sort_reviews(&court_reviews, sort_by)
    }

    /// Submit a review. Validation is the caller's responsibility; the
    /// machine assigns id, timestamp, and the helpful/verified defaults
    /// after the simulated latency elapses, then prepends the committed
    /// review. On a simulated failure the error flag is set, loading is
    /// cleared, and the failure propagates to the caller.
    pub async fn add_court_review(&mut self, new_review: NewReview) -> Result<Review, SubmitError> {
        self.dispatch(ReviewsAction::SetLoading(true));
        tokio::time::sleep(self.latency).await;

        if let Some(message) = self.fail_with.clone() {
            error!(court_id = %new_review.court_id, error = %message, "Review submission failed");
            self.dispatch(ReviewsAction::SetError(Some(message.clone())));
            self.dispatch(ReviewsAction::SetLoading(false));
            return Err(SubmitError::Submission(message));
        }

        let now = Utc::now();
        self.seq += 1;
        let review = Review {
            id: format!("review-{}-{}", now.timestamp_millis(), self.seq),
            court_id: new_review.court_id,
            author: new_review.author,
            rating: new_review.rating,
            title: new_review.title,
            comment: new_review.comment,
            date: now,
            helpful: 0,
            verified: false,
        };

        self.dispatch(ReviewsAction::AddReview(review.clone()));
        self.dispatch(ReviewsAction::SetLoading(false));
        info!(id = %review.id, court_id = %review.court_id, "Committed review");
        Ok(review)
    }

    /// Mean rating for a court, rounded to one decimal; 0.0 when the court
    /// has no reviews. Computed from the live review collection, so it will
    /// generally disagree with the court's generated listing rating.
    pub fn average_rating(&self, court_id: &str) -> f64 {
        let mut sum: u32 = 0;
        let mut count: u32 = 0;
        for review in &self.state.reviews {
            if review.court_id == court_id {
                sum += u32::from(review.rating);
                count += 1;
            }
        }
        if count == 0 {
            return 0.0;
        }
        (f64::from(sum) / f64::from(count) * 10.0).round() / 10.0
    }
}
