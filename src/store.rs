use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};

use crate::generate::{generate_courts, generate_reviews};
use crate::model::court::Court;
use crate::model::review::Review;

/// Number of court listings in a generated store, matching the original
/// data set.
pub const DEFAULT_COURT_COUNT: usize = 76;

/// In-memory record store. Owns the court collection and the seed review
/// collection for the process lifetime; constructed once at application
/// start and shared by reference. State machines derive their views from it
/// rather than holding drifting copies.
#[derive(Debug)]
pub struct CourtStore {
    courts: Vec<Court>,
    reviews: Vec<Review>,
}

impl CourtStore {
    /// Build a store from explicit records. Duplicate court ids violate the
    /// store invariant; they are kept (first match wins on lookup) but
    /// logged so the bad data source is visible.
    pub fn new(courts: Vec<Court>, reviews: Vec<Review>) -> Self {
        {
            let mut seen = HashSet::new();
            for court in &courts {
                if !seen.insert(court.id.as_str()) {
                    warn!(id = %court.id, "Duplicate court id in store");
                }
            }
        }
        Self { courts, reviews }
    }

    /// Build a store of generated records from a fixed seed.
    pub fn generate(seed: u64) -> Self {
        let courts = generate_courts(DEFAULT_COURT_COUNT, seed);
        // Offset the review seed so the two record kinds do not share a
        // random stream.
        let reviews = generate_reviews(&courts, seed.wrapping_add(1), Utc::now());
        info!(
            courts = courts.len(),
            reviews = reviews.len(),
            seed,
            "Generated court store"
        );
        Self::new(courts, reviews)
    }

    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Look up a court by id. Absence is a normal outcome, not an error.
    pub fn court_by_id(&self, id: &str) -> Option<&Court> {
        self.courts.iter().find(|court| court.id == id)
    }
}
