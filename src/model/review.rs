use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A committed review. Never mutated or deleted after commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    /// Foreign key into the court collection; not enforced on insert, so a
    /// lookup through this id must tolerate absence.
    pub court_id: String,
    pub author: String,
    /// Whole stars, 1..=5.
    pub rating: u8,
    pub title: String,
    pub comment: String,
    /// Commit time, serialized RFC 3339.
    pub date: DateTime<Utc>,
    pub helpful: u32,
    pub verified: bool,
}

/// Caller-supplied portion of a review submission. Id, timestamp, and the
/// helpful/verified defaults are assigned at commit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub court_id: String,
    pub author: String,
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

/// Review list ordering; all keys sort descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewSortKey {
    #[default]
    Date,
    Rating,
    Helpful,
}
