use serde::{Deserialize, Serialize};

/// Playing surface of a court. Serialized capitalized ("Hard", "Clay", ...)
/// to match the upstream JSON shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
    Indoor,
}

/// One bookable hour on a court's daily schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
    pub available: bool,
    pub price: f64,
}

/// Fixed set of named facility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub parking: bool,
    pub restrooms: bool,
    pub pro_shop: bool,
    pub lessons: bool,
    pub ball_machine: bool,
    pub court_rental: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A court listing as held by the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    /// Unique across the store.
    pub id: String,
    pub name: String,
    pub location: String,
    pub address: String,
    /// Generated listing rating in [0, 5], one decimal. Independent of the
    /// actual review collection; never reconciled with it.
    pub rating: f64,
    /// Generated count, likewise independent of actual reviews.
    pub review_count: u32,
    pub surface: Surface,
    pub lighting: bool,
    pub hourly_rate: f64,
    /// Order irrelevant for matching, preserved for display.
    pub amenities: Vec<String>,
    pub description: String,
    pub coordinates: Coordinates,
    pub availability: Vec<TimeSlot>,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub features: Features,
}

/// Court list ordering. Rating and review count sort descending, price and
/// name ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Price,
    Name,
    ReviewCount,
}
