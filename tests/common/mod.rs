#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use tennis_court_browser::{Coordinates, Court, Features, Review, Surface, TimeSlot};
use tracing_subscriber::EnvFilter;

/// Initialize test logging once per binary; safe to call from every test.
/// Level comes from RUST_LOG, defaulting to warn.
pub fn init_logging() {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Minimal court fixture; tests tweak fields after construction as needed.
pub fn court(id: &str, name: &str, surface: Surface, rating: f64, hourly_rate: f64) -> Court {
    Court {
        id: id.to_string(),
        name: name.to_string(),
        location: "Brooklyn".to_string(),
        address: "1 Tennis Avenue, Brooklyn, NY 11201".to_string(),
        rating,
        review_count: 10,
        surface,
        lighting: true,
        hourly_rate,
        amenities: vec!["Parking".to_string(), "Restrooms".to_string()],
        description: "Test court".to_string(),
        coordinates: Coordinates {
            lat: 40.65,
            lng: -73.95,
        },
        availability: vec![TimeSlot {
            start: "08:00".to_string(),
            end: "09:00".to_string(),
            available: true,
            price: 50.0,
        }],
        phone_number: "(555) 010-0000".to_string(),
        website: None,
        features: Features {
            parking: true,
            restrooms: true,
            pro_shop: false,
            lessons: false,
            ball_machine: false,
            court_rental: true,
        },
    }
}

/// Review fixture backdated by `days_ago` from now.
pub fn review(id: &str, court_id: &str, rating: u8, days_ago: i64, helpful: u32) -> Review {
    Review {
        id: id.to_string(),
        court_id: court_id.to_string(),
        author: "Casey W.".to_string(),
        rating,
        title: "Solid choice for tennis".to_string(),
        comment: "Clean courts and good customer service.".to_string(),
        date: backdated(days_ago),
        helpful,
        verified: true,
    }
}

pub fn backdated(days_ago: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days_ago)
}

pub fn ids(courts: &[Court]) -> Vec<&str> {
    courts.iter().map(|c| c.id.as_str()).collect()
}
