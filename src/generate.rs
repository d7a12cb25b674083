use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::court::{Coordinates, Court, Features, Surface, TimeSlot};
use crate::model::review::Review;

const BOROUGHS: [&str; 5] = ["Manhattan", "Brooklyn", "Queens", "Bronx", "Staten Island"];

const COURT_TYPES: [&str; 5] = [
    "Tennis Club",
    "Sports Center",
    "Recreation Center",
    "Country Club",
    "Community Center",
];

const SURFACES: [Surface; 4] = [Surface::Hard, Surface::Clay, Surface::Grass, Surface::Indoor];

const AMENITIES: [&str; 10] = [
    "Pro Shop",
    "Lessons Available",
    "Equipment Rental",
    "Parking",
    "Restrooms",
    "Cafe",
    "Locker Rooms",
    "Ball Machine",
    "Court Lighting",
    "Seating Area",
];

const FIRST_NAMES: [&str; 16] = [
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Avery", "Cameron", "Drew", "Sage",
    "Reese", "Blake", "Quinn", "Skyler", "Emery", "Phoenix",
];

const LAST_NAMES: [&str; 16] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Hernandez",
    "Lopez",
    "Gonzalez",
    "Wilson",
    "Anderson",
    "Thomas",
];

const REVIEW_TITLES: [&str; 10] = [
    "Great court experience!",
    "Well-maintained facility",
    "Perfect for weekend play",
    "Excellent surface quality",
    "Good value for money",
    "Professional facility",
    "Clean and organized",
    "Friendly staff",
    "Could use some improvements",
    "Solid choice for tennis",
];

const REVIEW_COMMENTS: [&str; 10] = [
    "Really enjoyed playing here. The surface was in excellent condition and the facilities were clean.",
    "Great court with good lighting. Staff was helpful and the booking process was smooth.",
    "The court surface could use some work, but overall a decent place to play tennis.",
    "Excellent facilities with all the amenities you need. Will definitely come back!",
    "Good location and easy to get to. The court was well-maintained and ready for play.",
    "Professional setup with quality equipment. The hourly rate is reasonable for the area.",
    "Nice facility but can get crowded during peak hours. Book in advance!",
    "Clean courts and good customer service. The amenities are a nice bonus.",
    "Solid tennis facility. Nothing fancy but gets the job done well.",
    "Great place for both casual and competitive play. Highly recommend!",
];

// NYC bounding box.
const MIN_LAT: f64 = 40.4774;
const MAX_LAT: f64 = 40.9176;
const MIN_LNG: f64 = -74.2591;
const MAX_LNG: f64 = -73.7004;

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn coordinates(rng: &mut StdRng) -> Coordinates {
    Coordinates {
        lat: round_to(rng.gen_range(MIN_LAT..MAX_LAT), 6),
        lng: round_to(rng.gen_range(MIN_LNG..MAX_LNG), 6),
    }
}

fn time_slots(rng: &mut StdRng) -> Vec<TimeSlot> {
    // Morning and afternoon blocks; the midday gap is intentional.
    const HOURS: [u32; 9] = [8, 9, 10, 11, 14, 15, 16, 17, 18];
    HOURS
        .iter()
        .map(|&hour| TimeSlot {
            start: format!("{hour:02}:00"),
            end: format!("{:02}:00", hour + 1),
            available: rng.gen_bool(0.7),
            price: f64::from(rng.gen_range(40..70)),
        })
        .collect()
}

fn description(surface: Surface, borough: &str) -> String {
    match surface {
        Surface::Hard => format!(
            "Professional hard court facility located in {borough}. Well-maintained surface perfect for competitive play and training."
        ),
        Surface::Clay => format!(
            "Traditional clay court offering authentic tennis experience. Located in scenic {borough} with excellent drainage system."
        ),
        Surface::Grass => format!(
            "Premium grass courts providing classic tennis atmosphere. Beautifully maintained facility in {borough}."
        ),
        Surface::Indoor => format!(
            "Climate-controlled indoor facility in {borough}. Perfect for year-round play regardless of weather conditions."
        ),
    }
}

/// Generate `count` court records from a fixed seed. The same seed always
/// produces the same records, so tests can pin behavior against them.
pub fn generate_courts(count: usize, seed: u64) -> Vec<Court> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let borough = BOROUGHS[i % BOROUGHS.len()];
            let court_type = COURT_TYPES[rng.gen_range(0..COURT_TYPES.len())];
            let surface = SURFACES[i % SURFACES.len()];
            let amenity_count = rng.gen_range(3..=6);
            let amenities: Vec<String> = AMENITIES
                .choose_multiple(&mut rng, amenity_count)
                .map(|a| (*a).to_string())
                .collect();
            let website = if rng.gen_bool(0.7) {
                Some(format!(
                    "https://{}tennis{}.com",
                    borough.to_lowercase().replace(' ', ""),
                    i
                ))
            } else {
                None
            };

            Court {
                id: format!("court-{:03}", i + 1),
                name: format!("{} {} {}", borough, court_type, i + 1),
                location: borough.to_string(),
                address: format!("{} Tennis Avenue, {}, NY {}", 100 + i, borough, 10001 + i),
                rating: round_to(rng.gen_range(3.5..5.0), 1),
                review_count: rng.gen_range(10..310),
                surface,
                lighting: rng.gen_bool(0.8),
                hourly_rate: f64::from(rng.gen_range(25..85)),
                amenities,
                description: description(surface, borough),
                coordinates: coordinates(&mut rng),
                availability: time_slots(&mut rng),
                phone_number: format!(
                    "({}) {}-{}",
                    rng.gen_range(100..1000),
                    rng.gen_range(100..1000),
                    rng.gen_range(1000..10000)
                ),
                website,
                features: Features {
                    parking: rng.gen_bool(0.8),
                    restrooms: rng.gen_bool(0.9),
                    pro_shop: rng.gen_bool(0.6),
                    lessons: rng.gen_bool(0.7),
                    ball_machine: rng.gen_bool(0.4),
                    court_rental: rng.gen_bool(0.9),
                },
            }
        })
        .collect()
}

/// Generate 2-9 seed reviews per court, backdated up to a year before `now`.
/// Ratings skew to 4-5 stars, matching the listing data's optimism.
pub fn generate_reviews(courts: &[Court], seed: u64, now: DateTime<Utc>) -> Vec<Review> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut reviews = Vec::new();

    for court in courts {
        let count = rng.gen_range(2..=9);
        for i in 0..count {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let days_ago = rng.gen_range(1..=365);

            reviews.push(Review {
                id: format!("review-{}-{}", court.id, i),
                court_id: court.id.clone(),
                author: format!("{} {}.", first, &last[..1]),
                rating: rng.gen_range(4..=5),
                title: REVIEW_TITLES[rng.gen_range(0..REVIEW_TITLES.len())].to_string(),
                comment: REVIEW_COMMENTS[rng.gen_range(0..REVIEW_COMMENTS.len())].to_string(),
                date: now - Duration::days(days_ago),
                helpful: rng.gen_range(0..15),
                verified: rng.gen_bool(0.8),
            });
        }
    }

    reviews
}
