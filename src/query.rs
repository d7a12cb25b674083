use crate::model::court::{Court, SortKey};
use crate::model::filters::{SearchFilters, SurfaceFilter};
use crate::model::review::{Review, ReviewSortKey};

/// Case-insensitive substring search against court name, location, and any
/// amenity string. Preserves input order; an empty query keeps every record.
pub fn search_courts(courts: &[Court], query: &str) -> Vec<Court> {
    if query.is_empty() {
        return courts.to_vec();
    }
    let needle = query.to_lowercase();
    courts
        .iter()
        .filter(|court| {
            court.name.to_lowercase().contains(&needle)
                || court.location.to_lowercase().contains(&needle)
                || court
                    .amenities
                    .iter()
                    .any(|amenity| amenity.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Keep courts that pass every active criterion. Preserves input order.
pub fn filter_courts(courts: &[Court], filters: &SearchFilters) -> Vec<Court> {
    courts
        .iter()
        .filter(|court| matches_filters(court, filters))
        .cloned()
        .collect()
}

fn matches_filters(court: &Court, filters: &SearchFilters) -> bool {
    if let SurfaceFilter::Only(surface) = filters.surface {
        if court.surface != surface {
            return false;
        }
    }
    if court.rating < filters.min_rating {
        return false;
    }
    if court.hourly_rate > filters.max_price {
        return false;
    }
    if let Some(lighting) = filters.lighting {
        if court.lighting != lighting {
            return false;
        }
    }
    filters
        .amenities
        .iter()
        .all(|required| court.amenities.iter().any(|have| have == required))
}

/// Sort a court list by the given key. `sort_by` is stable, so records with
/// equal keys keep their input order.
pub fn sort_courts(courts: &[Court], sort_by: SortKey) -> Vec<Court> {
    let mut sorted = courts.to_vec();
    match sort_by {
        SortKey::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Price => sorted.sort_by(|a, b| a.hourly_rate.total_cmp(&b.hourly_rate)),
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::ReviewCount => sorted.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }
    sorted
}

/// Sort a review list by the given key, all descending. Stable, like
/// [`sort_courts`].
pub fn sort_reviews(reviews: &[Review], sort_by: ReviewSortKey) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    match sort_by {
        ReviewSortKey::Date => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        ReviewSortKey::Rating => sorted.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ReviewSortKey::Helpful => sorted.sort_by(|a, b| b.helpful.cmp(&a.helpful)),
    }
    sorted
}

/// The full query pipeline: search, then filter, then sort, always in that
/// order. Each stage is pure and consumes the previous stage's output.
pub fn query_courts(
    courts: &[Court],
    search_term: &str,
    filters: &SearchFilters,
    sort_by: SortKey,
) -> Vec<Court> {
    let searched = search_courts(courts, search_term);
    let filtered = filter_courts(&searched, filters);
    sort_courts(&filtered, sort_by)
}
