//! Data and state core of a tennis-court browsing app: an in-memory store of
//! generated court and review records, a pure search/filter/sort query
//! pipeline, and two reducer-style state machines that sequence it. No
//! network, no persistence; the review backend is simulated with a fixed
//! latency.

pub mod courts;
pub mod generate;
pub mod model;
pub mod query;
pub mod reviews;
pub mod store;

pub use courts::{Courts, CourtsAction, CourtsState};
pub use model::court::{Coordinates, Court, Features, SortKey, Surface, TimeSlot};
pub use model::filters::{FilterUpdate, SearchFilters, SurfaceFilter};
pub use model::review::{NewReview, Review, ReviewSortKey};
pub use query::{filter_courts, query_courts, search_courts, sort_courts, sort_reviews};
pub use reviews::{Reviews, ReviewsAction, ReviewsState, SubmitError};
pub use store::CourtStore;
