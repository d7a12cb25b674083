use crate::model::court::Surface;

/// Surface criterion: match everything or exactly one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceFilter {
    All,
    Only(Surface),
}

/// The full set of court filter criteria. All active criteria must pass for
/// a court to be kept (logical AND).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    /// Inactive when `All`.
    pub surface: SurfaceFilter,
    /// Inclusive lower bound on the listing rating.
    pub min_rating: f64,
    /// Inclusive upper bound on the hourly rate.
    pub max_price: f64,
    /// `Some(true)` requires lighting, `Some(false)` excludes it, `None` is
    /// don't-care.
    pub lighting: Option<bool>,
    /// Court must carry every listed amenity. Inactive when empty.
    pub amenities: Vec<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            surface: SurfaceFilter::All,
            min_rating: 0.0,
            max_price: 100.0,
            lighting: None,
            amenities: Vec::new(),
        }
    }
}

/// A partial filter change: `Some` overrides the corresponding field, `None`
/// keeps the previous value. `lighting` nests an Option so the update can
/// distinguish "set to don't-care" from "leave alone".
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub surface: Option<SurfaceFilter>,
    pub min_rating: Option<f64>,
    pub max_price: Option<f64>,
    pub lighting: Option<Option<bool>>,
    pub amenities: Option<Vec<String>>,
}

impl SearchFilters {
    /// Field-wise merge of an update into the current criteria.
    pub fn merged(&self, update: FilterUpdate) -> Self {
        Self {
            surface: update.surface.unwrap_or(self.surface),
            min_rating: update.min_rating.unwrap_or(self.min_rating),
            max_price: update.max_price.unwrap_or(self.max_price),
            lighting: update.lighting.unwrap_or(self.lighting),
            amenities: update.amenities.unwrap_or_else(|| self.amenities.clone()),
        }
    }
}
