use std::sync::Arc;

use tracing::debug;

use crate::model::court::{Court, SortKey};
use crate::model::filters::{FilterUpdate, SearchFilters};
use crate::query::{query_courts, sort_courts};
use crate::store::CourtStore;

/// Browsing state: the current query parameters plus the derived result.
#[derive(Debug, Clone)]
pub struct CourtsState {
    pub search_term: String,
    pub filters: SearchFilters,
    pub sort_by: SortKey,
    /// Derived view, recomputed on every query-affecting action.
    pub filtered_courts: Vec<Court>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CourtsAction {
    SetSearchTerm(String),
    SetFilters(FilterUpdate),
    SetSortBy(SortKey),
    ResetFilters,
    SetLoading(bool),
    SetError(Option<String>),
}

/// Reducer-style state machine over the court store. All transitions are
/// synchronous and processed one at a time through `&mut self`.
#[derive(Debug)]
pub struct Courts {
    store: Arc<CourtStore>,
    state: CourtsState,
}

impl Courts {
    /// Start with the full store contents in store order, default filters,
    /// and rating sort. The initial view is deliberately not pre-sorted;
    /// ordering applies from the first dispatched action.
    pub fn new(store: Arc<CourtStore>) -> Self {
        let state = CourtsState {
            search_term: String::new(),
            filters: SearchFilters::default(),
            sort_by: SortKey::Rating,
            filtered_courts: store.courts().to_vec(),
            loading: false,
            error: None,
        };
        Self { store, state }
    }

    pub fn state(&self) -> &CourtsState {
        &self.state
    }

    /// Apply one action. Search-term and filter changes recompute the full
    /// search -> filter -> sort pipeline against the store; a sort-key
    /// change only re-sorts the existing result, since the filtered set is
    /// unaffected by ordering.
    pub fn dispatch(&mut self, action: CourtsAction) {
        match action {
            CourtsAction::SetSearchTerm(term) => {
                self.state.search_term = term;
                self.recompute();
            }
            CourtsAction::SetFilters(update) => {
                self.state.filters = self.state.filters.merged(update);
                self.recompute();
            }
            CourtsAction::SetSortBy(sort_by) => {
                self.state.sort_by = sort_by;
                self.state.filtered_courts = sort_courts(&self.state.filtered_courts, sort_by);
            }
            CourtsAction::ResetFilters => {
                self.state.filters = SearchFilters::default();
                self.recompute();
            }
            CourtsAction::SetLoading(loading) => self.state.loading = loading,
            CourtsAction::SetError(error) => self.state.error = error,
        }
    }

    fn recompute(&mut self) {
        self.state.filtered_courts = query_courts(
            self.store.courts(),
            &self.state.search_term,
            &self.state.filters,
            self.state.sort_by,
        );
        debug!(
            term = %self.state.search_term,
            results = self.state.filtered_courts.len(),
            "Recomputed court pipeline"
        );
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(CourtsAction::SetSearchTerm(term.into()));
    }

    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.dispatch(CourtsAction::SetFilters(update));
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.dispatch(CourtsAction::SetSortBy(sort_by));
    }

    pub fn reset_filters(&mut self) {
        self.dispatch(CourtsAction::ResetFilters);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(CourtsAction::SetLoading(loading));
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.dispatch(CourtsAction::SetError(error));
    }

    /// Look up a court in the backing store; `None` for unknown ids.
    pub fn court_by_id(&self, id: &str) -> Option<&Court> {
        self.store.court_by_id(id)
    }
}
