use crate::domain::{
    logging::LogComponent,
    screener::{FilterCriteria, Record, RecordStore, SortState},
};
use crate::log_debug;

/// State of one screener view: the store it was mounted with plus the
/// user's criteria and sort. Visible rows are recomputed from scratch on
/// every call to [`ScreenerSession::visible_rows`].
#[derive(Debug, Clone)]
pub struct ScreenerSession<R: Record> {
    store: RecordStore<R>,
    criteria: FilterCriteria<R::Field>,
    sort: SortState<R::Field>,
    range_field: R::Field,
}

impl<R: Record> ScreenerSession<R> {
    /// `range_field` is the numeric column the min/max inputs apply to
    pub fn new(store: RecordStore<R>, range_field: R::Field) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            sort: SortState::default(),
            range_field,
        }
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria<R::Field> {
        &self.criteria
    }

    pub fn sort(&self) -> &SortState<R::Field> {
        &self.sort
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.criteria.category = category.into();
    }

    pub fn set_min(&mut self, min: impl Into<String>) {
        self.criteria.set_min(self.range_field, min);
    }

    pub fn set_max(&mut self, max: impl Into<String>) {
        self.criteria.set_max(self.range_field, max);
    }

    pub fn toggle_sort(&mut self, field: R::Field) {
        self.sort.toggle(field);
        log_debug!(
            LogComponent::Application("Screener"),
            "sort -> {:?}",
            self.sort.active()
        );
    }

    pub fn reset(&mut self) {
        self.criteria.clear();
        self.sort.clear();
    }

    pub fn visible_rows(&self) -> Vec<&R> {
        let rows = self.store.query(&self.criteria, &self.sort);
        log_debug!(
            LogComponent::Application("Screener"),
            "{} of {} rows visible",
            rows.len(),
            self.store.len()
        );
        rows
    }

    pub fn categories(&self) -> Vec<&str> {
        self.store.categories()
    }
}
