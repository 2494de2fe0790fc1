use gloo_timers::future::TimeoutFuture;

use crate::domain::{
    logging::LogComponent,
    screener::{Company, RecordStore, find_company},
};
use crate::{log_debug, log_info};

/// Company lookup by symbol or name over the local company store.
///
/// The lookup itself is synchronous; [`CompanySearchUseCase::search`] only
/// adds the configured delay so the UI behaves like a remote call.
#[derive(Debug, Clone)]
pub struct CompanySearchUseCase {
    store: RecordStore<Company>,
    latency_ms: u32,
}

impl CompanySearchUseCase {
    pub fn new(store: RecordStore<Company>, latency_ms: u32) -> Self {
        Self { store, latency_ms }
    }

    /// Whether the search button should be enabled for `term`
    pub fn can_search(term: &str) -> bool {
        !term.trim().is_empty()
    }

    pub fn lookup(&self, term: &str) -> Option<Company> {
        let found = find_company(self.store.records(), term).cloned();
        log_debug!(
            LogComponent::Application("CompanySearch"),
            "'{}' -> {}",
            term,
            found.as_ref().map(|c| c.symbol.value()).unwrap_or("no match")
        );
        found
    }

    pub async fn search(&self, term: &str) -> Option<Company> {
        if !Self::can_search(term) {
            return None;
        }
        if self.latency_ms > 0 {
            TimeoutFuture::new(self.latency_ms).await;
        }
        let found = self.lookup(term);
        if found.is_none() {
            log_info!(LogComponent::Application("CompanySearch"), "no company matches '{}'", term.trim());
        }
        found
    }
}
