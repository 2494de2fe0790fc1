use crate::domain::{
    auth::AuthSession,
    errors::AppResult,
    logging::LogComponent,
    repositories::CompanyDirectory,
    screener::{CompanyListing, RecordStore},
};
use crate::log_info;

/// Loads the backend company directory into a store the screener engine can
/// filter and sort locally.
pub struct DirectoryService<D> {
    directory: D,
}

impl<D: CompanyDirectory> DirectoryService<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub async fn load(&self, session: Option<&AuthSession>) -> AppResult<RecordStore<CompanyListing>> {
        let rows = self.directory.list_companies(session).await?;
        log_info!(LogComponent::Application("Directory"), "loaded {} companies", rows.len());
        Ok(RecordStore::new(rows))
    }
}
