use super::entity::{Catalogue, CatalogueVideo};
use super::errors::DomainError;
use super::filter::CatalogueFilter;
use async_trait::async_trait;
use std::collections::HashMap;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Catalogues matching every equality constraint in `filter`, ordered by
    /// `sort_order` then `title`, both ascending.
    async fn find_filtered(&self, filter: &CatalogueFilter) -> Result<Vec<Catalogue>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Catalogue>, DomainError>;

    /// Number of enabled videos per parent id. Parents without enabled videos
    /// may be absent from the map.
    async fn count_enabled_videos(
        &self,
        parent_ids: &[String],
    ) -> Result<HashMap<String, i64>, DomainError>;

    /// Enabled videos of one catalogue, ordered by position.
    async fn find_enabled_videos(&self, parent_id: &str) -> Result<Vec<CatalogueVideo>, DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}
