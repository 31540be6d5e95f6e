use super::dto::FlipUrlResponse;
use crate::{
    domain::catalogue::{errors::DomainError, repository::CatalogueRepository},
    infrastructure::assets::traits::AssetUrlProvider,
};
use std::sync::Arc;

pub struct GetFlipUrlUseCase {
    repository: Arc<dyn CatalogueRepository>,
    assets: Arc<dyn AssetUrlProvider>,
}

impl GetFlipUrlUseCase {
    pub fn new(repository: Arc<dyn CatalogueRepository>, assets: Arc<dyn AssetUrlProvider>) -> Self {
        Self { repository, assets }
    }

    /// Resolves the flipbook entry page of a catalogue. A catalogue without a
    /// flip package has no URL even if an entry file is recorded.
    pub async fn execute(&self, catalogue_id: &str) -> Result<FlipUrlResponse, DomainError> {
        let catalogue = self
            .repository
            .find_by_id(catalogue_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("catalogue {}", catalogue_id)))?;

        let flip_url = if catalogue.has_flip_package() {
            self.assets.absolute_url(catalogue.flip_entry_file.as_deref())
        } else {
            None
        };

        Ok(FlipUrlResponse {
            catalogue_id: catalogue.id,
            flip_url,
        })
    }
}
