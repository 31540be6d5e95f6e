use super::dto::{CatalogueListing, CatalogueView, ListCataloguesRequest};
use crate::{
    domain::catalogue::{
        entity::{Catalogue, non_empty},
        errors::DomainError,
        filter::CatalogueFilter,
        repository::CatalogueRepository,
    },
    infrastructure::assets::traits::AssetUrlProvider,
};
use std::sync::Arc;
use tracing::debug;

pub struct ListCataloguesUseCase {
    repository: Arc<dyn CatalogueRepository>,
    assets: Arc<dyn AssetUrlProvider>,
}

impl ListCataloguesUseCase {
    pub fn new(repository: Arc<dyn CatalogueRepository>, assets: Arc<dyn AssetUrlProvider>) -> Self {
        Self { repository, assets }
    }

    /// Lists catalogues in two phases: equality filters run in the store, the
    /// title search runs here over the ordered rows.
    ///
    /// Video counts for the surviving rows are fetched in one batch.
    pub async fn execute(&self, request: ListCataloguesRequest) -> Result<CatalogueListing, DomainError> {
        let filter = CatalogueFilter::builder()
            .item_group(request.item_group.as_deref())
            .brand(request.brand.as_deref())
            .enabled(request.enabled)
            .build();

        let rows = self.repository.find_filtered(&filter).await?;
        let fetched = rows.len();

        let search = request.search.as_deref().unwrap_or_default();
        let accepted: Vec<Catalogue> = rows
            .into_iter()
            .filter(|row| row.title_contains(search))
            .collect();

        debug!(
            "Search '{}' kept {} of {} catalogues",
            search,
            accepted.len(),
            fetched
        );

        let ids: Vec<String> = accepted.iter().map(|c| c.id.clone()).collect();
        let counts = self.repository.count_enabled_videos(&ids).await?;

        let catalogues: Vec<CatalogueView> = accepted
            .into_iter()
            .map(|c| {
                let video_count = counts.get(&c.id).copied().unwrap_or(0);
                self.to_view(c, video_count)
            })
            .collect();

        Ok(CatalogueListing {
            total: catalogues.len() as i64,
            catalogues,
        })
    }

    fn to_view(&self, catalogue: Catalogue, video_count: i64) -> CatalogueView {
        CatalogueView {
            title: catalogue.display_title().to_string(),
            thumbnail_url: self
                .assets
                .absolute_url(catalogue.thumbnail_image.as_deref()),
            flip_available: catalogue.has_flip_package(),
            youtube_video_url: non_empty(catalogue.youtube_video_url.as_deref()).map(str::to_string),
            description: catalogue.description.unwrap_or_default(),
            id: catalogue.id,
            item_group: catalogue.item_group,
            brand: catalogue.brand,
            video_count,
        }
    }
}
