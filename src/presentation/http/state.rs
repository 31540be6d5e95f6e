use crate::{
    domain::catalogue::repository::CatalogueRepository,
    infrastructure::assets::traits::AssetUrlProvider,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalogue_repo: Arc<dyn CatalogueRepository>,
    pub assets: Arc<dyn AssetUrlProvider>,
}
