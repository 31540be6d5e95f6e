use crate::domain::catalogue::filter::EnabledFilter;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default)]
pub struct ListCataloguesRequest {
    pub item_group: Option<String>,
    pub brand: Option<String>,
    pub search: Option<String>,
    pub enabled: EnabledFilter,
}

/// One catalogue as shown on the mobile listing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogueView {
    pub id: String,
    pub title: String,
    pub item_group: Option<String>,
    pub brand: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: String,
    pub flip_available: bool,
    pub video_count: i64,
    pub youtube_video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogueListing {
    pub catalogues: Vec<CatalogueView>,
    pub total: i64,
}
