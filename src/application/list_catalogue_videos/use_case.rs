use super::dto::{CatalogueVideos, VideoView};
use crate::{
    domain::catalogue::{
        entity::{CatalogueVideo, non_empty},
        errors::DomainError,
        repository::CatalogueRepository,
    },
    infrastructure::assets::traits::AssetUrlProvider,
};
use std::sync::Arc;

pub struct ListCatalogueVideosUseCase {
    repository: Arc<dyn CatalogueRepository>,
    assets: Arc<dyn AssetUrlProvider>,
}

impl ListCatalogueVideosUseCase {
    pub fn new(repository: Arc<dyn CatalogueRepository>, assets: Arc<dyn AssetUrlProvider>) -> Self {
        Self { repository, assets }
    }

    pub async fn execute(&self, catalogue_id: &str) -> Result<CatalogueVideos, DomainError> {
        let catalogue = self
            .repository
            .find_by_id(catalogue_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("catalogue {}", catalogue_id)))?;

        let videos: Vec<VideoView> = self
            .repository
            .find_enabled_videos(&catalogue.id)
            .await?
            .into_iter()
            .enumerate()
            .map(|(position, video)| self.to_view(position + 1, video))
            .collect();

        Ok(CatalogueVideos {
            catalogue_id: catalogue.id,
            total: videos.len() as i64,
            videos,
        })
    }

    fn to_view(&self, position: usize, video: CatalogueVideo) -> VideoView {
        VideoView {
            title: non_empty(video.title.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Video {}", position)),
            video_type: video.video_type.as_str().to_string(),
            youtube_url: non_empty(video.youtube_url.as_deref()).map(str::to_string),
            local_video_url: self.assets.absolute_url(video.local_video_url.as_deref()),
            enabled: video.enabled,
        }
    }
}
