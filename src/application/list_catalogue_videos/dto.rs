use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VideoView {
    pub title: String,
    pub video_type: String,
    pub youtube_url: Option<String>,
    /// Absolute URL of an uploaded file
    pub local_video_url: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogueVideos {
    pub catalogue_id: String,
    pub videos: Vec<VideoView>,
    pub total: i64,
}
