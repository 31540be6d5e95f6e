use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A browsable catalogue record as stored by the backing data store.
///
/// The service only ever reads catalogues; every field mirrors a column of the
/// catalogue table and may be empty when the editor left it blank.
///
/// # Invariants
/// - `id` is unique and stable across requests
/// - `title`, `thumbnail_image`, `description` and `youtube_video_url` may be
///   empty strings as well as `None`; both mean "not set"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default, sqlx::FromRow)]
#[ts(export)]
pub struct Catalogue {
    /// Record name, used as the public identifier
    pub id: String,

    /// Display title (falls back to `id` when empty)
    pub title: Option<String>,

    /// Category classifier
    pub item_group: Option<String>,

    /// Brand classifier
    pub brand: Option<String>,

    /// Relative path of the thumbnail image
    pub thumbnail_image: Option<String>,

    pub description: Option<String>,

    /// Attached flipbook archive; any non-empty value means a flipbook exists
    pub flip_package: Option<String>,

    /// Relative path of the flipbook's HTML entry page
    pub flip_entry_file: Option<String>,

    /// Position in listings, ascending
    pub sort_order: i64,

    pub youtube_video_url: Option<String>,

    pub enabled: bool,
}

impl Catalogue {
    /// Title shown to clients: the stored title, or the id when it is blank.
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(self.id.as_str())
    }

    /// Case-insensitive substring match on the stored title.
    ///
    /// A blank needle matches everything; a blank title matches nothing else.
    pub fn title_contains(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    pub fn has_flip_package(&self) -> bool {
        non_empty(self.flip_package.as_deref()).is_some()
    }
}

/// Where a catalogue video is hosted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VideoType {
    YouTube,
    Local,
    /// Any value the editor typed that we don't recognise, kept verbatim
    Other(String),
}

impl From<&str> for VideoType {
    fn from(value: &str) -> Self {
        match value.trim() {
            "YouTube" => VideoType::YouTube,
            "Local" => VideoType::Local,
            other => VideoType::Other(other.to_string()),
        }
    }
}

impl VideoType {
    pub fn as_str(&self) -> &str {
        match self {
            VideoType::YouTube => "YouTube",
            VideoType::Local => "Local",
            VideoType::Other(value) => value,
        }
    }
}

/// A playable video attached to a catalogue as a child row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogueVideo {
    /// Id of the owning catalogue
    pub parent: String,

    /// Position within the parent, ascending
    pub idx: i32,

    pub title: Option<String>,

    pub video_type: VideoType,

    pub youtube_url: Option<String>,

    /// Relative path of an uploaded video file
    pub local_video_url: Option<String>,

    pub enabled: bool,
}

/// Treats `None` and `""` alike.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
