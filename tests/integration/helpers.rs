use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use catalogue_api::{
    domain::catalogue::{
        entity::{Catalogue, CatalogueVideo, VideoType},
        errors::DomainError,
        filter::CatalogueFilter,
        repository::CatalogueRepository,
    },
    infrastructure::assets::public_base_url::PublicBaseUrl,
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use std::{cmp::Ordering, collections::HashMap, sync::Arc};
use tower::ServiceExt;

pub const BASE_URL: &str = "https://erp.example.com";

/// Catalogue store held in memory, mirroring the Postgres queries.
#[derive(Default)]
pub struct InMemoryCatalogues {
    pub catalogues: Vec<Catalogue>,
    pub videos: Vec<CatalogueVideo>,
    pub unreachable: bool,
}

impl InMemoryCatalogues {
    fn check(&self) -> Result<(), DomainError> {
        if self.unreachable {
            Err(DomainError::InfrastructureError("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

/// NULL titles sort last, as in Postgres.
fn title_order(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl CatalogueRepository for InMemoryCatalogues {
    async fn find_filtered(&self, filter: &CatalogueFilter) -> Result<Vec<Catalogue>, DomainError> {
        self.check()?;
        let mut rows: Vec<Catalogue> = self
            .catalogues
            .iter()
            .filter(|c| filter.enabled().is_none_or(|e| c.enabled == e))
            .filter(|c| filter.item_group().is_none_or(|g| c.item_group.as_deref() == Some(g)))
            .filter(|c| filter.brand().is_none_or(|b| c.brand.as_deref() == Some(b)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| title_order(&a.title, &b.title))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Catalogue>, DomainError> {
        self.check()?;
        Ok(self.catalogues.iter().find(|c| c.id == id).cloned())
    }

    async fn count_enabled_videos(
        &self,
        parent_ids: &[String],
    ) -> Result<HashMap<String, i64>, DomainError> {
        self.check()?;
        let mut counts = HashMap::new();
        for video in self.videos.iter().filter(|v| v.enabled) {
            if parent_ids.contains(&video.parent) {
                *counts.entry(video.parent.clone()).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn find_enabled_videos(&self, parent_id: &str) -> Result<Vec<CatalogueVideo>, DomainError> {
        self.check()?;
        let mut videos: Vec<CatalogueVideo> = self
            .videos
            .iter()
            .filter(|v| v.enabled && v.parent == parent_id)
            .cloned()
            .collect();
        videos.sort_by_key(|v| v.idx);
        Ok(videos)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check()
    }
}

pub fn catalogue(id: &str, title: &str, sort_order: i64, enabled: bool) -> Catalogue {
    Catalogue {
        id: id.to_string(),
        title: Some(title.to_string()),
        sort_order,
        enabled,
        ..Default::default()
    }
}

pub fn video(parent: &str, idx: i32, enabled: bool) -> CatalogueVideo {
    CatalogueVideo {
        parent: parent.to_string(),
        idx,
        title: Some(format!("{} clip {}", parent, idx)),
        video_type: VideoType::YouTube,
        youtube_url: Some(format!("https://youtu.be/{}{}", parent, idx)),
        local_video_url: None,
        enabled,
    }
}

pub fn spawn_app(store: InMemoryCatalogues) -> Router {
    let state = AppState {
        catalogue_repo: Arc::new(store),
        assets: Arc::new(PublicBaseUrl::new(BASE_URL)),
    };
    create_router(state)
}

pub async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub fn assert_status(status: StatusCode, expected: StatusCode) {
    assert_eq!(status, expected, "expected {}, got {}", expected, status);
}
