use crate::{
    application::{
        get_flip_url::{dto::FlipUrlResponse, use_case::GetFlipUrlUseCase},
        list_catalogue_videos::{dto::CatalogueVideos, use_case::ListCatalogueVideosUseCase},
        list_catalogues::{
            dto::{CatalogueListing, ListCataloguesRequest},
            use_case::ListCataloguesUseCase,
        },
    },
    domain::catalogue::filter::EnabledFilter,
    presentation::http::{envelope::Envelope, errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::time::Instant;
use tracing::{info, instrument};

/// Query parameters for the catalogue listing.
///
/// Every parameter is optional. `enabled` accepts `1`, `0`, or an empty
/// value / `any` to list enabled and disabled catalogues together; leaving it
/// out lists enabled catalogues only.
#[derive(Debug, Deserialize)]
pub struct CatalogueListQuery {
    /// Exact category match
    item_group: Option<String>,

    /// Exact brand match
    brand: Option<String>,

    /// Case-insensitive substring of the title
    search: Option<String>,

    enabled: Option<String>,
}

impl CatalogueListQuery {
    fn into_request(self) -> Result<ListCataloguesRequest, AppError> {
        let enabled = match self.enabled.as_deref() {
            Some(raw) => raw
                .parse::<EnabledFilter>()
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
            None => EnabledFilter::default(),
        };

        Ok(ListCataloguesRequest {
            item_group: self.item_group,
            brand: self.brand,
            search: self.search,
            enabled,
        })
    }
}

/// Lists catalogues for the mobile browsing screen.
///
/// # Query Parameters
/// - `item_group`: Filter by category (optional)
/// - `brand`: Filter by brand (optional)
/// - `search`: Title substring, case-insensitive (optional)
/// - `enabled`: `1` (default), `0`, or `any`
///
/// # Errors
/// Returns `AppError::BadRequest` for an unparseable `enabled` value and
/// `AppError::Internal` when the store fails.
#[instrument(skip(state), fields(
    item_group = ?params.item_group,
    brand = ?params.brand,
    has_search = params.search.as_deref().is_some_and(|s| !s.is_empty())
))]
pub async fn list_catalogues(
    State(state): State<AppState>,
    Query(params): Query<CatalogueListQuery>,
) -> Result<Json<Envelope<CatalogueListing>>, AppError> {
    let start_time = Instant::now();

    let request = params.into_request()?;

    let listing = ListCataloguesUseCase::new(state.catalogue_repo.clone(), state.assets.clone())
        .execute(request)
        .await?;

    info!(
        "Catalogue listing completed in {:?}, returned {} catalogues",
        start_time.elapsed(),
        listing.total
    );

    Ok(Json(Envelope::new(listing)))
}

#[instrument(skip(state))]
pub async fn list_catalogue_videos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<CatalogueVideos>>, AppError> {
    let videos = ListCatalogueVideosUseCase::new(state.catalogue_repo.clone(), state.assets.clone())
        .execute(&id)
        .await?;

    Ok(Json(Envelope::new(videos)))
}

#[instrument(skip(state))]
pub async fn get_flip_url(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<FlipUrlResponse>>, AppError> {
    let response = GetFlipUrlUseCase::new(state.catalogue_repo.clone(), state.assets.clone())
        .execute(&id)
        .await?;

    if response.flip_url.is_none() {
        info!("Catalogue {} has no flipbook", response.catalogue_id);
    }

    Ok(Json(Envelope::new(response)))
}
