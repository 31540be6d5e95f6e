use crate::domain::catalogue::{
    entity::{Catalogue, CatalogueVideo, VideoType},
    errors::DomainError,
    filter::CatalogueFilter,
    repository::CatalogueRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use tracing::{debug, error, info, instrument};

const CATALOGUE_COLUMNS: &str = "SELECT id, title, item_group, brand, thumbnail_image, description,
        flip_package, flip_entry_file, sort_order::bigint AS sort_order,
        youtube_video_url, enabled
 FROM catalogues";

#[derive(FromRow)]
struct CatalogueVideoRow {
    parent: String,
    idx: i32,
    title: Option<String>,
    video_type: Option<String>,
    youtube_url: Option<String>,
    local_video_url: Option<String>,
    enabled: bool,
}

impl From<CatalogueVideoRow> for CatalogueVideo {
    fn from(r: CatalogueVideoRow) -> Self {
        CatalogueVideo {
            parent: r.parent,
            idx: r.idx,
            title: r.title,
            // NULL stays unknown rather than being guessed
            video_type: VideoType::from(r.video_type.as_deref().unwrap_or_default()),
            youtube_url: r.youtube_url,
            local_video_url: r.local_video_url,
            enabled: r.enabled,
        }
    }
}

/// Postgres-backed catalogue store.
///
/// Reads the `catalogues` table and its `catalogue_videos` child table. The
/// schema is owned by the system that edits catalogues; this repository never
/// writes.
pub struct SqlxCatalogueRepository {
    pub pool: PgPool,
}

impl SqlxCatalogueRepository {
    /// Creates a new instance of the repository with the provided database pool.
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool for database operations
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxCatalogueRepository with connection pool");
        Self { pool }
    }
}

/// Appends the equality constraints of `filter` to a catalogue query.
fn apply_catalogue_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &CatalogueFilter) {
    qb.push(" WHERE TRUE");

    if let Some(enabled) = filter.enabled() {
        qb.push(" AND enabled = ").push_bind(enabled);
    }

    if let Some(item_group) = filter.item_group() {
        debug!("Filtering by item_group: {}", item_group);
        qb.push(" AND item_group = ").push_bind(item_group.to_string());
    }

    if let Some(brand) = filter.brand() {
        debug!("Filtering by brand: {}", brand);
        qb.push(" AND brand = ").push_bind(brand.to_string());
    }
}

fn infrastructure(context: &str, e: sqlx::Error) -> DomainError {
    error!("{} failed: {}", context, e);
    DomainError::InfrastructureError(format!("{}: {}", context, e))
}

#[async_trait]
impl CatalogueRepository for SqlxCatalogueRepository {
    #[instrument(skip(self))]
    async fn find_filtered(&self, filter: &CatalogueFilter) -> Result<Vec<Catalogue>, DomainError> {
        let mut qb = QueryBuilder::<Postgres>::new(CATALOGUE_COLUMNS);
        apply_catalogue_filters(&mut qb, filter);
        qb.push(" ORDER BY sort_order ASC, title ASC");

        let rows: Vec<Catalogue> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| infrastructure("Catalogue listing query", e))?;

        debug!("Catalogue query returned {} rows", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Catalogue>, DomainError> {
        let mut qb = QueryBuilder::<Postgres>::new(CATALOGUE_COLUMNS);
        qb.push(" WHERE id = ").push_bind(id.to_string());

        qb.build_query_as::<Catalogue>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| infrastructure("Catalogue lookup", e))
    }

    #[instrument(skip(self, parent_ids), fields(parents = parent_ids.len()))]
    async fn count_enabled_videos(
        &self,
        parent_ids: &[String],
    ) -> Result<HashMap<String, i64>, DomainError> {
        if parent_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(String, i64)> = sqlx::query_as(
            "SELECT parent, COUNT(*)::bigint
             FROM catalogue_videos
             WHERE parent = ANY($1) AND enabled
             GROUP BY parent",
        )
        .bind(parent_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure("Catalogue video count", e))?;

        Ok(counts.into_iter().collect())
    }

    #[instrument(skip(self))]
    async fn find_enabled_videos(&self, parent_id: &str) -> Result<Vec<CatalogueVideo>, DomainError> {
        let rows: Vec<CatalogueVideoRow> = sqlx::query_as(
            "SELECT parent, idx, title, video_type, youtube_url, local_video_url, enabled
             FROM catalogue_videos
             WHERE parent = $1 AND enabled
             ORDER BY idx ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure("Catalogue video listing", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| infrastructure("Database ping", e))
    }
}
