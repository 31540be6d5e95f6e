use super::{
    handlers::{catalogues, health},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Catalogues
        .route("/api/v1/catalogues", get(catalogues::list_catalogues))
        .route(
            "/api/v1/catalogues/{id}/videos",
            get(catalogues::list_catalogue_videos),
        )
        .route(
            "/api/v1/catalogues/{id}/flip-url",
            get(catalogues::get_flip_url),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
