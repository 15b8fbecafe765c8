pub mod docs;
pub mod health;
pub mod openings;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Builds the full HTTP surface. Opening routes live under `/api/v1`.
pub fn router(state: AppState) -> Router {
    let openings_api = Router::new()
        .route(
            "/openings",
            get(openings::list_openings)
                .post(openings::create_opening)
                .put(openings::update_opening)
                .delete(openings::delete_opening),
        )
        .route("/openings/opening", get(openings::show_opening))
        .route("/openapi.json", get(docs::openapi_json));

    Router::new()
        .route("/ping", get(health::ping))
        .route("/health", get(health::health))
        .nest("/api/v1", openings_api)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
}
