use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::servers::ServersRepository;

use crate::state::AppState;

pub mod servers;
pub mod statistics;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router over any conforming repository.
pub fn build_router<R: ServersRepository + 'static>(state: AppState<R>, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route(
            "/api/servers",
            get(servers::list_servers::<R>).post(servers::create_server::<R>),
        )
        .route("/api/servers/search", get(servers::search_servers::<R>))
        .route("/api/servers/suggest", get(servers::suggest_server_names::<R>))
        .route(
            "/api/servers/:id",
            get(servers::get_server::<R>)
                .put(servers::update_server::<R>)
                .delete(servers::delete_server::<R>),
        )
        .route("/api/statistics", get(statistics::get_statistics::<R>))
        .route("/api/cities", get(statistics::get_cities::<R>));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
