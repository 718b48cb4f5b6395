use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use service::servers::ServersRepository;

use crate::state::AppState;

/// Fleet statistics for the dashboard. An empty fleet (or a storage
/// failure, which the aggregator converts to "no data") responds 204.
pub async fn get_statistics<R: ServersRepository>(
    State(state): State<AppState<R>>,
) -> axum::response::Response {
    match state.stats.compute_statistics().await {
        Some(stats) => Json(stats).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Canonical city order for dropdowns and chart axes.
pub async fn get_cities<R: ServersRepository>(
    State(state): State<AppState<R>>,
) -> Json<Vec<String>> {
    Json(state.order.cities().to_vec())
}
