use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use models::server::{Model, NewServer};
use service::servers::ServersRepository;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub q: String,
}

/// List the fleet, optionally narrowed to a city substring.
pub async fn list_servers<R: ServersRepository>(
    State(state): State<AppState<R>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Model>>, ApiError> {
    let servers = match params.city {
        Some(city) => state.servers.get_servers_by_city(&city).await?,
        None => state.servers.get_servers().await?,
    };
    Ok(Json(servers))
}

pub async fn get_server<R: ServersRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
) -> Result<Json<Model>, ApiError> {
    match state.servers.get_server_by_id(id).await? {
        Some(server) => Ok(Json(server)),
        None => Err(ApiError::not_found("server")),
    }
}

pub async fn create_server<R: ServersRepository>(
    State(state): State<AppState<R>>,
    Json(input): Json<NewServer>,
) -> Result<(StatusCode, Json<Model>), ApiError> {
    let created = state.servers.add_server(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a server. A no-op (identity mismatch or absent record) is
/// reported as 404 so callers can tell nothing was applied.
pub async fn update_server<R: ServersRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
    Json(server): Json<Model>,
) -> Result<StatusCode, ApiError> {
    if state.servers.update_server(id, &server).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("server"))
    }
}

pub async fn delete_server<R: ServersRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.servers.delete_server(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("server"))
    }
}

pub async fn search_servers<R: ServersRepository>(
    State(state): State<AppState<R>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Model>>, ApiError> {
    Ok(Json(state.servers.search_servers(&params.q).await?))
}

pub async fn suggest_server_names<R: ServersRepository>(
    State(state): State<AppState<R>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.servers.suggest_server_names(&params.q).await?))
}
