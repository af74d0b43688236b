use crate::{
    models::{error::ApiError, source::NewSourceName},
    utils::state::AppState,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;

pub async fn get_all_source_names(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let all_sources = state.store.list_source_names().await?;
    if all_sources.is_empty() {
        return Err(ApiError::not_found("No sources found"));
    }
    Ok((StatusCode::OK, Json(all_sources)))
}

pub async fn get_source_name_by_id(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    match state.store.source_name_by_id(id).await? {
        Some(source) => Ok((StatusCode::OK, Json(source))),
        None => Err(ApiError::not_found("No source found")),
    }
}

pub async fn add_source_name(
    State(state): State<AppState>,
    Json(source): Json<NewSourceName>,
) -> Result<impl IntoResponse, ApiError> {
    let (created, was_created) = state
        .store
        .get_or_create_source_name(&source.name)
        .await?;
    if !was_created {
        return Err(ApiError::conflict("Source already exist"));
    }
    Ok((StatusCode::CREATED, Json(created)))
}
