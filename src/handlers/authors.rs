use crate::{
    models::{author::NewAuthor, error::ApiError},
    utils::state::AppState,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;

pub async fn get_all_authors(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let all_authors = state.store.list_authors().await?;
    if all_authors.is_empty() {
        return Err(ApiError::not_found("No authors found"));
    }
    Ok((StatusCode::OK, Json(all_authors)))
}

pub async fn get_author_by_id(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    match state.store.author_by_id(id).await? {
        Some(author) => Ok((StatusCode::OK, Json(author))),
        None => Err(ApiError::not_found("No author found")),
    }
}

pub async fn add_author(
    State(state): State<AppState>,
    Json(author): Json<NewAuthor>,
) -> Result<impl IntoResponse, ApiError> {
    let (created, was_created) = state.store.get_or_create_author(&author.name).await?;
    if !was_created {
        return Err(ApiError::conflict("Author already exist"));
    }
    Ok((StatusCode::CREATED, Json(created)))
}
